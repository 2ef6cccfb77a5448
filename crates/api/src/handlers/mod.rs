pub mod artists;
pub mod coffee;
pub mod hello;
pub mod shows;
pub mod todo;
pub mod trivia;
pub mod venues;
