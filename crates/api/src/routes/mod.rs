pub mod coffee;
pub mod fyyur;
pub mod health;
pub mod hello;
pub mod todo;
pub mod trivia;

use axum::Router;

use crate::state::AppState;

/// Build the route tree for every app.
///
/// Route hierarchy:
///
/// ```text
/// /hello                                  greeting (text)
/// /hello/persons                          list, create
///
/// /todo/lists                             list
/// /todo/lists/create                      create (POST)
/// /todo/lists/{id}                        get, delete
/// /todo/lists/{id}/set-completed          complete every todo (POST)
/// /todo/todos/create                      create (POST)
/// /todo/todos/{id}/set-completed          toggle (POST)
/// /todo/todos/{id}                        delete
///
/// /fyyur/venues                           list grouped by area
/// /fyyur/venues/search                    search (POST)
/// /fyyur/venues/create                    create (POST)
/// /fyyur/venues/{id}                      get, delete
/// /fyyur/venues/{id}/edit                 update (POST)
/// /fyyur/artists                          list
/// /fyyur/artists/search                   search (POST)
/// /fyyur/artists/create                   create (POST)
/// /fyyur/artists/{id}                     get, delete
/// /fyyur/artists/{id}/edit                update (POST)
/// /fyyur/shows                            list
/// /fyyur/shows/create                     create (POST)
///
/// /trivia/categories                      list
/// /trivia/questions                       paginated list, create
/// /trivia/questions/{id}                  delete
/// /trivia/search_question                 search (POST)
/// /trivia/category/{id}/questions         paginated list by category
/// /trivia/quizzes                         next quiz question (POST)
///
/// /coffee                                 ping
/// /coffee/drinks                          list (short), create
/// /coffee/drinks-detail                   list (long)
/// /coffee/drinks/{id}                     update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/hello", hello::router())
        .nest("/todo", todo::router())
        .nest("/fyyur", fyyur::router())
        .nest("/trivia", trivia::router())
        .nest("/coffee", coffee::router())
}
