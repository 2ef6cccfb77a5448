//! Integration tests for the repository layer against a real database.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use classroom_core::coffee::RecipePart;
use classroom_db::models::artist::{CreateArtist, UpdateArtist};
use classroom_db::models::person::CreatePerson;
use classroom_db::models::question::NewQuestion;
use classroom_db::models::show::NewShow;
use classroom_db::models::todo::{CreateTodo, CreateTodoList};
use classroom_db::models::venue::{CreateVenue, UpdateVenue};
use classroom_db::repositories::{
    ArtistRepo, CategoryRepo, DrinkRepo, PersonRepo, QuestionRepo, ShowRepo, TodoListRepo,
    TodoRepo, VenueRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_venue(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        genres: vec!["Jazz".to_string()],
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: None,
        website: None,
        image_link: None,
        facebook_link: None,
        seeking_talent: None,
        seeking_description: None,
    }
}

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        genres: vec!["Rock n Roll".to_string()],
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        website: None,
        image_link: Some("https://example.com/a.png".to_string()),
        facebook_link: None,
        seeking_venue: Some(true),
        seeking_description: None,
    }
}

fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: "42".to_string(),
        category,
        difficulty: 2,
    }
}

// ---------------------------------------------------------------------------
// Persons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_person_is_lowest_id(pool: PgPool) {
    assert!(PersonRepo::first(&pool).await.unwrap().is_none());

    for name in ["Amy", "Bob"] {
        PersonRepo::create(&pool, &CreatePerson { name: name.into() })
            .await
            .unwrap();
    }

    let first = PersonRepo::first(&pool).await.unwrap().unwrap();
    assert_eq!(first.name, "Amy");

    let page = PersonRepo::list(&pool, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Bob");
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_todo_list_lifecycle(pool: PgPool) {
    let list = TodoListRepo::create(&pool, &CreateTodoList { name: "Chores".into() })
        .await
        .unwrap();

    for description in ["dishes", "laundry"] {
        TodoRepo::create(
            &pool,
            &CreateTodo {
                description: description.into(),
                list_id: list.id,
            },
        )
        .await
        .unwrap();
    }

    let updated = TodoListRepo::complete_all(&pool, list.id).await.unwrap();
    assert_eq!(updated, Some(2));

    let todos = TodoRepo::list_by_list(&pool, list.id).await.unwrap();
    assert!(todos.iter().all(|t| t.completed));

    assert!(TodoListRepo::delete(&pool, list.id).await.unwrap());
    let todos = TodoRepo::list_by_list(&pool, list.id).await.unwrap();
    assert!(todos.is_empty(), "todos cascade with their list");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complete_all_on_missing_list(pool: PgPool) {
    assert_eq!(TodoListRepo::complete_all(&pool, 999_999).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_todo_with_unknown_list_is_fk_violation(pool: PgPool) {
    let result = TodoRepo::create(
        &pool,
        &CreateTodo {
            description: "orphan".into(),
            list_id: 999_999,
        },
    )
    .await;

    let err = result.expect_err("unknown list must fail");
    assert_eq!(
        err.as_database_error().unwrap().code().as_deref(),
        Some("23503")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_completed_missing_todo(pool: PgPool) {
    assert!(TodoRepo::set_completed(&pool, 999_999, true)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Venues, artists, shows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_venue_summaries_count_upcoming_shows(pool: PgPool) {
    let hop = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("Park Square", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals"))
        .await
        .unwrap();

    for offset in [-10, 10, 20] {
        ShowRepo::create(
            &pool,
            &NewShow {
                artist_id: artist.id,
                venue_id: hop.id,
                start_time: Utc::now() + Duration::days(offset),
            },
        )
        .await
        .unwrap();
    }

    let summaries = VenueRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(summaries.len(), 2);
    let hop_summary = summaries.iter().find(|v| v.id == hop.id).unwrap();
    assert_eq!(hop_summary.num_upcoming_shows, 2);

    let shows = ShowRepo::for_venue(&pool, hop.id).await.unwrap();
    assert_eq!(shows.len(), 3);
    assert_eq!(shows[0].artist_name, "Guns N Petals");
    assert!(shows[0].start_time < shows[1].start_time);

    let listing = ShowRepo::list_all(&pool).await.unwrap();
    assert_eq!(listing.len(), 3);
    assert_eq!(listing[0].venue_name, "The Musical Hop");
    assert_eq!(
        listing[0].artist_image_link.as_deref(),
        Some("https://example.com/a.png")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_search_is_case_insensitive(pool: PgPool) {
    VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();

    let hits = VenueRepo::search(&pool, "hop").await.unwrap();
    assert_eq!(hits.len(), 1);

    let hits = VenueRepo::search(&pool, "Music").await.unwrap();
    assert_eq!(hits.len(), 2);

    let hits = VenueRepo::search(&pool, "%").await.unwrap();
    assert!(hits.is_empty(), "wildcards in the term match literally");

    ArtistRepo::create(&pool, &new_artist("Matt Quevedo")).await.unwrap();
    ArtistRepo::create(&pool, &new_artist("The Wild Sax Band")).await.unwrap();
    let hits = ArtistRepo::search(&pool, "A").await.unwrap();
    assert_eq!(hits.len(), 2);
    let hits = ArtistRepo::search(&pool, "band").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].num_upcoming_shows, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Old Name", "Austin", "TX"))
        .await
        .unwrap();

    let updated = VenueRepo::update(
        &pool,
        venue.id,
        &UpdateVenue {
            name: Some("New Name".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.city, "Austin");
    assert_eq!(updated.genres, vec!["Jazz".to_string()]);

    let artist = ArtistRepo::create(&pool, &new_artist("Someone")).await.unwrap();
    let updated = ArtistRepo::update(
        &pool,
        artist.id,
        &UpdateArtist {
            seeking_venue: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!updated.seeking_venue);
    assert_eq!(updated.name, "Someone");

    assert!(VenueRepo::update(&pool, 999_999, &UpdateVenue::default())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_show_with_unknown_artist_is_fk_violation(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Hall", "Austin", "TX"))
        .await
        .unwrap();

    let result = ShowRepo::create(
        &pool,
        &NewShow {
            artist_id: 999_999,
            venue_id: venue.id,
            start_time: Utc::now(),
        },
    )
    .await;

    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_artist_cascades_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Hall", "Austin", "TX"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Gone")).await.unwrap();
    ShowRepo::create(
        &pool,
        &NewShow {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap();

    assert!(ArtistRepo::delete(&pool, artist.id).await.unwrap());
    assert!(ShowRepo::for_venue(&pool, venue.id).await.unwrap().is_empty());
    assert!(!ArtistRepo::delete(&pool, artist.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Trivia
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_create_and_delete_report_totals(pool: PgPool) {
    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories[0].kind, "Science");

    let (first, total) = QuestionRepo::create(&pool, &new_question("What is H2O?", 1))
        .await
        .unwrap();
    assert_eq!(total, 1);
    let (_, total) = QuestionRepo::create(&pool, &new_question("Who painted it?", 2))
        .await
        .unwrap();
    assert_eq!(total, 2);

    assert_eq!(QuestionRepo::delete(&pool, first.id).await.unwrap(), Some(1));
    assert_eq!(QuestionRepo::delete(&pool, first.id).await.unwrap(), None);
    assert_eq!(QuestionRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_filters(pool: PgPool) {
    QuestionRepo::create(&pool, &new_question("What is the TITLE of the book?", 2))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("Which element is Fe?", 1))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("Which planet is red?", 1))
        .await
        .unwrap();

    assert_eq!(QuestionRepo::search(&pool, "title").await.unwrap().len(), 1);
    assert_eq!(QuestionRepo::list_by_category(&pool, 1).await.unwrap().len(), 2);
    assert_eq!(QuestionRepo::quiz_pool(&pool, None).await.unwrap().len(), 3);
    assert_eq!(QuestionRepo::quiz_pool(&pool, Some(2)).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Drinks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_drink_recipe_round_trips_through_jsonb(pool: PgPool) {
    let recipe = vec![
        RecipePart {
            name: "espresso".into(),
            color: "brown".into(),
            parts: 1,
        },
        RecipePart {
            name: "milk".into(),
            color: "white".into(),
            parts: 3,
        },
    ];
    let drink = DrinkRepo::create(&pool, "Latte", &recipe).await.unwrap();
    assert_eq!(drink.recipe.0, recipe);

    let duplicate = DrinkRepo::create(&pool, "Latte", &recipe).await;
    let err = duplicate.expect_err("duplicate title must fail");
    assert_eq!(
        err.as_database_error().unwrap().code().as_deref(),
        Some("23505")
    );

    let renamed = DrinkRepo::update(&pool, drink.id, Some("Flat White"), None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.title, "Flat White");
    assert_eq!(renamed.recipe.0.len(), 2);

    assert!(DrinkRepo::delete(&pool, drink.id).await.unwrap());
    assert!(DrinkRepo::list(&pool).await.unwrap().is_empty());
}
