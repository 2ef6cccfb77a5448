//! Route definitions for the Fyyur booking site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{artists, shows, venues};
use crate::state::AppState;

/// Routes mounted at `/fyyur`.
///
/// ```text
/// GET    /venues                -> list_venues
/// POST   /venues/search         -> search_venues
/// POST   /venues/create         -> create_venue
/// GET    /venues/{id}           -> get_venue
/// DELETE /venues/{id}           -> delete_venue
/// POST   /venues/{id}/edit      -> update_venue
///
/// GET    /artists               -> list_artists
/// POST   /artists/search        -> search_artists
/// POST   /artists/create        -> create_artist
/// GET    /artists/{id}          -> get_artist
/// DELETE /artists/{id}          -> delete_artist
/// POST   /artists/{id}/edit     -> update_artist
///
/// GET    /shows                 -> list_shows
/// POST   /shows/create          -> create_show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/venues", venue_routes())
        .nest("/artists", artist_routes())
        .route("/shows", get(shows::list_shows))
        .route("/shows/create", post(shows::create_show))
}

fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(venues::list_venues))
        .route("/search", post(venues::search_venues))
        .route("/create", post(venues::create_venue))
        .route(
            "/{id}",
            get(venues::get_venue).delete(venues::delete_venue),
        )
        .route("/{id}/edit", post(venues::update_venue))
}

fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(artists::list_artists))
        .route("/search", post(artists::search_artists))
        .route("/create", post(artists::create_artist))
        .route(
            "/{id}",
            get(artists::get_artist).delete(artists::delete_artist),
        )
        .route("/{id}/edit", post(artists::update_artist))
}
