// REST API with Axum
//
// Thin mapping of verbs/paths onto SkillStore operations:
//
//   GET    /                              "Home"
//   GET    /getAll                        list people
//   GET    /person/:person_id             get person
//   GET    /skill/:person_id/:skill_id    get skill
//   POST   /person                        add person
//   POST   /skill/:person_id              add skill
//   PUT    /person                        update person
//   PUT    /skill/:person_id              update skill
//   DELETE /person/:person_id             remove person
//   DELETE /skill/:person_id/:skill_id    remove skill

pub mod error;
pub mod handlers;

use axum::{
    routing::get,
    routing::post,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::SkillStore;

pub use error::ApiError;
pub use handlers::Outcome;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SkillStore,
}

/// Build the router over a store. Clones of the store share state, so
/// several routers built from one store see the same data.
pub fn router(store: SkillStore) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(handlers::home))
        .route("/getAll", get(handlers::get_all))
        .route(
            "/person",
            post(handlers::add_person).put(handlers::update_person),
        )
        .route(
            "/person/:person_id",
            get(handlers::get_person).delete(handlers::delete_person),
        )
        .route(
            "/skill/:person_id",
            post(handlers::add_skill).put(handlers::update_skill),
        )
        .route(
            "/skill/:person_id/:skill_id",
            get(handlers::get_skill).delete(handlers::delete_skill),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================
