// HTTP handlers - one store call per request
//
// Success bodies: reads return the entity,
// creates return the JSON string "CREATED", updates/deletes return "OK".
// All of them use status 200.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;

use super::error::ApiError;
use super::AppState;
use crate::entities::{Person, PersonId, Skill, SkillId};
use crate::error::StoreError;

/// Status payload returned by mutating endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Created,
    Ok,
}

// ============================================================================
// Reads
// ============================================================================

/// GET / - Liveness text
pub async fn home() -> &'static str {
    "Home"
}

/// GET /getAll - All people with their skills
pub async fn get_all(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.store.list_people())
}

/// GET /person/:person_id
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<PersonId>,
) -> Result<Json<Person>, ApiError> {
    state
        .store
        .get_person(person_id)
        .map(Json)
        .ok_or(ApiError::NotFound(StoreError::PersonNotFound(person_id)))
}

/// GET /skill/:person_id/:skill_id
pub async fn get_skill(
    State(state): State<AppState>,
    Path((person_id, skill_id)): Path<(PersonId, SkillId)>,
) -> Result<Json<Skill>, ApiError> {
    state
        .store
        .get_skill(person_id, skill_id)
        .map(Json)
        .ok_or(ApiError::NotFound(StoreError::SkillNotFound { person_id, skill_id }))
}

// ============================================================================
// Writes
// ============================================================================

/// POST /person - Register a new person
pub async fn add_person(
    State(state): State<AppState>,
    Json(new_person): Json<Person>,
) -> Json<Outcome> {
    state.store.add_person(new_person);
    Json(Outcome::Created)
}

/// POST /skill/:person_id - Add a skill to a person
pub async fn add_skill(
    State(state): State<AppState>,
    Path(person_id): Path<PersonId>,
    Json(new_skill): Json<Skill>,
) -> Result<Json<Outcome>, ApiError> {
    state.store.add_skill(person_id, new_skill)?;
    Ok(Json(Outcome::Created))
}

/// PUT /person - Replace a person's name and skills
pub async fn update_person(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> Result<Json<Outcome>, ApiError> {
    state.store.update_person(person)?;
    Ok(Json(Outcome::Ok))
}

/// PUT /skill/:person_id - Edit one skill, returns the rebuilt person
pub async fn update_skill(
    State(state): State<AppState>,
    Path(person_id): Path<PersonId>,
    Json(skill): Json<Skill>,
) -> Result<Json<Person>, ApiError> {
    let person = state.store.update_skill(person_id, skill)?;
    Ok(Json(person))
}

/// DELETE /person/:person_id
pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<PersonId>,
) -> Result<Json<Outcome>, ApiError> {
    state.store.remove_person(person_id)?;
    Ok(Json(Outcome::Ok))
}

/// DELETE /skill/:person_id/:skill_id
pub async fn delete_skill(
    State(state): State<AppState>,
    Path((person_id, skill_id)): Path<(PersonId, SkillId)>,
) -> Result<Json<Outcome>, ApiError> {
    state.store.remove_skill(person_id, skill_id)?;
    Ok(Json(Outcome::Ok))
}
