use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::middleware::{ApiResult, AppState},
    models::{Person, PersonPayload},
};

pub async fn list_persons(State(state): State<AppState>) -> ApiResult<Json<Vec<Person>>> {
    let persons = state.person_service.list().await?;
    Ok(Json(persons))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Person>> {
    let person = state.person_service.get(&id).await?;
    Ok(Json(person))
}

pub async fn get_person_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Person>> {
    let person = state.person_service.get_by_name(&name).await?;
    Ok(Json(person))
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonPayload>,
) -> ApiResult<Json<Person>> {
    let person = state.person_service.create(&payload).await?;
    Ok(Json(person))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PersonPayload>,
) -> ApiResult<Json<Person>> {
    let person = state.person_service.update(&id, &payload).await?;
    Ok(Json(person))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.person_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
