use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::{Cidade, ServiceError};
use tracing::info;
use validator::Validate;

use crate::{errors::JsonApiError, extract::ValidatedJson, state::AppState};

/// Body of POST/PUT `/cidades`. `comercios` may be present but is ignored.
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct CidadeInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(required(message = "nome must not be null"))]
    pub nome: Option<String>,
}

impl TryFrom<CidadeInput> for Cidade {
    type Error = ServiceError;

    fn try_from(input: CidadeInput) -> Result<Self, Self::Error> {
        let nome = input.nome.ok_or_else(|| ServiceError::Validation("nome must not be null".into()))?;
        Ok(Cidade { id: input.id, ..Cidade::new(nome) })
    }
}

#[utoipa::path(
    get, path = "/cidades", tag = "cidades",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CidadeDoc]),
        (status = 500, description = "Store Error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Cidade>>, JsonApiError> {
    let list = state.cidades.list().await?;
    info!(count = list.len(), "list cidades");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/cidades/{id}", tag = "cidades",
    params(("id" = i32, Path, description = "Cidade ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CidadeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Cidade>, JsonApiError> {
    match state.cidades.find_by_id(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    post, path = "/cidades", tag = "cidades",
    request_body = CidadeInput,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CidadeDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CidadeInput>,
) -> Result<Json<Cidade>, JsonApiError> {
    let created = state.cidades.save(Cidade::try_from(input)?).await?;
    info!(id = ?created.id, nome = %created.nome, "created cidade");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/cidades/{id}", tag = "cidades",
    params(("id" = i32, Path, description = "Cidade ID")),
    request_body = CidadeInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CidadeDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<CidadeInput>,
) -> Result<Json<Cidade>, JsonApiError> {
    match state.cidades.update(id, Cidade::try_from(input)?).await? {
        Some(updated) => {
            info!(id, "updated cidade");
            Ok(Json(updated))
        }
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    delete, path = "/cidades/{id}", tag = "cidades",
    params(("id" = i32, Path, description = "Cidade ID")),
    responses(
        (status = 204, description = "Deleted, together with its comercios; also returned for unknown ids"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.cidades.delete(id).await?;
    info!(id, "deleted cidade");
    Ok(StatusCode::NO_CONTENT)
}
