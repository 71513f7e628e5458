use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::TipoComercio;
use serde::Deserialize;
use service::{Comercio, ServiceError};
use tracing::info;
use validator::{Validate, ValidationError};

use crate::{errors::JsonApiError, extract::ValidatedJson, state::AppState};

fn validate_tipo(tipo: &str) -> Result<(), ValidationError> {
    TipoComercio::parse(tipo).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("invalid_tipo");
        err.message = Some(e.to_string().into());
        err
    })
}

/// Body of POST/PUT `/comercios`. The owning city is referenced by `cidadeId`.
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct ComercioInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(required(message = "nome must not be null"))]
    pub nome: Option<String>,
    #[validate(required(message = "responsavel must not be null"))]
    pub responsavel: Option<String>,
    /// One of FARMACIA, PADARIA, POSTO_GASOLINA, LANCHONETE.
    #[validate(required(message = "tipo must not be null"), custom(function = "validate_tipo"))]
    pub tipo: Option<String>,
    #[serde(rename = "cidadeId")]
    #[validate(required(message = "cidadeId must not be null"))]
    pub cidade_id: Option<i32>,
}

impl TryFrom<ComercioInput> for Comercio {
    type Error = ServiceError;

    fn try_from(input: ComercioInput) -> Result<Self, Self::Error> {
        let missing = |field: &str| ServiceError::Validation(format!("{field} must not be null"));
        let tipo = input.tipo.ok_or_else(|| missing("tipo"))?;
        Ok(Comercio {
            id: input.id,
            nome: input.nome.ok_or_else(|| missing("nome"))?,
            responsavel: input.responsavel.ok_or_else(|| missing("responsavel"))?,
            tipo: TipoComercio::parse(&tipo)?,
            cidade_id: input.cidade_id.ok_or_else(|| missing("cidadeId"))?,
        })
    }
}

#[utoipa::path(
    get, path = "/comercios", tag = "comercios",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ComercioDoc]),
        (status = 500, description = "Store Error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Comercio>>, JsonApiError> {
    let list = state.comercios.list().await?;
    info!(count = list.len(), "list comercios");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/comercios", tag = "comercios",
    request_body = ComercioInput,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ComercioDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Store Error, including an unknown cidadeId")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ComercioInput>,
) -> Result<Json<Comercio>, JsonApiError> {
    let created = state.comercios.save(Comercio::try_from(input)?).await?;
    info!(id = ?created.id, cidade_id = created.cidade_id, tipo = %created.tipo, "created comercio");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/comercios/{id}", tag = "comercios",
    params(("id" = i32, Path, description = "Comercio ID")),
    request_body = ComercioInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ComercioDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<ComercioInput>,
) -> Result<Json<Comercio>, JsonApiError> {
    match state.comercios.update(id, Comercio::try_from(input)?).await? {
        Some(updated) => {
            info!(id, "updated comercio");
            Ok(Json(updated))
        }
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    delete, path = "/comercios/{id}", tag = "comercios",
    params(("id" = i32, Path, description = "Comercio ID")),
    responses(
        (status = 204, description = "Deleted; also returned for unknown ids"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.comercios.delete(id).await?;
    info!(id, "deleted comercio");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> ComercioInput {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn valid_input_converts() {
        let input = parse(json!({
            "nome": "Padaria Estrela", "responsavel": "Lia", "tipo": "PADARIA", "cidadeId": 2
        }));
        input.validate().unwrap();
        let c = Comercio::try_from(input).unwrap();
        assert_eq!(c.tipo, TipoComercio::Padaria);
        assert_eq!(c.cidade_id, 2);
        assert_eq!(c.id, None);
    }

    #[test]
    fn unknown_tipo_is_a_field_error() {
        let input = parse(json!({
            "nome": "Banca", "responsavel": "Leo", "tipo": "BANCA", "cidadeId": 1
        }));
        let errs = input.validate().unwrap_err();
        let fields = errs.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["tipo"][0].code, "invalid_tipo");
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errs = parse(json!({})).validate().unwrap_err();
        let details = crate::extract::field_details(&errs);
        let fields = details.as_object().unwrap();
        assert_eq!(fields.len(), 4);
        assert!(fields.contains_key("nome"));
        assert!(fields.contains_key("responsavel"));
        assert!(fields.contains_key("tipo"));
        assert!(fields.contains_key("cidadeId"));
    }

    #[test]
    fn missing_cidade_id_is_reported_by_wire_name() {
        let input = parse(json!({"nome": "a", "responsavel": "b", "tipo": "PADARIA"}));
        let details = crate::extract::field_details(&input.validate().unwrap_err());
        let keys: Vec<_> = details.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["cidadeId"]);
    }
}
