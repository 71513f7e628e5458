//! JSON extractor with validation using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::JsonApiError;

/// Deserializes the body and runs `Validate` before the handler sees it.
///
/// Malformed JSON and failed field rules are both answered with 400; the
/// `details` object of a validation failure is keyed by field name.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        data.validate().map_err(|e| {
            JsonApiError::validation("Request validation failed", Some(field_details(&e)))
        })?;
        Ok(ValidatedJson(data))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> JsonApiError {
    JsonApiError::validation(rejection.body_text(), None)
}

/// JSON bodies are camelCase; `cidade_id` is reported as `cidadeId`.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Field errors keyed by the name the client sent.
pub(crate) fn field_details(errors: &ValidationErrors) -> serde_json::Value {
    let map = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<serde_json::Value> = errs
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                    })
                })
                .collect();
            (wire_name(field), serde_json::Value::Array(messages))
        })
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}
