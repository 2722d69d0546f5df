use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use validator::{Validate, ValidationErrors};

/// JSON body extractor that runs `validator` rules before the handler sees the value.
///
/// Both malformed JSON and failed rules are rejected with the error envelope
/// `{ "status": "error", "message": ... }`.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "status": "error",
                    "message": format!("Invalid JSON: {}", rejection.body_text()),
                });
                (rejection.status(), Json(payload))
            })?;

        value.validate().map_err(|errors| {
            let payload = json!({
                "status": "error",
                "message": format_validation_errors(&errors),
                "details": field_messages(&errors),
            });
            (StatusCode::BAD_REQUEST, Json(payload))
        })?;

        Ok(Self(value))
    }
}

fn describe(field: &str, code: &str) -> String {
    match code {
        "length" => "Invalid length".to_string(),
        "range" => "Value out of range".to_string(),
        "url" => "Invalid URL format".to_string(),
        _ => format!("Invalid {field}"),
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| describe(field, &e.code));
                format!("{field}: {message}")
            })
        })
        .collect();

    if messages.is_empty() {
        return "Validation failed".to_string();
    }

    messages.sort();
    messages.join("; ")
}

fn field_messages(errors: &ValidationErrors) -> Value {
    let map: Map<String, Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| describe(field, &e.code))
                })
                .collect();
            (field.to_string(), json!(messages))
        })
        .collect();

    Value::Object(map)
}
