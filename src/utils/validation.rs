//! Input validation utilities

use axum::extract::{FromRequest, Json, Request};
use serde::{de::DeserializeOwned, Deserialize};
use uuid::Uuid;
use validator::Validate;

use super::error::AppError;

/// JSON body extractor that also runs the payload's `validator` rules.
///
/// Malformed JSON, missing required fields and rule violations are all
/// rejected with [`AppError::ValidationError`] before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// `?id=` query parameter used by the employee update and delete endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// Parse the id, rejecting a missing or malformed value as a validation error
    pub fn parse(&self) -> Result<Uuid, AppError> {
        let raw = self
            .id
            .as_deref()
            .ok_or_else(|| AppError::validation("Missing required query parameter: id"))?;

        Uuid::parse_str(raw).map_err(|_| AppError::validation(format!("Invalid id: {}", raw)))
    }
}

/// Parse an id taken from the request path.
///
/// A path segment that is not a UUID cannot name an existing resource, so it
/// is reported as not found.
pub fn parse_path_id(raw: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(format!("{} not found", resource)))
}
