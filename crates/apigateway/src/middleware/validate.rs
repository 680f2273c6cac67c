use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use tracing::warn;

/// JSON body extractor whose rejection uses the common error envelope.
///
/// Field rules run in the service layer, so only syntax and shape are
/// checked here.
pub struct SimpleJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected request body: {}", rejection.body_text());
                HttpError::BadRequest(format!(
                    "Request body is not valid JSON: {}",
                    rejection.body_text()
                ))
            })?;

        Ok(Self(value))
    }
}
