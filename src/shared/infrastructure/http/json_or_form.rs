// Body extractor accepting either a JSON or a URL encoded form payload.
//
// The content type picks the decoder: `application/x-www-form-urlencoded` goes through
// `Form`, anything else through `Json`. Any rejection becomes a 422.

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::{StatusCode, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;

pub struct JsonOrForm<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = StatusCode;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
            return Ok(Self(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
        Ok(Self(value))
    }
}
