//! Submission body extractor.

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, Method};
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A form submission sent either as JSON or as `application/x-www-form-urlencoded`.
///
/// An empty body, or one of any other content type, carries no fields and
/// yields `T::default()`, leaving the missing-field check to validation.
#[derive(Debug, Clone)]
pub struct Submission<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == FORM_CONTENT_TYPE {
        BodyKind::Form
    } else if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for Submission<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if bytes.is_empty() || kind == BodyKind::Other {
            return Ok(Self(T::default()));
        }

        if kind == BodyKind::Json {
            let Json(value) =
                Json::<T>::from_bytes(&bytes).map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return Ok(Self(value));
        }

        let mut form = Request::new(Body::from(bytes));
        *form.method_mut() = Method::POST;
        form.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        let Form(value) = Form::<T>::from_request(form, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(value))
    }
}
