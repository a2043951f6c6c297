use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{HeaderMap, header::AUTHORIZATION},
};

use civilboost_adapters::session::SessionTokenError;

use crate::error::ApiError;

/// `Json` wrapper whose rejection is the service's own validation error, so
/// unparseable bodies answer with the standard envelope instead of the
/// framework's plain-text rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}

// Pull the token out of `Authorization: Bearer <token>`
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, SessionTokenError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(SessionTokenError::MissingToken)?;
    let value = value
        .to_str()
        .map_err(|_| SessionTokenError::InvalidToken)?;
    value
        .strip_prefix("Bearer ")
        .ok_or(SessionTokenError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_missing_token() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_bearer_token(&headers),
            Err(SessionTokenError::MissingToken)
        ));
    }

    #[test]
    fn non_bearer_scheme_is_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert!(matches!(
            extract_bearer_token(&headers),
            Err(SessionTokenError::InvalidToken)
        ));
    }
}
