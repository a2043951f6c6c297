use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};

use civilboost_adapters::session::{SessionTokenConfig, validate_session_token};
use civilboost_application::GetProfileUseCase;
use civilboost_core::UserStore;

use crate::envelope::{ApiResponse, ProfileData};
use crate::error::ApiError;
use crate::extract::extract_bearer_token;

#[tracing::instrument(name = "Get profile", skip_all)]
pub async fn profile<U>(
    State((user_store, token_config)): State<(U, SessionTokenConfig)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let token = extract_bearer_token(&headers)?;
    let user_id = validate_session_token(token, &token_config)?;

    let use_case = GetProfileUseCase::new(user_store);
    let record = use_case.execute(user_id).await?;

    Ok(Json(ApiResponse::data_only(ProfileData { user: record })))
}
