use uuid::Uuid;

use civilboost_core::{UserRecord, UserStore, UserStoreError};

/// Error types specific to the get profile use case
#[derive(Debug, thiserror::Error)]
pub enum GetProfileError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Get profile use case - fetches the record behind a session token's
/// user id
pub struct GetProfileUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> GetProfileUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: Uuid) -> Result<UserRecord, GetProfileError> {
        let record = self.user_store.get_user_by_id(user_id).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{new_user, InMemoryUserStore};

    #[tokio::test]
    async fn returns_record_for_known_id() {
        let store = InMemoryUserStore::default();
        let created = store
            .add_user(new_user("ada@example.com", "+15551230001", "hunter2"))
            .await
            .unwrap();

        let use_case = GetProfileUseCase::new(store);
        let record = use_case.execute(created.id).await.unwrap();
        assert_eq!(record.id, created.id);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let use_case = GetProfileUseCase::new(InMemoryUserStore::default());
        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(GetProfileError::UserStoreError(UserStoreError::UserNotFound))
        ));
    }
}
