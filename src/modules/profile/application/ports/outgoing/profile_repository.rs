use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::UserDetail;

#[derive(Debug, Clone, PartialEq)]
pub struct UserDetailData {
    pub welcome_title: String,
    pub welcome_note: String,
    pub welcome_description: String,
    pub user_image: String,
    pub cv_file: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("User detail not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create_user_detail(
        &self,
        data: UserDetailData,
    ) -> Result<UserDetail, ProfileRepositoryError>;

    async fn update_user_detail(
        &self,
        id: Uuid,
        data: UserDetailData,
    ) -> Result<UserDetail, ProfileRepositoryError>;
}
