use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    AboutParagraph, SocialLink, UserDetail,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// The oldest stored profile, if any.
    async fn find_user_detail(&self) -> Result<Option<UserDetail>, ProfileQueryError>;

    async fn list_about_paragraphs(&self) -> Result<Vec<AboutParagraph>, ProfileQueryError>;

    async fn list_social_links(&self) -> Result<Vec<SocialLink>, ProfileQueryError>;
}
