use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateUserDetailUseCase, GetAboutParagraphsUseCase, GetSocialLinksUseCase,
    GetUserDetailUseCase, UpdateUserDetailUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_user_detail: Arc<dyn GetUserDetailUseCase + Send + Sync>,
    pub create_user_detail: Arc<dyn CreateUserDetailUseCase + Send + Sync>,
    pub update_user_detail: Arc<dyn UpdateUserDetailUseCase + Send + Sync>,
    pub get_about_paragraphs: Arc<dyn GetAboutParagraphsUseCase + Send + Sync>,
    pub get_social_links: Arc<dyn GetSocialLinksUseCase + Send + Sync>,
}
