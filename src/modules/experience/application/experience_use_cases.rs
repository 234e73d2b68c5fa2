use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperienceUseCase,
    GetExperiencesUseCase, UpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}
