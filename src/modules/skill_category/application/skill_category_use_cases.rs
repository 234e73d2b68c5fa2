use std::sync::Arc;

use crate::modules::skill_category::application::ports::incoming::use_cases::{
    CreateSkillCategoryUseCase, DeleteSkillCategoryUseCase, GetSkillCategoriesUseCase,
    GetSkillCategoryUseCase, UpdateSkillCategoryUseCase,
};

#[derive(Clone)]
pub struct SkillCategoryUseCases {
    pub create: Arc<dyn CreateSkillCategoryUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSkillCategoriesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSkillCategoryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillCategoryUseCase + Send + Sync>,
}
