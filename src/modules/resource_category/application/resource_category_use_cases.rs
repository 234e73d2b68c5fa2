use std::sync::Arc;

use crate::modules::resource_category::application::ports::incoming::use_cases::{
    CreateResourceCategoryUseCase, DeleteResourceCategoryUseCase, GetResourceCategoriesUseCase,
    GetResourceCategoryUseCase, UpdateResourceCategoryUseCase,
};

#[derive(Clone)]
pub struct ResourceCategoryUseCases {
    pub create: Arc<dyn CreateResourceCategoryUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetResourceCategoriesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetResourceCategoryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateResourceCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteResourceCategoryUseCase + Send + Sync>,
}
