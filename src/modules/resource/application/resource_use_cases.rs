use std::sync::Arc;

use crate::modules::resource::application::ports::incoming::use_cases::{
    CreateResourceUseCase, DeleteResourceUseCase, GetResourceUseCase, GetResourcesUseCase,
    UpdateResourceUseCase,
};

#[derive(Clone)]
pub struct ResourceUseCases {
    pub create: Arc<dyn CreateResourceUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetResourcesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetResourceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateResourceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteResourceUseCase + Send + Sync>,
}
