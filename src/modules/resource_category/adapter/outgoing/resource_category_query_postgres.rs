use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resource::adapter::outgoing::sea_orm_entity::resources;
use crate::modules::resource_category::adapter::outgoing::sea_orm_entity::resource_categories::{
    Column, Entity,
};
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::outgoing::{
    ResourceCategoryQuery, ResourceCategoryQueryError,
};

#[derive(Clone)]
pub struct ResourceCategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResourceCategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceCategoryQuery for ResourceCategoryQueryPostgres {
    async fn list(&self) -> Result<Vec<ResourceCategory>, ResourceCategoryQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(ResourceCategory::from).collect())
    }

    async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<ResourceCategory, ResourceCategoryQueryError> {
        Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(ResourceCategory::from)
            .ok_or(ResourceCategoryQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ResourceCategoryQueryError> {
        let found = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn has_resources(&self, category_id: Uuid) -> Result<bool, ResourceCategoryQueryError> {
        let found = resources::Entity::find()
            .filter(resources::Column::CategoryId.eq(category_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

fn map_db_err(e: DbErr) -> ResourceCategoryQueryError {
    ResourceCategoryQueryError::DatabaseError(e.to_string())
}
