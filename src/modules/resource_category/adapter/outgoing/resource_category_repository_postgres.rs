use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resource_category::adapter::outgoing::sea_orm_entity::resource_categories::{
    ActiveModel, Column, Entity,
};
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::outgoing::{
    ResourceCategoryData, ResourceCategoryRepository, ResourceCategoryRepositoryError,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

#[derive(Clone)]
pub struct ResourceCategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResourceCategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceCategoryRepository for ResourceCategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: ResourceCategoryData,
    ) -> Result<ResourceCategory, ResourceCategoryRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            icon: Set(data.icon),
            color: Set(data.color),
            sort_order: Set(data.order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = model.insert(&*self.db).await.map_err(map_write_err)?;
        Ok(saved.into())
    }

    async fn update_category(
        &self,
        slug: &str,
        data: ResourceCategoryData,
    ) -> Result<ResourceCategory, ResourceCategoryRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            icon: Set(data.icon),
            color: Set(data.color),
            sort_order: data.order.map(Set).unwrap_or(NotSet),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?
            .into_iter()
            .next()
            .map(ResourceCategory::from)
            .ok_or(ResourceCategoryRepositoryError::NotFound)
    }

    async fn delete_category(&self, slug: &str) -> Result<(), ResourceCategoryRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(ResourceCategoryRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_write_err(e: DbErr) -> ResourceCategoryRepositoryError {
    if is_unique_violation(&e) {
        ResourceCategoryRepositoryError::SlugAlreadyExists
    } else if is_foreign_key_violation(&e) {
        ResourceCategoryRepositoryError::InUse
    } else {
        ResourceCategoryRepositoryError::DatabaseError(e.to_string())
    }
}
