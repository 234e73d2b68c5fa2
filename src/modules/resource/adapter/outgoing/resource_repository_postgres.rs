use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resource::adapter::outgoing::category_lookup::load_categories;
use crate::modules::resource::adapter::outgoing::sea_orm_entity::resources::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::resource::application::domain::entities::Resource;
use crate::modules::resource::application::ports::outgoing::{
    ResourceData, ResourceRepository, ResourceRepositoryError,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

#[derive(Clone)]
pub struct ResourceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResourceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn with_category(
        &self,
        model: resources::Model,
    ) -> Result<Resource, ResourceRepositoryError> {
        let mut categories = load_categories(&self.db, [model.category_id])
            .await
            .map_err(|e| ResourceRepositoryError::DatabaseError(e.to_string()))?;

        let category = categories.remove(&model.category_id);
        model
            .into_resource(category)
            .map_err(|e| ResourceRepositoryError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl ResourceRepository for ResourceRepositoryPostgres {
    async fn create_resource(&self, data: ResourceData) -> Result<Resource, ResourceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            content: Set(data.content),
            cover_image: Set(data.cover_image),
            link: Set(data.link),
            kind: Set(data.kind.as_str().to_string()),
            category_id: Set(data.category_id),
            tags: Set(to_json(&data.tags)?),
            author: Set(data.author),
            published_at: Set(data.published_at.fixed_offset()),
            read_time_minutes: Set(data.read_time_minutes),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = model.insert(&*self.db).await.map_err(map_write_err)?;
        self.with_category(saved).await
    }

    async fn update_resource(
        &self,
        slug: &str,
        data: ResourceData,
    ) -> Result<Resource, ResourceRepositoryError> {
        let model = ActiveModel {
            title: Set(data.title),
            slug: Set(data.slug.trim().to_lowercase()),
            description: Set(data.description),
            content: Set(data.content),
            cover_image: Set(data.cover_image),
            link: Set(data.link),
            kind: Set(data.kind.as_str().to_string()),
            category_id: Set(data.category_id),
            tags: Set(to_json(&data.tags)?),
            author: Set(data.author),
            published_at: Set(data.published_at.fixed_offset()),
            read_time_minutes: Set(data.read_time_minutes),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?
            .into_iter()
            .next()
            .ok_or(ResourceRepositoryError::NotFound)?;

        self.with_category(updated).await
    }

    async fn delete_resource(&self, slug: &str) -> Result<(), ResourceRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(|e| ResourceRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ResourceRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ResourceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ResourceRepositoryError::SerializationError(e.to_string()))
}

fn map_write_err(e: DbErr) -> ResourceRepositoryError {
    if is_unique_violation(&e) {
        ResourceRepositoryError::SlugAlreadyExists
    } else if is_foreign_key_violation(&e) {
        ResourceRepositoryError::CategoryNotFound
    } else {
        ResourceRepositoryError::DatabaseError(e.to_string())
    }
}
