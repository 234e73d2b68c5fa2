use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceData, ExperienceRepository, ExperienceRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create_experience(
        &self,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            company: Set(data.company),
            description: Set(data.description),
            start_date: Set(data.start_date.fixed_offset()),
            end_date: Set(data.end_date.map(|d| d.fixed_offset())),
            technologies: Set(to_json(&data.technologies)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = model.insert(&*self.db).await.map_err(map_write_err)?;
        model_to_experience(saved)
    }

    async fn update_experience(
        &self,
        slug: &str,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let model = ActiveModel {
            title: Set(data.title),
            slug: Set(data.slug.trim().to_lowercase()),
            company: Set(data.company),
            description: Set(data.description),
            start_date: Set(data.start_date.fixed_offset()),
            end_date: Set(data.end_date.map(|d| d.fixed_offset())),
            technologies: Set(to_json(&data.technologies)?),
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
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_experience(updated)
    }

    async fn delete_experience(&self, slug: &str) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(|e| ExperienceRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn update_slug(&self, id: Uuid, slug: &str) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                slug: Set(slug.to_string()),
                ..Default::default()
            })
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_experience(
    model: experiences::Model,
) -> Result<Experience, ExperienceRepositoryError> {
    model
        .into_experience()
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_write_err(e: DbErr) -> ExperienceRepositoryError {
    if is_unique_violation(&e) {
        ExperienceRepositoryError::SlugAlreadyExists
    } else {
        ExperienceRepositoryError::DatabaseError(e.to_string())
    }
}
