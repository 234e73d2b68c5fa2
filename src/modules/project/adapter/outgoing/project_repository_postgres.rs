use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::db::is_unique_violation;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            content: Set(data.content),
            cover_image: Set(data.cover_image),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            category: Set(data.category),
            technologies: Set(to_json(&data.technologies)?),
            published_at: Set(data.published_at.fixed_offset()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_write_err)?;

        model_to_project(result)
    }

    async fn update_project(
        &self,
        slug: &str,
        data: ProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let model = ActiveModel {
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug.trim().to_lowercase()),
            description: Set(data.description),
            content: Set(data.content),
            cover_image: Set(data.cover_image),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            category: Set(data.category),
            technologies: Set(to_json(&data.technologies)?),
            published_at: Set(data.published_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete_project(&self, slug: &str) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    model
        .into_project()
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_write_err(e: DbErr) -> ProjectRepositoryError {
    if is_unique_violation(&e) {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
