use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, Column, Entity,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::PublishedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_project).collect()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        let project = Entity::find()
            .filter(Column::Slug.eq(&normalized_slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_project(project)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ProjectQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        let found = Entity::find()
            .filter(Column::Slug.eq(&normalized_slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectQueryError> {
    model
        .into_project()
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
