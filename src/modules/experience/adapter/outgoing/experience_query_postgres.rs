use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, Column, Entity,
};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_experience).collect()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Experience, ExperienceQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceQueryError::NotFound)?;

        model_to_experience(model)
    }

    async fn find_slug_owner(&self, slug: &str) -> Result<Option<Uuid>, ExperienceQueryError> {
        let found = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|model| model.id))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_experience(model: experiences::Model) -> Result<Experience, ExperienceQueryError> {
    model
        .into_experience()
        .map_err(|e| ExperienceQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
