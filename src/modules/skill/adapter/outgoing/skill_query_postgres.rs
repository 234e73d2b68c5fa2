use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::category_lookup::load_categories;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{self, Column, Entity};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};
use crate::modules::skill_category::adapter::outgoing::sea_orm_entity::skill_categories;

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn embed_categories(&self, models: Vec<skills::Model>) -> Result<Vec<Skill>, SkillQueryError> {
        let categories = load_categories(&self.db, models.iter().map(|m| m.category_id))
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|model| {
                let category = categories.get(&model.category_id).cloned();
                model.into_skill(category)
            })
            .collect())
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, SkillQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.embed_categories(models).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Skill, SkillQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillQueryError::NotFound)?;

        self.embed_categories(vec![model])
            .await?
            .pop()
            .ok_or(SkillQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, SkillQueryError> {
        let found = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, SkillQueryError> {
        let found = skill_categories::Entity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
