use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill_category::adapter::outgoing::sea_orm_entity::skill_categories::{
    Column, Entity,
};
use crate::modules::skill_category::adapter::outgoing::skill_lookup::load_skills;
use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::outgoing::{
    SkillCategoryQuery, SkillCategoryQueryError,
};

#[derive(Clone)]
pub struct SkillCategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillCategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillCategoryQuery for SkillCategoryQueryPostgres {
    async fn list(&self) -> Result<Vec<SkillCategory>, SkillCategoryQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut skills = load_skills(&self.db, models.iter().map(|m| m.id).collect())
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|model| {
                let own = skills.remove(&model.id).unwrap_or_default();
                model.into_category(own)
            })
            .collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<SkillCategory, SkillCategoryQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillCategoryQueryError::NotFound)?;

        let mut skills = load_skills(&self.db, vec![model.id])
            .await
            .map_err(map_db_err)?;

        let own = skills.remove(&model.id).unwrap_or_default();
        Ok(model.into_category(own))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, SkillCategoryQueryError> {
        let found = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn has_skills(&self, category_id: Uuid) -> Result<bool, SkillCategoryQueryError> {
        let found = skills::Entity::find()
            .filter(skills::Column::CategoryId.eq(category_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

fn map_db_err(e: DbErr) -> SkillCategoryQueryError {
    SkillCategoryQueryError::DatabaseError(e.to_string())
}
