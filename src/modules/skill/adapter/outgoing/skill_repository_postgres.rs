use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::category_lookup::load_categories;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::{
    SkillData, SkillRepository, SkillRepositoryError,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn with_category(&self, model: skills::Model) -> Result<Skill, SkillRepositoryError> {
        let mut categories = load_categories(&self.db, [model.category_id])
            .await
            .map_err(|e| SkillRepositoryError::DatabaseError(e.to_string()))?;

        let category = categories.remove(&model.category_id);
        Ok(model.into_skill(category))
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create_skill(&self, data: SkillData) -> Result<Skill, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            proficiency: Set(data.proficiency),
            category_id: Set(data.category_id),
            sort_order: Set(data.order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = model.insert(&*self.db).await.map_err(map_write_err)?;
        self.with_category(saved).await
    }

    async fn update_skill(&self, slug: &str, data: SkillData) -> Result<Skill, SkillRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            slug: Set(data.slug.trim().to_lowercase()),
            proficiency: Set(data.proficiency),
            category_id: Set(data.category_id),
            sort_order: data.order.map(Set).unwrap_or(NotSet),
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
            .ok_or(SkillRepositoryError::NotFound)?;

        self.with_category(updated).await
    }

    async fn delete_skill(&self, slug: &str) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(|e| SkillRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_write_err(e: DbErr) -> SkillRepositoryError {
    if is_unique_violation(&e) {
        SkillRepositoryError::SlugAlreadyExists
    } else if is_foreign_key_violation(&e) {
        SkillRepositoryError::CategoryNotFound
    } else {
        SkillRepositoryError::DatabaseError(e.to_string())
    }
}
