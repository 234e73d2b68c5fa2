use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill_category::adapter::outgoing::sea_orm_entity::skill_categories::{
    ActiveModel, Column, Entity,
};
use crate::modules::skill_category::adapter::outgoing::skill_lookup::load_skills;
use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::outgoing::{
    SkillCategoryData, SkillCategoryRepository, SkillCategoryRepositoryError,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

#[derive(Clone)]
pub struct SkillCategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillCategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillCategoryRepository for SkillCategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError> {
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
        Ok(saved.into_category(Vec::new()))
    }

    async fn update_category(
        &self,
        slug: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, SkillCategoryRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            icon: Set(data.icon),
            color: Set(data.color),
            sort_order: Set(data.order.unwrap_or(0)),
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
            .ok_or(SkillCategoryRepositoryError::NotFound)?;

        let mut skills = load_skills(&self.db, vec![updated.id])
            .await
            .map_err(|e| SkillCategoryRepositoryError::DatabaseError(e.to_string()))?;

        let own = skills.remove(&updated.id).unwrap_or_default();
        Ok(updated.into_category(own))
    }

    async fn delete_category(&self, slug: &str) -> Result<(), SkillCategoryRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(SkillCategoryRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_write_err(e: DbErr) -> SkillCategoryRepositoryError {
    if is_unique_violation(&e) {
        SkillCategoryRepositoryError::SlugAlreadyExists
    } else if is_foreign_key_violation(&e) {
        SkillCategoryRepositoryError::InUse
    } else {
        SkillCategoryRepositoryError::DatabaseError(e.to_string())
    }
}
