use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::modules::skill::application::domain::entities::{Skill, SkillCategorySummary};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub slug: String,

    /// smallint with a 0..=100 check constraint
    pub proficiency: i16,

    #[sea_orm(column_type = "Uuid")]
    pub category_id: Uuid,

    pub sort_order: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_skill(self, category: Option<SkillCategorySummary>) -> Skill {
        Skill {
            id: self.id,
            name: self.name,
            slug: self.slug,
            proficiency: self.proficiency,
            category_id: self.category_id,
            order: self.sort_order,
            category,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
