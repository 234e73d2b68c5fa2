use sea_orm::entity::prelude::*;

use crate::modules::skill_category::application::domain::entities::{CategorySkill, SkillCategory};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skill_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub icon: Option<String>,

    #[sea_orm(nullable)]
    pub color: Option<String>,

    pub sort_order: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_category(self, skills: Vec<CategorySkill>) -> SkillCategory {
        SkillCategory {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            icon: self.icon,
            color: self.color,
            order: self.sort_order,
            skills,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
