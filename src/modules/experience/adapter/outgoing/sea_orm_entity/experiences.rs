use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub company: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub start_date: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub end_date: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

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
    pub fn into_experience(self) -> Result<Experience, serde_json::Error> {
        Ok(Experience {
            technologies: serde_json::from_value(self.technologies)?,
            id: self.id,
            title: self.title,
            slug: self.slug,
            company: self.company,
            description: self.description,
            start_date: self.start_date.into(),
            end_date: self.end_date.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
