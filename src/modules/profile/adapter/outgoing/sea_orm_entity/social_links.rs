use sea_orm::entity::prelude::*;

use crate::modules::profile::application::domain::entities::SocialLink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub link: String,

    pub icon: String,

    pub sort_order: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SocialLink {
    fn from(model: Model) -> Self {
        SocialLink {
            id: model.id,
            name: model.name,
            link: model.link,
            icon: model.icon,
            order: model.sort_order,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
