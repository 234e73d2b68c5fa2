use sea_orm::entity::prelude::*;

use crate::modules::profile::application::domain::entities::UserDetail;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub welcome_title: String,

    #[sea_orm(column_type = "Text")]
    pub welcome_note: String,

    #[sea_orm(column_type = "Text")]
    pub welcome_description: String,

    #[sea_orm(column_type = "Text")]
    pub user_image: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub cv_file: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserDetail {
    fn from(model: Model) -> Self {
        UserDetail {
            id: model.id,
            welcome_title: model.welcome_title,
            welcome_note: model.welcome_note,
            welcome_description: model.welcome_description,
            user_image: model.user_image,
            cv_file: model.cv_file,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
