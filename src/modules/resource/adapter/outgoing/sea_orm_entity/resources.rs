use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::modules::resource::application::domain::entities::{
    Resource, ResourceType, UnknownResourceType,
};
use crate::modules::resource_category::application::domain::entities::ResourceCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text")]
    pub cover_image: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,

    /// `ResourceType` label, e.g. `Case Study`
    pub kind: String,

    #[sea_orm(column_type = "Uuid")]
    pub category_id: Uuid,

    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    pub author: String,

    pub published_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub read_time_minutes: Option<i32>,

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

#[derive(Debug, thiserror::Error)]
pub enum ResourceRowError {
    #[error("invalid tags: {0}")]
    Tags(#[from] serde_json::Error),

    #[error(transparent)]
    Kind(#[from] UnknownResourceType),
}

impl Model {
    pub fn into_resource(
        self,
        category: Option<ResourceCategory>,
    ) -> Result<Resource, ResourceRowError> {
        Ok(Resource {
            tags: serde_json::from_value(self.tags)?,
            kind: self.kind.parse::<ResourceType>()?,
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            content: self.content,
            cover_image: self.cover_image,
            link: self.link,
            category_id: self.category_id,
            category,
            author: self.author,
            published_at: self.published_at.into(),
            read_time_minutes: self.read_time_minutes,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
