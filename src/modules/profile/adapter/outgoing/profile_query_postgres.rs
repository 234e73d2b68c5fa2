use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    about_paragraphs, social_links, user_details,
};
use crate::modules::profile::application::domain::entities::{
    AboutParagraph, SocialLink, UserDetail,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_user_detail(&self) -> Result<Option<UserDetail>, ProfileQueryError> {
        let model = user_details::Entity::find()
            .order_by_asc(user_details::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(UserDetail::from))
    }

    async fn list_about_paragraphs(&self) -> Result<Vec<AboutParagraph>, ProfileQueryError> {
        let models = about_paragraphs::Entity::find()
            .order_by_asc(about_paragraphs::Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(AboutParagraph::from).collect())
    }

    async fn list_social_links(&self) -> Result<Vec<SocialLink>, ProfileQueryError> {
        let models = social_links::Entity::find()
            .order_by_asc(social_links::Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(SocialLink::from).collect())
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}
