use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::user_details::{
    ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::UserDetail;
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, UserDetailData,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_user_detail(
        &self,
        data: UserDetailData,
    ) -> Result<UserDetail, ProfileRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            welcome_title: Set(data.welcome_title),
            welcome_note: Set(data.welcome_note),
            welcome_description: Set(data.welcome_description),
            user_image: Set(data.user_image),
            cv_file: Set(data.cv_file),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn update_user_detail(
        &self,
        id: Uuid,
        data: UserDetailData,
    ) -> Result<UserDetail, ProfileRepositoryError> {
        let model = ActiveModel {
            welcome_title: Set(data.welcome_title),
            welcome_note: Set(data.welcome_note),
            welcome_description: Set(data.welcome_description),
            user_image: Set(data.user_image),
            cv_file: Set(data.cv_file),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)?;

        Ok(result.into())
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}
