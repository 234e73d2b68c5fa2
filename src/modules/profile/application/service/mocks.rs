use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{
    AboutParagraph, SocialLink, UserDetail,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError, UserDetailData,
};
use crate::tests::support::fixtures::sample_user_detail;

#[derive(Clone, Default)]
pub struct MockProfileQuery {
    pub user_detail: Option<UserDetail>,
    pub paragraphs: Vec<AboutParagraph>,
    pub links: Vec<SocialLink>,
    pub failure: Option<ProfileQueryError>,
}

impl MockProfileQuery {
    pub fn with_user_detail(detail: UserDetail) -> Self {
        Self {
            user_detail: Some(detail),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ProfileQueryError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileQuery for MockProfileQuery {
    async fn find_user_detail(&self) -> Result<Option<UserDetail>, ProfileQueryError> {
        self.check()?;
        Ok(self.user_detail.clone())
    }

    async fn list_about_paragraphs(&self) -> Result<Vec<AboutParagraph>, ProfileQueryError> {
        self.check()?;
        Ok(self.paragraphs.clone())
    }

    async fn list_social_links(&self) -> Result<Vec<SocialLink>, ProfileQueryError> {
        self.check()?;
        Ok(self.links.clone())
    }
}

#[derive(Clone, Default)]
pub struct MockProfileRepository {
    pub updated_id: Arc<Mutex<Option<Uuid>>>,
}

impl MockProfileRepository {
    pub fn updated_id(&self) -> Option<Uuid> {
        *self.updated_id.lock().unwrap()
    }
}

fn stored(data: UserDetailData) -> UserDetail {
    let mut detail = sample_user_detail();
    detail.welcome_title = data.welcome_title;
    detail.welcome_note = data.welcome_note;
    detail.welcome_description = data.welcome_description;
    detail.user_image = data.user_image;
    detail.cv_file = data.cv_file;
    detail
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn create_user_detail(
        &self,
        data: UserDetailData,
    ) -> Result<UserDetail, ProfileRepositoryError> {
        Ok(stored(data))
    }

    async fn update_user_detail(
        &self,
        id: Uuid,
        data: UserDetailData,
    ) -> Result<UserDetail, ProfileRepositoryError> {
        *self.updated_id.lock().unwrap() = Some(id);
        let mut detail = stored(data);
        detail.id = id;
        Ok(detail)
    }
}
