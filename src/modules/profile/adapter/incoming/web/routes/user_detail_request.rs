use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::profile::application::ports::incoming::use_cases::UserDetailInput;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailRequest {
    #[schema(example = "Hi, I'm Eli")]
    pub welcome_title: String,
    pub welcome_note: String,
    pub welcome_description: String,
    #[schema(example = "/images/profile.png")]
    pub user_image: String,
    /// Empty string clears the CV link.
    pub cv_file: Option<String>,
}

impl From<UserDetailRequest> for UserDetailInput {
    fn from(req: UserDetailRequest) -> Self {
        UserDetailInput {
            welcome_title: req.welcome_title,
            welcome_note: req.welcome_note,
            welcome_description: req.welcome_description,
            user_image: req.user_image,
            cv_file: req.cv_file,
        }
    }
}
