use crate::modules::profile::application::ports::outgoing::UserDetailData;
use crate::shared::validation::{self, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct UserDetailInput {
    pub welcome_title: String,
    pub welcome_note: String,
    pub welcome_description: String,
    pub user_image: String,
    pub cv_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserDetailCommand {
    data: UserDetailData,
}

impl UserDetailCommand {
    pub fn new(input: UserDetailInput) -> Result<Self, ValidationError> {
        Ok(Self {
            data: UserDetailData {
                welcome_title: validation::required("welcomeTitle", &input.welcome_title)?,
                welcome_note: validation::required("welcomeNote", &input.welcome_note)?,
                welcome_description: validation::required(
                    "welcomeDescription",
                    &input.welcome_description,
                )?,
                user_image: validation::required("userImage", &input.user_image)?,
                cv_file: validation::optional(input.cv_file),
            },
        })
    }

    pub fn into_data(self) -> UserDetailData {
        self.data
    }
}
