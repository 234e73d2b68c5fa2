mod create_user_detail;
mod get_about_paragraphs;
mod get_social_links;
mod get_user_detail;
mod update_user_detail;
mod user_detail_command;

pub use create_user_detail::{CreateUserDetailError, CreateUserDetailUseCase};
pub use get_about_paragraphs::{GetAboutParagraphsError, GetAboutParagraphsUseCase};
pub use get_social_links::{GetSocialLinksError, GetSocialLinksUseCase};
pub use get_user_detail::{GetUserDetailError, GetUserDetailUseCase};
pub use update_user_detail::{UpdateUserDetailError, UpdateUserDetailUseCase};
pub use user_detail_command::{UserDetailCommand, UserDetailInput};
