mod create_user_detail;
mod get_about_paragraphs;
mod get_social_links;
mod get_user_detail;
mod update_user_detail;
mod user_detail_request;

pub use create_user_detail::*;
pub use get_about_paragraphs::*;
pub use get_social_links::*;
pub use get_user_detail::*;
pub use update_user_detail::*;
pub use user_detail_request::UserDetailRequest;
