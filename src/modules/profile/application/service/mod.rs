mod create_user_detail_service;
mod get_about_paragraphs_service;
mod get_social_links_service;
mod get_user_detail_service;
mod update_user_detail_service;

#[cfg(test)]
mod mocks;

pub use create_user_detail_service::CreateUserDetailService;
pub use get_about_paragraphs_service::GetAboutParagraphsService;
pub use get_social_links_service::GetSocialLinksService;
pub use get_user_detail_service::GetUserDetailService;
pub use update_user_detail_service::UpdateUserDetailService;
