pub mod about_paragraphs;
pub mod social_links;
pub mod user_details;
