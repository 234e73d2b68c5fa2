mod create_experience;
mod delete_experience;
mod experience_request;
mod get_experience;
mod get_experiences;
mod update_experience;

pub use create_experience::*;
pub use delete_experience::*;
pub use experience_request::ExperienceRequest;
pub use get_experience::*;
pub use get_experiences::*;
pub use update_experience::*;
