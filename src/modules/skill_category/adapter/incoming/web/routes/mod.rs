mod create_skill_category;
mod delete_skill_category;
mod get_skill_categories;
mod get_skill_category;
mod skill_category_request;
mod update_skill_category;

pub use create_skill_category::*;
pub use delete_skill_category::*;
pub use get_skill_categories::*;
pub use get_skill_category::*;
pub use skill_category_request::SkillCategoryRequest;
pub use update_skill_category::*;
