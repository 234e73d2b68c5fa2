mod create_skill_category;
mod delete_skill_category;
mod get_skill_categories;
mod get_skill_category;
mod skill_category_command;
mod update_skill_category;

pub use create_skill_category::{CreateSkillCategoryError, CreateSkillCategoryUseCase};
pub use delete_skill_category::{DeleteSkillCategoryError, DeleteSkillCategoryUseCase};
pub use get_skill_categories::{GetSkillCategoriesError, GetSkillCategoriesUseCase};
pub use get_skill_category::{GetSkillCategoryError, GetSkillCategoryUseCase};
pub use skill_category_command::{SkillCategoryCommand, SkillCategoryInput};
pub use update_skill_category::{UpdateSkillCategoryError, UpdateSkillCategoryUseCase};
