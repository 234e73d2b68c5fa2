mod create_skill_category_service;
mod delete_skill_category_service;
mod get_skill_categories_service;
mod get_skill_category_service;
mod update_skill_category_service;

#[cfg(test)]
mod mocks;

pub use create_skill_category_service::CreateSkillCategoryService;
pub use delete_skill_category_service::DeleteSkillCategoryService;
pub use get_skill_categories_service::GetSkillCategoriesService;
pub use get_skill_category_service::GetSkillCategoryService;
pub use update_skill_category_service::UpdateSkillCategoryService;
