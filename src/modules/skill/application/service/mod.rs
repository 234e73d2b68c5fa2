mod create_skill_service;
mod delete_skill_service;
mod get_skill_service;
mod get_skills_service;
mod update_skill_service;

#[cfg(test)]
mod mocks;

pub use create_skill_service::CreateSkillService;
pub use delete_skill_service::DeleteSkillService;
pub use get_skill_service::GetSkillService;
pub use get_skills_service::GetSkillsService;
pub use update_skill_service::UpdateSkillService;
