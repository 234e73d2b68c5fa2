mod backfill_experience_slugs_service;
mod create_experience_service;
mod delete_experience_service;
mod get_experience_service;
mod get_experiences_service;
mod update_experience_service;

#[cfg(test)]
mod mocks;

pub use backfill_experience_slugs_service::BackfillExperienceSlugsService;
pub use create_experience_service::CreateExperienceService;
pub use delete_experience_service::DeleteExperienceService;
pub use get_experience_service::GetExperienceService;
pub use get_experiences_service::GetExperiencesService;
pub use update_experience_service::UpdateExperienceService;
