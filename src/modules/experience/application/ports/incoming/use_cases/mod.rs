mod backfill_experience_slugs;
mod create_experience;
mod delete_experience;
mod experience_command;
mod get_experience;
mod get_experiences;
mod update_experience;

pub use backfill_experience_slugs::{
    BackfillExperienceSlugsError, BackfillExperienceSlugsUseCase,
};
pub use create_experience::{CreateExperienceError, CreateExperienceUseCase};
pub use delete_experience::{DeleteExperienceError, DeleteExperienceUseCase};
pub use experience_command::{ExperienceCommand, ExperienceInput};
pub use get_experience::{GetExperienceError, GetExperienceUseCase};
pub use get_experiences::{GetExperiencesError, GetExperiencesUseCase};
pub use update_experience::{UpdateExperienceError, UpdateExperienceUseCase};
