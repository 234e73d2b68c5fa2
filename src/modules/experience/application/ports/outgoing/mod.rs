mod experience_query;
mod experience_repository;

pub use experience_query::{ExperienceQuery, ExperienceQueryError};
pub use experience_repository::{
    ExperienceData, ExperienceRepository, ExperienceRepositoryError,
};
