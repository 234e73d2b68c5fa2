mod create_skill;
mod delete_skill;
mod get_skill;
mod get_skills;
mod skill_command;
mod update_skill;

pub use create_skill::{CreateSkillError, CreateSkillUseCase};
pub use delete_skill::{DeleteSkillError, DeleteSkillUseCase};
pub use get_skill::{GetSkillError, GetSkillUseCase};
pub use get_skills::{GetSkillsError, GetSkillsUseCase};
pub use skill_command::{SkillCommand, SkillInput};
pub use update_skill::{UpdateSkillError, UpdateSkillUseCase};
