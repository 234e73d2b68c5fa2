mod create_skill;
mod delete_skill;
mod get_skill;
mod get_skills;
mod skill_request;
mod update_skill;

pub use create_skill::*;
pub use delete_skill::*;
pub use get_skill::*;
pub use get_skills::*;
pub use skill_request::SkillRequest;
pub use update_skill::*;
