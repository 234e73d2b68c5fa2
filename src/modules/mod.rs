pub mod auth;
pub mod experience;
pub mod profile;
pub mod project;
pub mod resource;
pub mod resource_category;
pub mod skill;
pub mod skill_category;
