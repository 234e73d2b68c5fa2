use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::API_KEY_HEADER;
use crate::modules::experience::adapter::incoming::web::routes::{self as experience_routes, ExperienceRequest};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::profile::adapter::incoming::web::routes::{self as profile_routes, UserDetailRequest};
use crate::modules::profile::application::domain::entities::{
    AboutParagraph, SocialLink, UserDetail,
};
use crate::modules::project::adapter::incoming::web::routes::{self as project_routes, ProjectRequest};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::resource::adapter::incoming::web::routes::{self as resource_routes, ResourceRequest};
use crate::modules::resource::application::domain::entities::{Resource, ResourceType};
use crate::modules::resource_category::adapter::incoming::web::routes::{
    self as resource_category_routes, ResourceCategoryRequest,
};
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::skill::adapter::incoming::web::routes::{self as skill_routes, SkillRequest};
use crate::modules::skill::application::domain::entities::{Skill, SkillCategorySummary};
use crate::modules::skill_category::adapter::incoming::web::routes::{
    self as skill_category_routes, SkillCategoryRequest,
};
use crate::modules::skill_category::application::domain::entities::{
    CategorySkill, SkillCategory,
};
use crate::shared::api::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content API behind the portfolio site and its admin panel"
    ),
    paths(
        // Projects
        project_routes::get_projects_handler,
        project_routes::get_project_handler,
        project_routes::create_project_handler,
        project_routes::update_project_handler,
        project_routes::delete_project_handler,

        // Experiences
        experience_routes::get_experiences_handler,
        experience_routes::get_experience_handler,
        experience_routes::create_experience_handler,
        experience_routes::update_experience_handler,
        experience_routes::delete_experience_handler,

        // Resource categories
        resource_category_routes::get_resource_categories_handler,
        resource_category_routes::get_resource_category_handler,
        resource_category_routes::create_resource_category_handler,
        resource_category_routes::update_resource_category_handler,
        resource_category_routes::delete_resource_category_handler,

        // Resources
        resource_routes::get_resources_handler,
        resource_routes::get_resource_handler,
        resource_routes::create_resource_handler,
        resource_routes::update_resource_handler,
        resource_routes::delete_resource_handler,

        // Skill categories
        skill_category_routes::get_skill_categories_handler,
        skill_category_routes::get_skill_category_handler,
        skill_category_routes::create_skill_category_handler,
        skill_category_routes::update_skill_category_handler,
        skill_category_routes::delete_skill_category_handler,

        // Skills
        skill_routes::get_skills_handler,
        skill_routes::get_skill_handler,
        skill_routes::create_skill_handler,
        skill_routes::update_skill_handler,
        skill_routes::delete_skill_handler,

        // Profile
        profile_routes::get_user_detail_handler,
        profile_routes::create_user_detail_handler,
        profile_routes::update_user_detail_handler,
        profile_routes::get_about_paragraphs_handler,
        profile_routes::get_social_links_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            Project,
            ProjectRequest,
            Experience,
            ExperienceRequest,
            ResourceCategory,
            ResourceCategoryRequest,
            Resource,
            ResourceType,
            ResourceRequest,
            SkillCategory,
            CategorySkill,
            SkillCategoryRequest,
            Skill,
            SkillCategorySummary,
            SkillRequest,
            UserDetail,
            UserDetailRequest,
            AboutParagraph,
            SocialLink,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "projects", description = "Portfolio projects"),
        (name = "experiences", description = "Work history"),
        (name = "resource-categories", description = "Groups of learning resources (admin only)"),
        (name = "resources", description = "Learning resources (admin only)"),
        (name = "skill-categories", description = "Skill groups with their skills"),
        (name = "skills", description = "Skills and proficiency"),
        (name = "profile", description = "Landing page profile, about text and social links"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "ApiKeyAuth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    API_KEY_HEADER,
                    "Admin API key",
                ))),
            )
        }
    }
}
