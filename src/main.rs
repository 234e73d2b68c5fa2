pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::StaticApiKeyVerifier;
use crate::auth::application::ports::outgoing::ApiKeyVerifier;
use crate::modules::experience::adapter::outgoing::{
    ExperienceQueryPostgres, ExperienceRepositoryPostgres,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::BackfillExperienceSlugsUseCase;
use crate::modules::experience::application::services::{
    BackfillExperienceSlugsService, CreateExperienceService, DeleteExperienceService,
    GetExperienceService, GetExperiencesService, UpdateExperienceService,
};
use crate::modules::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::{
    CreateUserDetailService, GetAboutParagraphsService, GetSocialLinksService,
    GetUserDetailService, UpdateUserDetailService,
};
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectService, GetProjectsService,
    UpdateProjectService,
};
use crate::modules::resource::adapter::outgoing::{
    ResourceQueryPostgres, ResourceRepositoryPostgres,
};
use crate::modules::resource::application::resource_use_cases::ResourceUseCases;
use crate::modules::resource::application::service::{
    CreateResourceService, DeleteResourceService, GetResourceService, GetResourcesService,
    UpdateResourceService,
};
use crate::modules::resource_category::adapter::outgoing::{
    ResourceCategoryQueryPostgres, ResourceCategoryRepositoryPostgres,
};
use crate::modules::resource_category::application::resource_category_use_cases::ResourceCategoryUseCases;
use crate::modules::resource_category::application::service::{
    CreateResourceCategoryService, DeleteResourceCategoryService, GetResourceCategoriesService,
    GetResourceCategoryService, UpdateResourceCategoryService,
};
use crate::modules::skill::adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres};
use crate::modules::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSkillService, GetSkillsService, UpdateSkillService,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::skill_category::adapter::outgoing::{
    SkillCategoryQueryPostgres, SkillCategoryRepositoryPostgres,
};
use crate::modules::skill_category::application::service::{
    CreateSkillCategoryService, DeleteSkillCategoryService, GetSkillCategoriesService,
    GetSkillCategoryService, UpdateSkillCategoryService,
};
use crate::modules::skill_category::application::skill_category_use_cases::SkillCategoryUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

const BACKFILL_COMMAND: &str = "backfill-experience-slugs";

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub experience: ExperienceUseCases,
    pub resource: ResourceUseCases,
    pub resource_category: ResourceCategoryUseCases,
    pub skill: SkillUseCases,
    pub skill_category: SkillCategoryUseCases,
    pub profile: ProfileUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(env = %config.rust_env, "Starting application...");

    let db = Arc::new(connect(&config).await?);

    if config.run_migrations {
        Migrator::up(db.as_ref(), None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    if std::env::args().nth(1).as_deref() == Some(BACKFILL_COMMAND) {
        return backfill_experience_slugs(db).await;
    }

    let state = build_state(&db);
    let verifier: Arc<dyn ApiKeyVerifier + Send + Sync> =
        Arc::new(StaticApiKeyVerifier::new(&config.admin_api_key));
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&verifier)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn connect(config: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .context("Failed to connect to database")
}

#[cfg(not(tarpaulin_include))]
async fn backfill_experience_slugs(db: Arc<DatabaseConnection>) -> anyhow::Result<()> {
    let service = BackfillExperienceSlugsService::new(
        ExperienceQueryPostgres::new(Arc::clone(&db)),
        ExperienceRepositoryPostgres::new(db),
    );

    service.execute().await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>) -> AppState {
    let project_query = ProjectQueryPostgres::new(Arc::clone(db));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(db));

    let experience_query = ExperienceQueryPostgres::new(Arc::clone(db));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(db));

    let resource_query = ResourceQueryPostgres::new(Arc::clone(db));
    let resource_repo = ResourceRepositoryPostgres::new(Arc::clone(db));

    let resource_category_query = ResourceCategoryQueryPostgres::new(Arc::clone(db));
    let resource_category_repo = ResourceCategoryRepositoryPostgres::new(Arc::clone(db));

    let skill_query = SkillQueryPostgres::new(Arc::clone(db));
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(db));

    let skill_category_query = SkillCategoryQueryPostgres::new(Arc::clone(db));
    let skill_category_repo = SkillCategoryRepositoryPostgres::new(Arc::clone(db));

    let profile_query = ProfileQueryPostgres::new(Arc::clone(db));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(db));

    AppState {
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(
                project_query.clone(),
                project_repo.clone(),
            )),
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetProjectService::new(project_query.clone())),
            update: Arc::new(UpdateProjectService::new(project_query, project_repo.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo)),
        },
        experience: ExperienceUseCases {
            create: Arc::new(CreateExperienceService::new(
                experience_query.clone(),
                experience_repo.clone(),
            )),
            get_list: Arc::new(GetExperiencesService::new(experience_query.clone())),
            get_single: Arc::new(GetExperienceService::new(experience_query.clone())),
            update: Arc::new(UpdateExperienceService::new(
                experience_query,
                experience_repo.clone(),
            )),
            delete: Arc::new(DeleteExperienceService::new(experience_repo)),
        },
        resource: ResourceUseCases {
            create: Arc::new(CreateResourceService::new(
                resource_query.clone(),
                resource_repo.clone(),
            )),
            get_list: Arc::new(GetResourcesService::new(resource_query.clone())),
            get_single: Arc::new(GetResourceService::new(resource_query.clone())),
            update: Arc::new(UpdateResourceService::new(resource_query, resource_repo.clone())),
            delete: Arc::new(DeleteResourceService::new(resource_repo)),
        },
        resource_category: ResourceCategoryUseCases {
            create: Arc::new(CreateResourceCategoryService::new(
                resource_category_query.clone(),
                resource_category_repo.clone(),
            )),
            get_list: Arc::new(GetResourceCategoriesService::new(
                resource_category_query.clone(),
            )),
            get_single: Arc::new(GetResourceCategoryService::new(
                resource_category_query.clone(),
            )),
            update: Arc::new(UpdateResourceCategoryService::new(
                resource_category_query.clone(),
                resource_category_repo.clone(),
            )),
            delete: Arc::new(DeleteResourceCategoryService::new(
                resource_category_query,
                resource_category_repo,
            )),
        },
        skill: SkillUseCases {
            create: Arc::new(CreateSkillService::new(skill_query.clone(), skill_repo.clone())),
            get_list: Arc::new(GetSkillsService::new(skill_query.clone())),
            get_single: Arc::new(GetSkillService::new(skill_query.clone())),
            update: Arc::new(UpdateSkillService::new(skill_query, skill_repo.clone())),
            delete: Arc::new(DeleteSkillService::new(skill_repo)),
        },
        skill_category: SkillCategoryUseCases {
            create: Arc::new(CreateSkillCategoryService::new(
                skill_category_query.clone(),
                skill_category_repo.clone(),
            )),
            get_list: Arc::new(GetSkillCategoriesService::new(skill_category_query.clone())),
            get_single: Arc::new(GetSkillCategoryService::new(skill_category_query.clone())),
            update: Arc::new(UpdateSkillCategoryService::new(
                skill_category_query.clone(),
                skill_category_repo.clone(),
            )),
            delete: Arc::new(DeleteSkillCategoryService::new(
                skill_category_query,
                skill_category_repo,
            )),
        },
        profile: ProfileUseCases {
            get_user_detail: Arc::new(GetUserDetailService::new(profile_query.clone())),
            create_user_detail: Arc::new(CreateUserDetailService::new(
                profile_query.clone(),
                profile_repo.clone(),
            )),
            update_user_detail: Arc::new(UpdateUserDetailService::new(
                profile_query.clone(),
                profile_repo,
            )),
            get_about_paragraphs: Arc::new(GetAboutParagraphsService::new(profile_query.clone())),
            get_social_links: Arc::new(GetSocialLinksService::new(profile_query)),
        },
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        experience::adapter::incoming::web::routes as experience,
        profile::adapter::incoming::web::routes as profile,
        project::adapter::incoming::web::routes as project,
        resource::adapter::incoming::web::routes as resource,
        resource_category::adapter::incoming::web::routes as resource_category,
        skill::adapter::incoming::web::routes as skill,
        skill_category::adapter::incoming::web::routes as skill_category,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(project::get_projects_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::get_project_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
    // Experiences
    cfg.service(experience::get_experiences_handler);
    cfg.service(experience::create_experience_handler);
    cfg.service(experience::get_experience_handler);
    cfg.service(experience::update_experience_handler);
    cfg.service(experience::delete_experience_handler);
    // Resource categories
    cfg.service(resource_category::get_resource_categories_handler);
    cfg.service(resource_category::create_resource_category_handler);
    cfg.service(resource_category::get_resource_category_handler);
    cfg.service(resource_category::update_resource_category_handler);
    cfg.service(resource_category::delete_resource_category_handler);
    // Resources
    cfg.service(resource::get_resources_handler);
    cfg.service(resource::create_resource_handler);
    cfg.service(resource::get_resource_handler);
    cfg.service(resource::update_resource_handler);
    cfg.service(resource::delete_resource_handler);
    // Skill categories
    cfg.service(skill_category::get_skill_categories_handler);
    cfg.service(skill_category::create_skill_category_handler);
    cfg.service(skill_category::get_skill_category_handler);
    cfg.service(skill_category::update_skill_category_handler);
    cfg.service(skill_category::delete_skill_category_handler);
    // Skills
    cfg.service(skill::get_skills_handler);
    cfg.service(skill::create_skill_handler);
    cfg.service(skill::get_skill_handler);
    cfg.service(skill::update_skill_handler);
    cfg.service(skill::delete_skill_handler);
    // Profile
    cfg.service(profile::get_user_detail_handler);
    cfg.service(profile::create_user_detail_handler);
    cfg.service(profile::update_user_detail_handler);
    cfg.service(profile::get_about_paragraphs_handler);
    cfg.service(profile::get_social_links_handler);
}
