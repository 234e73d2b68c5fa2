//! Shared sample records for handler, service and adapter tests.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    ExperienceCommand, ExperienceInput,
};
use crate::modules::profile::application::domain::entities::{
    AboutParagraph, SocialLink, UserDetail,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UserDetailCommand, UserDetailInput,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectCommand, ProjectInput,
};
use crate::modules::resource::adapter::outgoing::sea_orm_entity::resources;
use crate::modules::resource::application::domain::entities::{Resource, ResourceType};
use crate::modules::resource::application::ports::incoming::use_cases::{
    ResourceCommand, ResourceInput,
};
use crate::modules::resource_category::adapter::outgoing::sea_orm_entity::resource_categories;
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    ResourceCategoryCommand, ResourceCategoryInput,
};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill::application::domain::entities::{Skill, SkillCategorySummary};
use crate::modules::skill::application::ports::incoming::use_cases::{SkillCommand, SkillInput};
use crate::modules::skill_category::adapter::outgoing::sea_orm_entity::skill_categories;
use crate::modules::skill_category::application::domain::entities::{
    CategorySkill, SkillCategory,
};
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    SkillCategoryCommand, SkillCategoryInput,
};

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
}

/// "backend" -> "Backend"
fn title_case(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Projects
// ============================================================================

pub fn sample_project() -> Project {
    Project {
        id: Uuid::new_v4(),
        title: "Portfolio CMS".to_string(),
        slug: "portfolio-cms".to_string(),
        description: "A headless CMS for my portfolio".to_string(),
        content: "Built with actix-web and sea-orm.".to_string(),
        cover_image: "/img/cms.png".to_string(),
        github_url: Some("https://github.com/eli/portfolio-cms".to_string()),
        live_url: None,
        category: "Web".to_string(),
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        published_at: timestamp(),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn project_command(title: &str) -> ProjectCommand {
    ProjectCommand::new(ProjectInput {
        title: title.to_string(),
        description: "A headless CMS for my portfolio".to_string(),
        content: "Built with actix-web and sea-orm.".to_string(),
        cover_image: "/img/cms.png".to_string(),
        github_url: None,
        live_url: None,
        category: "Web".to_string(),
        technologies: vec!["Rust".to_string()],
        published_at: "2024-05-01".to_string(),
    })
    .unwrap()
}

// ============================================================================
// Experiences
// ============================================================================

pub fn sample_experience() -> Experience {
    Experience {
        id: Uuid::new_v4(),
        title: "Backend Engineer".to_string(),
        slug: "backend-engineer-acme-corp".to_string(),
        company: "Acme Corp".to_string(),
        description: "Owned the billing services".to_string(),
        start_date: Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap(),
        end_date: None,
        technologies: vec!["Rust".to_string(), "Kafka".to_string()],
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn experience_command(title: &str, company: &str) -> ExperienceCommand {
    ExperienceCommand::new(ExperienceInput {
        title: title.to_string(),
        company: company.to_string(),
        description: "Owned the billing services".to_string(),
        start_date: "2021-03-01".to_string(),
        end_date: None,
        technologies: vec!["Rust".to_string()],
    })
    .unwrap()
}

// ============================================================================
// Resource categories
// ============================================================================

pub fn sample_resource_category() -> ResourceCategory {
    ResourceCategory {
        id: Uuid::new_v4(),
        name: "Backend".to_string(),
        slug: "backend".to_string(),
        description: Some("Servers, databases and APIs".to_string()),
        icon: None,
        color: Some("#2563eb".to_string()),
        order: 0,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn resource_category_command(name: &str) -> ResourceCategoryCommand {
    ResourceCategoryCommand::new(ResourceCategoryInput {
        name: name.to_string(),
        ..Default::default()
    })
    .unwrap()
}

pub fn resource_category_model(slug: &str) -> resource_categories::Model {
    let now = timestamp().fixed_offset();

    resource_categories::Model {
        id: Uuid::new_v4(),
        name: title_case(slug),
        slug: slug.to_string(),
        description: None,
        icon: None,
        color: None,
        sort_order: 0,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Resources
// ============================================================================

pub fn sample_resource() -> Resource {
    let category = sample_resource_category();

    Resource {
        id: Uuid::new_v4(),
        title: "Rust Book".to_string(),
        slug: "rust-book".to_string(),
        description: "The official Rust book".to_string(),
        content: "Chapters on ownership and traits.".to_string(),
        cover_image: "/img/rust-book.png".to_string(),
        link: Some("https://doc.rust-lang.org/book/".to_string()),
        kind: ResourceType::Article,
        category_id: category.id,
        category: Some(category),
        tags: vec!["rust".to_string(), "book".to_string()],
        author: "Steve Klabnik".to_string(),
        published_at: timestamp(),
        read_time_minutes: Some(12),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn resource_command(title: &str, category_id: Uuid) -> ResourceCommand {
    ResourceCommand::new(ResourceInput {
        title: title.to_string(),
        description: "Notes worth keeping".to_string(),
        content: "Body".to_string(),
        cover_image: "/img/cover.png".to_string(),
        link: None,
        kind: "Article".to_string(),
        category_id,
        tags: vec!["rust".to_string()],
        author: "Eli".to_string(),
        published_at: "2024-05-01".to_string(),
        read_time_minutes: Some(12),
    })
    .unwrap()
}

pub fn resource_model(slug: &str, category_id: Uuid) -> resources::Model {
    let now = timestamp().fixed_offset();

    resources::Model {
        id: Uuid::new_v4(),
        title: title_case(&slug.replace('-', " ")),
        slug: slug.to_string(),
        description: "desc".to_string(),
        content: "content".to_string(),
        cover_image: "/img/cover.png".to_string(),
        link: None,
        kind: "Article".to_string(),
        category_id,
        tags: serde_json::json!(["rust", "book"]),
        author: "Eli".to_string(),
        published_at: now,
        read_time_minutes: Some(12),
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Skill categories
// ============================================================================

pub fn sample_skill_category() -> SkillCategory {
    SkillCategory {
        id: Uuid::new_v4(),
        name: "Backend".to_string(),
        slug: "backend".to_string(),
        description: None,
        icon: Some("server".to_string()),
        color: None,
        order: 0,
        skills: vec![CategorySkill {
            id: Uuid::new_v4(),
            name: "Rust".to_string(),
            slug: "rust".to_string(),
            proficiency: 90,
            order: 0,
        }],
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn skill_category_command(name: &str) -> SkillCategoryCommand {
    SkillCategoryCommand::new(SkillCategoryInput {
        name: name.to_string(),
        ..Default::default()
    })
    .unwrap()
}

pub fn skill_category_model(slug: &str) -> skill_categories::Model {
    let now = timestamp().fixed_offset();

    skill_categories::Model {
        id: Uuid::new_v4(),
        name: title_case(slug),
        slug: slug.to_string(),
        description: None,
        icon: None,
        color: None,
        sort_order: 0,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Skills
// ============================================================================

pub fn sample_skill() -> Skill {
    let category = SkillCategorySummary {
        id: Uuid::new_v4(),
        name: "Backend".to_string(),
        slug: "backend".to_string(),
        description: None,
        icon: Some("server".to_string()),
        color: None,
        order: 0,
    };

    Skill {
        id: Uuid::new_v4(),
        name: "Rust".to_string(),
        slug: "rust".to_string(),
        proficiency: 90,
        category_id: category.id,
        order: 0,
        category: Some(category),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn skill_command(name: &str, category_id: Uuid, proficiency: i32) -> SkillCommand {
    SkillCommand::new(SkillInput {
        name: name.to_string(),
        category_id,
        proficiency,
        order: None,
    })
    .unwrap()
}

pub fn skill_model(slug: &str, category_id: Uuid) -> skills::Model {
    let now = timestamp().fixed_offset();

    skills::Model {
        id: Uuid::new_v4(),
        name: title_case(slug),
        slug: slug.to_string(),
        proficiency: 90,
        category_id,
        sort_order: 0,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Profile
// ============================================================================

pub fn sample_user_detail() -> UserDetail {
    UserDetail {
        id: Uuid::new_v4(),
        welcome_title: "Hi, I'm Eli".to_string(),
        welcome_note: "Welcome to my corner of the web".to_string(),
        welcome_description: "I build backends in Rust".to_string(),
        user_image: "/img/me.png".to_string(),
        cv_file: Some("/files/cv.pdf".to_string()),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn user_detail_command(welcome_title: &str) -> UserDetailCommand {
    UserDetailCommand::new(UserDetailInput {
        welcome_title: welcome_title.to_string(),
        welcome_note: "Welcome".to_string(),
        welcome_description: "I build backends in Rust".to_string(),
        user_image: "/img/me.png".to_string(),
        cv_file: None,
    })
    .unwrap()
}

pub fn about_paragraph(order: i32) -> AboutParagraph {
    AboutParagraph {
        id: Uuid::new_v4(),
        paragraph: format!("Paragraph {}", order + 1),
        order,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn social_link(name: &str, order: i32) -> SocialLink {
    SocialLink {
        id: Uuid::new_v4(),
        name: name.to_string(),
        link: format!("https://{}.com/eli", name.to_lowercase()),
        icon: name.to_lowercase(),
        order,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}
