use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, DeleteExperienceError,
    DeleteExperienceUseCase, ExperienceCommand, GetExperienceError, GetExperienceUseCase,
    GetExperiencesError, GetExperiencesUseCase, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::profile::application::domain::entities::{
    AboutParagraph, SocialLink, UserDetail,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateUserDetailError, CreateUserDetailUseCase, GetAboutParagraphsError,
    GetAboutParagraphsUseCase, GetSocialLinksError, GetSocialLinksUseCase, GetUserDetailError,
    GetUserDetailUseCase, UpdateUserDetailError, UpdateUserDetailUseCase, UserDetailCommand,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectError, GetProjectUseCase, GetProjectsError, GetProjectsUseCase, ProjectCommand,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::resource::application::domain::entities::{Resource, ResourceFilter};
use crate::modules::resource::application::ports::incoming::use_cases::{
    CreateResourceError, CreateResourceUseCase, DeleteResourceError, DeleteResourceUseCase,
    GetResourceError, GetResourceUseCase, GetResourcesError, GetResourcesUseCase,
    ResourceCommand, UpdateResourceError, UpdateResourceUseCase,
};
use crate::modules::resource_category::application::domain::entities::ResourceCategory;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    CreateResourceCategoryError, CreateResourceCategoryUseCase, DeleteResourceCategoryError,
    DeleteResourceCategoryUseCase, GetResourceCategoriesError, GetResourceCategoriesUseCase,
    GetResourceCategoryError, GetResourceCategoryUseCase, ResourceCategoryCommand,
    UpdateResourceCategoryError, UpdateResourceCategoryUseCase,
};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase, DeleteSkillError, DeleteSkillUseCase, GetSkillError,
    GetSkillUseCase, GetSkillsError, GetSkillsUseCase, SkillCommand, UpdateSkillError,
    UpdateSkillUseCase,
};
use crate::modules::skill_category::application::domain::entities::SkillCategory;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    CreateSkillCategoryError, CreateSkillCategoryUseCase, DeleteSkillCategoryError,
    DeleteSkillCategoryUseCase, GetSkillCategoriesError, GetSkillCategoriesUseCase,
    GetSkillCategoryError, GetSkillCategoryUseCase, SkillCategoryCommand,
    UpdateSkillCategoryError, UpdateSkillCategoryUseCase,
};

/// Fills every `AppState` slot a handler test does not exercise.
pub struct UnusedUseCase;

// ============================================================================
// Projects
// ============================================================================

#[async_trait]
impl CreateProjectUseCase for UnusedUseCase {
    async fn execute(&self, _command: ProjectCommand) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProjectsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProjectUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<Project, GetProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProjectUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _command: ProjectCommand,
    ) -> Result<Project, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteProjectUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Experiences
// ============================================================================

#[async_trait]
impl CreateExperienceUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _command: ExperienceCommand,
    ) -> Result<Experience, CreateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetExperiencesUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetExperienceUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<Experience, GetExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateExperienceUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _command: ExperienceCommand,
    ) -> Result<Experience, UpdateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteExperienceUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<(), DeleteExperienceError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Resource categories
// ============================================================================

#[async_trait]
impl CreateResourceCategoryUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _command: ResourceCategoryCommand,
    ) -> Result<ResourceCategory, CreateResourceCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetResourceCategoriesUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<ResourceCategory>, GetResourceCategoriesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetResourceCategoryUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<ResourceCategory, GetResourceCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateResourceCategoryUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _command: ResourceCategoryCommand,
    ) -> Result<ResourceCategory, UpdateResourceCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteResourceCategoryUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<(), DeleteResourceCategoryError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Resources
// ============================================================================

#[async_trait]
impl CreateResourceUseCase for UnusedUseCase {
    async fn execute(&self, _command: ResourceCommand) -> Result<Resource, CreateResourceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetResourcesUseCase for UnusedUseCase {
    async fn execute(&self, _filter: ResourceFilter) -> Result<Vec<Resource>, GetResourcesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetResourceUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<Resource, GetResourceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateResourceUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _command: ResourceCommand,
    ) -> Result<Resource, UpdateResourceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteResourceUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<(), DeleteResourceError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Skill categories
// ============================================================================

#[async_trait]
impl CreateSkillCategoryUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _command: SkillCategoryCommand,
    ) -> Result<SkillCategory, CreateSkillCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSkillCategoriesUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<SkillCategory>, GetSkillCategoriesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSkillCategoryUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<SkillCategory, GetSkillCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateSkillCategoryUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _command: SkillCategoryCommand,
    ) -> Result<SkillCategory, UpdateSkillCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteSkillCategoryUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<(), DeleteSkillCategoryError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Skills
// ============================================================================

#[async_trait]
impl CreateSkillUseCase for UnusedUseCase {
    async fn execute(&self, _command: SkillCommand) -> Result<Skill, CreateSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSkillsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSkillUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<Skill, GetSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateSkillUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str, _command: SkillCommand) -> Result<Skill, UpdateSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteSkillUseCase for UnusedUseCase {
    async fn execute(&self, _slug: &str) -> Result<(), DeleteSkillError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Profile
// ============================================================================

#[async_trait]
impl GetUserDetailUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Option<UserDetail>, GetUserDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateUserDetailUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _command: UserDetailCommand,
    ) -> Result<UserDetail, CreateUserDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateUserDetailUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _command: UserDetailCommand,
    ) -> Result<UserDetail, UpdateUserDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetAboutParagraphsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<AboutParagraph>, GetAboutParagraphsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSocialLinksUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<SocialLink>, GetSocialLinksError> {
        unimplemented!("Not used in this test")
    }
}
