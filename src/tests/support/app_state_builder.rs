use actix_web::web;
use std::sync::Arc;

use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperienceUseCase,
    GetExperiencesUseCase, UpdateExperienceUseCase,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateUserDetailUseCase, GetAboutParagraphsUseCase, GetSocialLinksUseCase,
    GetUserDetailUseCase, UpdateUserDetailUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, GetProjectsUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::resource::application::ports::incoming::use_cases::{
    CreateResourceUseCase, DeleteResourceUseCase, GetResourceUseCase, GetResourcesUseCase,
    UpdateResourceUseCase,
};
use crate::modules::resource::application::resource_use_cases::ResourceUseCases;
use crate::modules::resource_category::application::ports::incoming::use_cases::{
    CreateResourceCategoryUseCase, DeleteResourceCategoryUseCase, GetResourceCategoriesUseCase,
    GetResourceCategoryUseCase, UpdateResourceCategoryUseCase,
};
use crate::modules::resource_category::application::resource_category_use_cases::ResourceCategoryUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillUseCase, GetSkillsUseCase, UpdateSkillUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::skill_category::application::ports::incoming::use_cases::{
    CreateSkillCategoryUseCase, DeleteSkillCategoryUseCase, GetSkillCategoriesUseCase,
    GetSkillCategoryUseCase, UpdateSkillCategoryUseCase,
};
use crate::modules::skill_category::application::skill_category_use_cases::SkillCategoryUseCases;
use crate::tests::support::stubs::UnusedUseCase;
use crate::AppState;

/// Builds an `AppState` where every slot panics unless a test swaps it in.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    experience: ExperienceUseCases,
    resource: ResourceUseCases,
    resource_category: ResourceCategoryUseCases,
    skill: SkillUseCases,
    skill_category: SkillCategoryUseCases,
    profile: ProfileUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unused = Arc::new(UnusedUseCase);

        Self {
            project: ProjectUseCases {
                create: unused.clone(),
                get_list: unused.clone(),
                get_single: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            experience: ExperienceUseCases {
                create: unused.clone(),
                get_list: unused.clone(),
                get_single: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            resource: ResourceUseCases {
                create: unused.clone(),
                get_list: unused.clone(),
                get_single: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            resource_category: ResourceCategoryUseCases {
                create: unused.clone(),
                get_list: unused.clone(),
                get_single: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            skill: SkillUseCases {
                create: unused.clone(),
                get_list: unused.clone(),
                get_single: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            skill_category: SkillCategoryUseCases {
                create: unused.clone(),
                get_list: unused.clone(),
                get_single: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            profile: ProfileUseCases {
                get_user_detail: unused.clone(),
                create_user_detail: unused.clone(),
                update_user_detail: unused.clone(),
                get_about_paragraphs: unused.clone(),
                get_social_links: unused,
            },
        }
    }
}

impl TestAppStateBuilder {
    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_project(mut self, uc: impl GetProjectUseCase + 'static) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Experiences
    // ------------------------------------------------------------------

    pub fn with_create_experience(mut self, uc: impl CreateExperienceUseCase + 'static) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(mut self, uc: impl GetExperiencesUseCase + 'static) -> Self {
        self.experience.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_experience(mut self, uc: impl GetExperienceUseCase + 'static) -> Self {
        self.experience.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_experience(mut self, uc: impl UpdateExperienceUseCase + 'static) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(mut self, uc: impl DeleteExperienceUseCase + 'static) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------

    pub fn with_create_resource(mut self, uc: impl CreateResourceUseCase + 'static) -> Self {
        self.resource.create = Arc::new(uc);
        self
    }

    pub fn with_get_resources(mut self, uc: impl GetResourcesUseCase + 'static) -> Self {
        self.resource.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_resource(mut self, uc: impl GetResourceUseCase + 'static) -> Self {
        self.resource.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_resource(mut self, uc: impl UpdateResourceUseCase + 'static) -> Self {
        self.resource.update = Arc::new(uc);
        self
    }

    pub fn with_delete_resource(mut self, uc: impl DeleteResourceUseCase + 'static) -> Self {
        self.resource.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Resource categories
    // ------------------------------------------------------------------

    pub fn with_create_resource_category(
        mut self,
        uc: impl CreateResourceCategoryUseCase + 'static,
    ) -> Self {
        self.resource_category.create = Arc::new(uc);
        self
    }

    pub fn with_get_resource_categories(
        mut self,
        uc: impl GetResourceCategoriesUseCase + 'static,
    ) -> Self {
        self.resource_category.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_resource_category(
        mut self,
        uc: impl GetResourceCategoryUseCase + 'static,
    ) -> Self {
        self.resource_category.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_resource_category(
        mut self,
        uc: impl UpdateResourceCategoryUseCase + 'static,
    ) -> Self {
        self.resource_category.update = Arc::new(uc);
        self
    }

    pub fn with_delete_resource_category(
        mut self,
        uc: impl DeleteResourceCategoryUseCase + 'static,
    ) -> Self {
        self.resource_category.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_skill(mut self, uc: impl GetSkillUseCase + 'static) -> Self {
        self.skill.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + 'static) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + 'static) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Skill categories
    // ------------------------------------------------------------------

    pub fn with_create_skill_category(
        mut self,
        uc: impl CreateSkillCategoryUseCase + 'static,
    ) -> Self {
        self.skill_category.create = Arc::new(uc);
        self
    }

    pub fn with_get_skill_categories(
        mut self,
        uc: impl GetSkillCategoriesUseCase + 'static,
    ) -> Self {
        self.skill_category.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_skill_category(mut self, uc: impl GetSkillCategoryUseCase + 'static) -> Self {
        self.skill_category.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_skill_category(
        mut self,
        uc: impl UpdateSkillCategoryUseCase + 'static,
    ) -> Self {
        self.skill_category.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill_category(
        mut self,
        uc: impl DeleteSkillCategoryUseCase + 'static,
    ) -> Self {
        self.skill_category.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    pub fn with_get_user_detail(mut self, uc: impl GetUserDetailUseCase + 'static) -> Self {
        self.profile.get_user_detail = Arc::new(uc);
        self
    }

    pub fn with_create_user_detail(mut self, uc: impl CreateUserDetailUseCase + 'static) -> Self {
        self.profile.create_user_detail = Arc::new(uc);
        self
    }

    pub fn with_update_user_detail(mut self, uc: impl UpdateUserDetailUseCase + 'static) -> Self {
        self.profile.update_user_detail = Arc::new(uc);
        self
    }

    pub fn with_get_about_paragraphs(
        mut self,
        uc: impl GetAboutParagraphsUseCase + 'static,
    ) -> Self {
        self.profile.get_about_paragraphs = Arc::new(uc);
        self
    }

    pub fn with_get_social_links(mut self, uc: impl GetSocialLinksUseCase + 'static) -> Self {
        self.profile.get_social_links = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            experience: self.experience,
            resource: self.resource,
            resource_category: self.resource_category,
            skill: self.skill,
            skill_category: self.skill_category,
            profile: self.profile,
        })
    }
}
