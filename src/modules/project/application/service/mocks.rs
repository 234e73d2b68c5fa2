use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectData, ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::tests::support::fixtures::sample_project;

#[derive(Clone)]
pub struct MockProjectQuery {
    pub list: Result<Vec<Project>, ProjectQueryError>,
    pub single: Result<Project, ProjectQueryError>,
    pub slug_exists: Result<bool, ProjectQueryError>,
}

impl Default for MockProjectQuery {
    fn default() -> Self {
        Self {
            list: Ok(vec![]),
            single: Err(ProjectQueryError::NotFound),
            slug_exists: Ok(false),
        }
    }
}

#[async_trait]
impl ProjectQuery for MockProjectQuery {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError> {
        self.list.clone()
    }

    async fn get_by_slug(&self, _slug: &str) -> Result<Project, ProjectQueryError> {
        self.single.clone()
    }

    async fn slug_exists(&self, _slug: &str) -> Result<bool, ProjectQueryError> {
        self.slug_exists.clone()
    }
}

/// Echoes the written data back as a stored project unless `error` is set.
#[derive(Clone, Default)]
pub struct MockProjectRepository {
    pub error: Option<ProjectRepositoryError>,
}

impl MockProjectRepository {
    pub fn failing(error: ProjectRepositoryError) -> Self {
        Self { error: Some(error) }
    }

    fn stored(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut project = sample_project();
        project.title = data.title;
        project.slug = data.slug;
        project.technologies = data.technologies;
        Ok(project)
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn create_project(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        self.stored(data)
    }

    async fn update_project(
        &self,
        _slug: &str,
        data: ProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        self.stored(data)
    }

    async fn delete_project(&self, _slug: &str) -> Result<(), ProjectRepositoryError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
