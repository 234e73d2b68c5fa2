use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::experience::application::domain::entities::{BackfillReport, Experience};
use crate::modules::experience::application::ports::incoming::use_cases::{
    BackfillExperienceSlugsError, BackfillExperienceSlugsUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceRepository,
};
use crate::shared::slug::{experience_slug, with_suffix};

/// Upper bound on `-n` suffixes tried for a single base slug.
const MAX_SUFFIX_ATTEMPTS: u32 = 1000;

pub struct BackfillExperienceSlugsService<Q, R>
where
    Q: ExperienceQuery,
    R: ExperienceRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> BackfillExperienceSlugsService<Q, R>
where
    Q: ExperienceQuery,
    R: ExperienceRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn free_slug_for(
        &self,
        experience: &Experience,
        base: &str,
    ) -> Result<String, BackfillExperienceSlugsError> {
        for attempt in 0..=MAX_SUFFIX_ATTEMPTS {
            let candidate = with_suffix(base, attempt);
            let owner = self
                .query
                .find_slug_owner(&candidate)
                .await
                .map_err(|e| BackfillExperienceSlugsError::QueryError(e.to_string()))?;

            match owner {
                None => return Ok(candidate),
                Some(id) if id == experience.id => return Ok(candidate),
                Some(_) => continue,
            }
        }

        Err(BackfillExperienceSlugsError::SlugSpaceExhausted(
            base.to_string(),
        ))
    }
}

#[async_trait]
impl<Q, R> BackfillExperienceSlugsUseCase for BackfillExperienceSlugsService<Q, R>
where
    Q: ExperienceQuery + Send + Sync,
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<BackfillReport, BackfillExperienceSlugsError> {
        let experiences = self
            .query
            .list()
            .await
            .map_err(|e| BackfillExperienceSlugsError::QueryError(e.to_string()))?;

        let mut report = BackfillReport::default();

        for experience in experiences {
            report.scanned += 1;

            let base = experience_slug(&experience.title, &experience.company);
            if base.is_empty() {
                warn!(id = %experience.id, "Experience has no sluggable title or company");
                report.skipped += 1;
                continue;
            }

            let slug = self.free_slug_for(&experience, &base).await?;
            if slug == experience.slug {
                report.skipped += 1;
                continue;
            }

            self.repository
                .update_slug(experience.id, &slug)
                .await
                .map_err(|e| BackfillExperienceSlugsError::RepositoryError(e.to_string()))?;

            info!(id = %experience.id, from = %experience.slug, to = %slug, "Experience slug updated");
            report.updated += 1;
        }

        info!(
            scanned = report.scanned,
            updated = report.updated,
            skipped = report.skipped,
            "Experience slug backfill finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;
    use crate::modules::experience::application::services::mocks::{
        MockExperienceQuery, MockExperienceRepository,
    };
    use crate::tests::support::fixtures::sample_experience;

    fn experience(slug: &str, title: &str, company: &str) -> Experience {
        let mut e = sample_experience();
        e.id = Uuid::new_v4();
        e.slug = slug.to_string();
        e.title = title.to_string();
        e.company = company.to_string();
        e
    }

    #[tokio::test]
    async fn test_backfill_rewrites_legacy_slugs() {
        let legacy = experience("backend-engineer", "Backend Engineer", "Acme Corp");
        let query = MockExperienceQuery::with_experiences(vec![legacy.clone()]);
        let repo = MockExperienceRepository::default();
        let service = BackfillExperienceSlugsService::new(query, repo.clone());

        let report = service.execute().await.unwrap();

        assert_eq!(
            report,
            BackfillReport {
                scanned: 1,
                updated: 1,
                skipped: 0
            }
        );
        assert_eq!(
            repo.recorded_slug_updates(),
            vec![(legacy.id, "backend-engineer-acme-corp".to_string())]
        );
    }

    #[tokio::test]
    async fn test_backfill_leaves_current_slugs_alone() {
        let query = MockExperienceQuery::with_experiences(vec![sample_experience()]);
        let repo = MockExperienceRepository::default();
        let service = BackfillExperienceSlugsService::new(query, repo.clone());

        let report = service.execute().await.unwrap();

        assert_eq!(report.skipped, 1);
        assert!(repo.recorded_slug_updates().is_empty());
    }

    #[tokio::test]
    async fn test_backfill_adds_suffix_when_base_taken() {
        let holder = experience("backend-engineer-acme-corp", "Backend Engineer", "Acme Corp");
        let twin = experience("old-slug", "Backend Engineer", "Acme Corp");
        let query = MockExperienceQuery::with_experiences(vec![holder, twin.clone()]);
        let repo = MockExperienceRepository::default();
        let service = BackfillExperienceSlugsService::new(query, repo.clone());

        let report = service.execute().await.unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(
            repo.recorded_slug_updates(),
            vec![(twin.id, "backend-engineer-acme-corp-1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_backfill_skips_unsluggable_rows() {
        let blank = experience("x", "!!!", "???");
        let query = MockExperienceQuery::with_experiences(vec![blank]);
        let service =
            BackfillExperienceSlugsService::new(query, MockExperienceRepository::default());

        let report = service.execute().await.unwrap();

        assert_eq!(report.scanned, 1);
        assert_eq!(report.skipped, 1);
    }

    #[tokio::test]
    async fn test_backfill_query_failure() {
        let query =
            MockExperienceQuery::failing(ExperienceQueryError::DatabaseError("down".into()));
        let service =
            BackfillExperienceSlugsService::new(query, MockExperienceRepository::default());

        assert!(matches!(
            service.execute().await.unwrap_err(),
            BackfillExperienceSlugsError::QueryError(_)
        ));
    }
}
