use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resource::adapter::outgoing::category_lookup::load_categories;
use crate::modules::resource::adapter::outgoing::sea_orm_entity::resources::{
    self, Column, Entity,
};
use crate::modules::resource::application::domain::entities::{Resource, ResourceFilter};
use crate::modules::resource::application::ports::outgoing::{ResourceQuery, ResourceQueryError};
use crate::modules::resource_category::adapter::outgoing::sea_orm_entity::resource_categories;

#[derive(Clone)]
pub struct ResourceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResourceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn embed_categories(
        &self,
        models: Vec<resources::Model>,
    ) -> Result<Vec<Resource>, ResourceQueryError> {
        let categories = load_categories(&self.db, models.iter().map(|m| m.category_id))
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|model| {
                let category = categories.get(&model.category_id).cloned();
                model
                    .into_resource(category)
                    .map_err(|e| ResourceQueryError::SerializationError(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl ResourceQuery for ResourceQueryPostgres {
    async fn list(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ResourceQueryError> {
        let mut select = Entity::find();

        if let Some(category_id) = filter.category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        if let Some(kind) = filter.kind {
            select = select.filter(Column::Kind.eq(kind.as_str()));
        }

        // jsonb containment: every requested tag must be present
        if !filter.tags.is_empty() {
            select = select.filter(Expr::cust_with_values(
                "tags @> ?",
                [serde_json::json!(filter.tags)],
            ));
        }

        let models = select
            .order_by_desc(Column::PublishedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.embed_categories(models).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Resource, ResourceQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ResourceQueryError::NotFound)?;

        self.embed_categories(vec![model])
            .await?
            .pop()
            .ok_or(ResourceQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ResourceQueryError> {
        let found = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, ResourceQueryError> {
        let found = resource_categories::Entity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

fn map_db_err(e: DbErr) -> ResourceQueryError {
    ResourceQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::resource::application::domain::entities::ResourceType;
    use crate::tests::support::fixtures::{resource_category_model, resource_model};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    #[tokio::test]
    async fn test_list_embeds_categories() {
        let category = resource_category_model("backend");
        let mut video = resource_model("talk", category.id);
        video.kind = "Video".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![resource_model("rust-book", category.id), video]])
            .append_query_results(vec![vec![category.clone()]])
            .into_connection();

        let query = ResourceQueryPostgres::new(Arc::new(db));
        let list = query
            .list(&ResourceFilter {
                tags: vec!["rust".to_string()],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].category.as_ref().unwrap().slug, "backend");
        assert_eq!(list[1].kind, ResourceType::Video);
    }

    #[tokio::test]
    async fn test_list_filters_by_category_type_and_every_tag() {
        let category_id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<resources::Model>::new()])
                .into_connection(),
        );

        let query = ResourceQueryPostgres::new(Arc::clone(&db));
        query
            .list(&ResourceFilter {
                category_id: Some(category_id),
                tags: vec!["rust".to_string(), "book".to_string()],
                kind: Some(ResourceType::CaseStudy),
            })
            .await
            .unwrap();
        drop(query);

        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        let stmt = &log[0].statements()[0];

        assert!(stmt.sql.contains(r#""resources"."category_id" = $1"#));
        assert!(stmt.sql.contains(r#""resources"."kind" = $2"#));
        assert!(stmt.sql.contains("tags @> $3"));

        let values = &stmt.values.as_ref().unwrap().0;
        assert_eq!(values[0], Value::Uuid(Some(Box::new(category_id))));
        assert_eq!(values[1], Value::String(Some(Box::new("Case Study".to_string()))));
        assert_eq!(
            values[2],
            Value::Json(Some(Box::new(serde_json::json!(["rust", "book"]))))
        );
    }

    #[tokio::test]
    async fn test_list_empty_skips_category_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<resources::Model>::new()])
            .into_connection();

        let query = ResourceQueryPostgres::new(Arc::new(db));

        assert!(query
            .list(&ResourceFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_by_slug_rejects_unknown_stored_type() {
        let category = resource_category_model("backend");
        let mut model = resource_model("odd", category.id);
        model.kind = "Podcast".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .append_query_results(vec![vec![category]])
            .into_connection();

        let query = ResourceQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.get_by_slug("odd").await.unwrap_err(),
            ResourceQueryError::SerializationError(_)
        ));
    }

    #[tokio::test]
    async fn test_category_exists() {
        let category = resource_category_model("backend");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![category.clone()],
                Vec::<resource_categories::Model>::new(),
            ])
            .into_connection();

        let query = ResourceQueryPostgres::new(Arc::new(db));

        assert!(query.category_exists(category.id).await.unwrap());
        assert!(!query.category_exists(Uuid::new_v4()).await.unwrap());
    }
}
