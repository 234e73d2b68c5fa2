use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::modules::resource_category::adapter::outgoing::sea_orm_entity::resource_categories;
use crate::modules::resource_category::application::domain::entities::ResourceCategory;

/// Loads the categories with the given ids in one round trip.
pub async fn load_categories<I>(
    db: &DatabaseConnection,
    ids: I,
) -> Result<HashMap<Uuid, ResourceCategory>, DbErr>
where
    I: IntoIterator<Item = Uuid>,
{
    let ids: HashSet<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = resource_categories::Entity::find()
        .filter(resource_categories::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(models
        .into_iter()
        .map(|model| (model.id, ResourceCategory::from(model)))
        .collect())
}
