use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill_category::application::domain::entities::CategorySkill;

/// Skills of the given categories, grouped by category and sorted by order.
pub async fn load_skills(
    db: &DatabaseConnection,
    category_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, Vec<CategorySkill>>, DbErr> {
    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = skills::Entity::find()
        .filter(skills::Column::CategoryId.is_in(category_ids))
        .order_by_asc(skills::Column::SortOrder)
        .order_by_asc(skills::Column::Name)
        .all(db)
        .await?;

    let mut grouped: HashMap<Uuid, Vec<CategorySkill>> = HashMap::new();
    for model in models {
        grouped
            .entry(model.category_id)
            .or_default()
            .push(CategorySkill {
                id: model.id,
                name: model.name,
                slug: model.slug,
                proficiency: model.proficiency,
                order: model.sort_order,
            });
    }

    Ok(grouped)
}
