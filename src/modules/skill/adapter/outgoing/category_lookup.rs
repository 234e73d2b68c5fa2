use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::SkillCategorySummary;
use crate::modules::skill_category::adapter::outgoing::sea_orm_entity::skill_categories;

pub async fn load_categories<I>(
    db: &DatabaseConnection,
    ids: I,
) -> Result<HashMap<Uuid, SkillCategorySummary>, DbErr>
where
    I: IntoIterator<Item = Uuid>,
{
    let ids: HashSet<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = skill_categories::Entity::find()
        .filter(skill_categories::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(models
        .into_iter()
        .map(|m| {
            let summary = SkillCategorySummary {
                id: m.id,
                name: m.name,
                slug: m.slug,
                description: m.description,
                icon: m.icon,
                color: m.color,
                order: m.sort_order,
            };
            (summary.id, summary)
        })
        .collect())
}
