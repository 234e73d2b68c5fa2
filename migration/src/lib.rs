pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_profile_tables;
mod m20260301_000002_create_table_projects;
mod m20260301_000003_create_table_experiences;
mod m20260301_000004_create_table_resource_categories;
mod m20260301_000005_create_table_resources;
mod m20260301_000006_create_table_skill_categories;
mod m20260301_000007_create_table_skills;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_profile_tables::Migration),
            Box::new(m20260301_000002_create_table_projects::Migration),
            Box::new(m20260301_000003_create_table_experiences::Migration),
            Box::new(m20260301_000004_create_table_resource_categories::Migration),
            Box::new(m20260301_000005_create_table_resources::Migration),
            Box::new(m20260301_000006_create_table_skill_categories::Migration),
            Box::new(m20260301_000007_create_table_skills::Migration),
        ]
    }
}
