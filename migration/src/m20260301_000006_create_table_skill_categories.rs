use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkillCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::Slug)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SkillCategories::Description).text())
                    .col(ColumnDef::new(SkillCategories::Icon).string_len(100))
                    .col(ColumnDef::new(SkillCategories::Color).string_len(50))
                    .col(
                        ColumnDef::new(SkillCategories::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SkillCategories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_skill_categories_slug_unique
                ON skill_categories (slug);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_skill_categories_updated_at
                BEFORE UPDATE ON skill_categories
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_skill_categories_updated_at ON skill_categories;
                DROP INDEX IF EXISTS idx_skill_categories_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SkillCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SkillCategories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Icon,
    Color,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
