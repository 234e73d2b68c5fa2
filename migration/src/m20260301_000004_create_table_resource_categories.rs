use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResourceCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ResourceCategories::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceCategories::Slug)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResourceCategories::Description).text())
                    .col(ColumnDef::new(ResourceCategories::Icon).string_len(100))
                    .col(ColumnDef::new(ResourceCategories::Color).string_len(50))
                    .col(
                        ColumnDef::new(ResourceCategories::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ResourceCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ResourceCategories::UpdatedAt)
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
                CREATE UNIQUE INDEX IF NOT EXISTS idx_resource_categories_slug_unique
                ON resource_categories (slug);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_resource_categories_updated_at
                BEFORE UPDATE ON resource_categories
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
                DROP TRIGGER IF EXISTS update_resource_categories_updated_at ON resource_categories;
                DROP INDEX IF EXISTS idx_resource_categories_slug_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResourceCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResourceCategories {
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
