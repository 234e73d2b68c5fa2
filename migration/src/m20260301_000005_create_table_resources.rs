use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create resources table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Resources::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Resources::Slug).string_len(200).not_null())
                    .col(ColumnDef::new(Resources::Description).text().not_null())
                    .col(ColumnDef::new(Resources::Content).text().not_null())
                    .col(ColumnDef::new(Resources::CoverImage).text().not_null())
                    .col(ColumnDef::new(Resources::Link).text())
                    .col(ColumnDef::new(Resources::Kind).string_len(30).not_null())
                    .col(ColumnDef::new(Resources::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Resources::Tags).json_binary().not_null())
                    .col(ColumnDef::new(Resources::Author).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Resources::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Resources::ReadTimeMinutes).integer())
                    .col(
                        ColumnDef::new(Resources::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Resources::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resources_category_id")
                            .from(Resources::Table, Resources::CategoryId)
                            .to(ResourceCategories::Table, ResourceCategories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_resources_slug_unique
                ON resources (slug);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_resources_category_id
                ON resources (category_id);
                "#,
            )
            .await?;

        // Tag filters use jsonb containment: tags @> '["rust","web"]'
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_resources_tags
                ON resources USING GIN (tags);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_resources_updated_at
                BEFORE UPDATE ON resources
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
                DROP TRIGGER IF EXISTS update_resources_updated_at ON resources;
                DROP INDEX IF EXISTS idx_resources_slug_unique;
                DROP INDEX IF EXISTS idx_resources_category_id;
                DROP INDEX IF EXISTS idx_resources_tags;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resources {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Content,
    CoverImage,
    Link,
    Kind,
    CategoryId,
    Tags,
    Author,
    PublishedAt,
    ReadTimeMinutes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ResourceCategories {
    Table,
    Id,
}
