use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Shared updated_at trigger function
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        // =====================================================
        // user_details (single row: the site owner's profile)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(UserDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(UserDetails::WelcomeTitle)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserDetails::WelcomeNote).text().not_null())
                    .col(
                        ColumnDef::new(UserDetails::WelcomeDescription)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserDetails::UserImage).text().not_null())
                    .col(ColumnDef::new(UserDetails::CvFile).text())
                    .col(
                        ColumnDef::new(UserDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserDetails::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // about_paragraphs
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(AboutParagraphs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutParagraphs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(AboutParagraphs::Paragraph).text().not_null())
                    .col(
                        ColumnDef::new(AboutParagraphs::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AboutParagraphs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AboutParagraphs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // social_links
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SocialLinks::Name).string_len(100).not_null())
                    .col(ColumnDef::new(SocialLinks::Link).text().not_null())
                    .col(ColumnDef::new(SocialLinks::Icon).string_len(100).not_null())
                    .col(
                        ColumnDef::new(SocialLinks::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SocialLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SocialLinks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        for table in ["user_details", "about_paragraphs", "social_links"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    CREATE TRIGGER update_{table}_updated_at
                    BEFORE UPDATE ON {table}
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["user_details", "about_paragraphs", "social_links"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table}"
                ))
                .await?;
        }

        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AboutParagraphs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserDetails::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserDetails {
    Table,
    Id,
    WelcomeTitle,
    WelcomeNote,
    WelcomeDescription,
    UserImage,
    CvFile,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AboutParagraphs {
    Table,
    Id,
    Paragraph,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    Name,
    Link,
    Icon,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
