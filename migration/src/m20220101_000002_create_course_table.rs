use sea_orm_migration::{prelude::*, sea_query::TableForeignKey};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
    UserId,
    Title,
    Description,
    EstimatedTime,
    MaterialsNeeded,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Course::Table)
                .col(ColumnDef::new(Course::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Course::UserId).uuid().not_null())
                .col(ColumnDef::new(Course::Title).string().not_null())
                .col(ColumnDef::new(Course::Description).text().not_null())
                .col(ColumnDef::new(Course::EstimatedTime).string().null())
                .col(ColumnDef::new(Course::MaterialsNeeded).string().null())
                .col(ColumnDef::new(Course::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Course::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        // FK: every course row must reference an existing user
        m.alter_table(
            Table::alter()
                .table(Course::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_course_user")
                        .from_tbl(Course::Table)
                        .from_col(Course::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_course_user")
                .table(Course::Table)
                .col(Course::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(Course::Table)
                .if_exists()
                .to_owned(),
        ).await?;
        Ok(())
    }
}
