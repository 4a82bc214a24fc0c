use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `category` is a loose reference to category.id; no FK constraint,
        // a question may point at a category that does not exist.
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(pk_auto(Question::Id))
                    .col(text(Question::Question))
                    .col(text_null(Question::Answer))
                    .col(integer_null(Question::Category))
                    .col(integer_null(Question::Difficulty))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
    Question,
    Answer,
    Category,
    Difficulty,
}
