use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string(Movies::Title))
                    .col(string_null(Movies::Genre))
                    .col(integer_null(Movies::Duration))
                    .col(string_null(Movies::ReleaseDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(pk_auto(Rooms::Id))
                    .col(integer(Rooms::RoomNumber))
                    .col(integer_null(Rooms::MaxCapacity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Showtimes::Table)
                    .if_not_exists()
                    .col(pk_auto(Showtimes::Id))
                    .col(integer(Showtimes::MovieId))
                    .col(integer(Showtimes::RoomId))
                    .col(string(Showtimes::ShowDate))
                    .col(string(Showtimes::ShowTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtimes_movie")
                            .from(Showtimes::Table, Showtimes::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtimes_room")
                            .from(Showtimes::Table, Showtimes::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_showtimes_show_date")
                    .table(Showtimes::Table)
                    .col(Showtimes::ShowDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieRoom::Table)
                    .if_not_exists()
                    .col(integer(MovieRoom::MovieId))
                    .col(integer(MovieRoom::RoomId))
                    .primary_key(
                        Index::create().col(MovieRoom::MovieId).col(MovieRoom::RoomId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_room_movie")
                            .from(MovieRoom::Table, MovieRoom::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_room_room")
                            .from(MovieRoom::Table, MovieRoom::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieRoom::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Showtimes::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Rooms::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Genre,
    Duration,
    ReleaseDate,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    RoomNumber,
    MaxCapacity,
}

#[derive(DeriveIden)]
enum Showtimes {
    Table,
    Id,
    MovieId,
    RoomId,
    ShowDate,
    ShowTime,
}

#[derive(DeriveIden)]
enum MovieRoom {
    Table,
    MovieId,
    RoomId,
}
