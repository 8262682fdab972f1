use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000004_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contrat::Table)
                    .if_not_exists()
                    .col(pk_auto(Contrat::Id))
                    .col(integer_uniq(Contrat::ReservationId))
                    .col(boolean(Contrat::Signature).default(false))
                    .col(
                        timestamp(Contrat::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contrat_reservation_id")
                            .from(Contrat::Table, Contrat::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contrat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contrat {
    Table,
    Id,
    ReservationId,
    Signature,
    CreeLe,
}
