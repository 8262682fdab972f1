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
                    .table(Paiement::Table)
                    .if_not_exists()
                    .col(pk_auto(Paiement::Id))
                    .col(integer_uniq(Paiement::ReservationId))
                    .col(double(Paiement::Montant))
                    .col(double(Paiement::MontantTotal))
                    .col(string(Paiement::MethodePaiement))
                    .col(double(Paiement::PourcentageStripe))
                    .col(string(Paiement::EtatPaiement))
                    .col(
                        timestamp(Paiement::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paiement_reservation_id")
                            .from(Paiement::Table, Paiement::ReservationId)
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
            .drop_table(Table::drop().table(Paiement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Paiement {
    Table,
    Id,
    ReservationId,
    Montant,
    MontantTotal,
    MethodePaiement,
    PourcentageStripe,
    EtatPaiement,
    CreeLe,
}
