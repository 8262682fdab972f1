use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_utilisateur_table::Utilisateur,
    m20260110_000002_create_bateau_table::Bateau,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UtilisateurId))
                    .col(integer(Reservation::BateauId))
                    .col(timestamp(Reservation::DateDebut))
                    .col(timestamp(Reservation::DateFin))
                    .col(string(Reservation::Statut))
                    .col(text_null(Reservation::Data))
                    .col(string_null(Reservation::Plage))
                    .col(integer_null(Reservation::NombreDePassagers))
                    .col(string_null(Reservation::Supplement))
                    .col(string_null(Reservation::Heure))
                    .col(double(Reservation::PrixDeBase).default(0.0))
                    .col(double(Reservation::PrixSupplementPassagers).default(0.0))
                    .col(double(Reservation::PrixOptionsPayantes).default(0.0))
                    .col(double(Reservation::Total).default(0.0))
                    .col(double(Reservation::MontantFinal).default(0.0))
                    .col(double(Reservation::Commission).default(0.0))
                    .col(
                        timestamp(Reservation::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_utilisateur_id")
                            .from(Reservation::Table, Reservation::UtilisateurId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_bateau_id")
                            .from(Reservation::Table, Reservation::BateauId)
                            .to(Bateau::Table, Bateau::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    UtilisateurId,
    BateauId,
    DateDebut,
    DateFin,
    Statut,
    Data,
    Plage,
    NombreDePassagers,
    Supplement,
    Heure,
    PrixDeBase,
    PrixSupplementPassagers,
    PrixOptionsPayantes,
    Total,
    MontantFinal,
    Commission,
    CreeLe,
}
