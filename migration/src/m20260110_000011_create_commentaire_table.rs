use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_utilisateur_table::Utilisateur,
    m20260110_000002_create_bateau_table::Bateau,
    m20260110_000004_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commentaire::Table)
                    .if_not_exists()
                    .col(pk_auto(Commentaire::Id))
                    .col(text(Commentaire::Contenu))
                    .col(integer(Commentaire::Note))
                    .col(integer(Commentaire::AuteurId))
                    .col(integer_null(Commentaire::BateauId))
                    .col(integer_null(Commentaire::ReservationId))
                    .col(
                        timestamp(Commentaire::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commentaire_auteur_id")
                            .from(Commentaire::Table, Commentaire::AuteurId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commentaire_bateau_id")
                            .from(Commentaire::Table, Commentaire::BateauId)
                            .to(Bateau::Table, Bateau::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commentaire_reservation_id")
                            .from(Commentaire::Table, Commentaire::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commentaire::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Commentaire {
    Table,
    Id,
    Contenu,
    Note,
    AuteurId,
    BateauId,
    ReservationId,
    CreeLe,
}
