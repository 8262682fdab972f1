use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_utilisateur_table::Utilisateur;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DemandeProprietaire::Table)
                    .if_not_exists()
                    .col(pk_auto(DemandeProprietaire::Id))
                    .col(integer(DemandeProprietaire::UtilisateurId))
                    .col(text(DemandeProprietaire::Data))
                    .col(date(DemandeProprietaire::DateDemande))
                    .col(string(DemandeProprietaire::Statut))
                    .col(timestamp_null(DemandeProprietaire::DateTraitement))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_demande_proprietaire_utilisateur_id")
                            .from(
                                DemandeProprietaire::Table,
                                DemandeProprietaire::UtilisateurId,
                            )
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One request per user per calendar day, enforced at the schema level.
        manager
            .create_index(
                Index::create()
                    .name("idx_demande_utilisateur_date")
                    .table(DemandeProprietaire::Table)
                    .col(DemandeProprietaire::UtilisateurId)
                    .col(DemandeProprietaire::DateDemande)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DemandeProprietaire::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DemandeProprietaire {
    Table,
    Id,
    UtilisateurId,
    Data,
    DateDemande,
    Statut,
    DateTraitement,
}
