use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_utilisateur_table::Utilisateur,
    m20260110_000002_create_bateau_table::Bateau,
    m20260110_000006_create_contrat_table::Contrat, m20260110_000007_create_recu_table::Recu,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(pk_auto(Media::Id))
                    .col(string(Media::Url))
                    .col(string(Media::Type))
                    .col(string_null(Media::Titre))
                    .col(text_null(Media::Description))
                    .col(string_null(Media::NumeroPolice))
                    .col(integer_null(Media::BateauId))
                    .col(integer_null(Media::UtilisateurId))
                    .col(integer_null(Media::ContratId))
                    .col(integer_null(Media::RecuId))
                    .col(
                        timestamp(Media::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_bateau_id")
                            .from(Media::Table, Media::BateauId)
                            .to(Bateau::Table, Bateau::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_utilisateur_id")
                            .from(Media::Table, Media::UtilisateurId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_contrat_id")
                            .from(Media::Table, Media::ContratId)
                            .to(Contrat::Table, Contrat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_recu_id")
                            .from(Media::Table, Media::RecuId)
                            .to(Recu::Table, Recu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Media {
    Table,
    Id,
    Url,
    Type,
    Titre,
    Description,
    NumeroPolice,
    BateauId,
    UtilisateurId,
    ContratId,
    RecuId,
    CreeLe,
}
