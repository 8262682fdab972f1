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
                    .table(Bateau::Table)
                    .if_not_exists()
                    .col(pk_auto(Bateau::Id))
                    .col(string(Bateau::Nom))
                    .col(string_uniq(Bateau::Slug))
                    .col(string_null(Bateau::Modele))
                    .col(string_null(Bateau::Portdefault))
                    .col(string_null(Bateau::TypeBateau))
                    .col(text_null(Bateau::Description))
                    .col(text_null(Bateau::DatesIndisponibles))
                    .col(integer(Bateau::ProprietaireId))
                    .col(
                        timestamp(Bateau::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bateau_proprietaire_id")
                            .from(Bateau::Table, Bateau::ProprietaireId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bateau::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bateau {
    Table,
    Id,
    Nom,
    Slug,
    Modele,
    Portdefault,
    TypeBateau,
    Description,
    DatesIndisponibles,
    ProprietaireId,
    CreeLe,
}
