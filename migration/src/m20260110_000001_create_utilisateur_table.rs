use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Utilisateur::Table)
                    .if_not_exists()
                    .col(pk_auto(Utilisateur::Id))
                    .col(string(Utilisateur::Nom))
                    .col(string(Utilisateur::Prenom))
                    .col(string_uniq(Utilisateur::Email))
                    .col(string(Utilisateur::MotDePasse))
                    .col(string(Utilisateur::Role))
                    .col(string_null(Utilisateur::Telephone))
                    .col(string_null(Utilisateur::Adresse))
                    .col(string_null(Utilisateur::PhotoProfil))
                    .col(
                        timestamp(Utilisateur::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Utilisateur::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Utilisateur {
    Table,
    Id,
    Nom,
    Prenom,
    Email,
    MotDePasse,
    Role,
    Telephone,
    Adresse,
    PhotoProfil,
    CreeLe,
}
