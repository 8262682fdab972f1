use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_bateau_table::Bateau;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DetailsBateau::Table)
                    .if_not_exists()
                    .col(pk_auto(DetailsBateau::Id))
                    .col(integer_uniq(DetailsBateau::BateauId))
                    .col(double_null(DetailsBateau::Longueur))
                    .col(double_null(DetailsBateau::Largeur))
                    .col(double_null(DetailsBateau::TirantEau))
                    .col(integer_null(DetailsBateau::CapaciteMax))
                    .col(integer_null(DetailsBateau::NombreCabines))
                    .col(integer_null(DetailsBateau::NombreCouchages))
                    .col(text_null(DetailsBateau::Equipements))
                    .col(text_null(DetailsBateau::OptionsPayantes))
                    .col(string_null(DetailsBateau::ZonesNavigation))
                    .col(string_null(DetailsBateau::DepotGarantie))
                    .col(string_null(DetailsBateau::DureeLocation))
                    .col(text_null(DetailsBateau::PolitiqueAnnulation))
                    .col(boolean(DetailsBateau::LocationSansPermis).default(false))
                    .col(string_null(DetailsBateau::NumeroPoliceAssurance))
                    .col(string_null(DetailsBateau::CertificatNavigation))
                    .col(text_null(DetailsBateau::Tarifications))
                    .col(string_null(DetailsBateau::AnneeConstruction))
                    .col(string_null(DetailsBateau::Portdedepart))
                    .col(string_null(DetailsBateau::Portdarriver))
                    .col(string_null(DetailsBateau::PassagersInclusDansLePrix))
                    .col(string_null(DetailsBateau::SupplementParPassager))
                    .col(string_null(DetailsBateau::Moteur))
                    .col(string_null(DetailsBateau::ReservoirEau))
                    .col(string_null(DetailsBateau::ReservoirCarburant))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_details_bateau_bateau_id")
                            .from(DetailsBateau::Table, DetailsBateau::BateauId)
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
            .drop_table(Table::drop().table(DetailsBateau::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DetailsBateau {
    Table,
    Id,
    BateauId,
    Longueur,
    Largeur,
    TirantEau,
    CapaciteMax,
    NombreCabines,
    NombreCouchages,
    Equipements,
    OptionsPayantes,
    ZonesNavigation,
    DepotGarantie,
    DureeLocation,
    PolitiqueAnnulation,
    LocationSansPermis,
    NumeroPoliceAssurance,
    CertificatNavigation,
    Tarifications,
    AnneeConstruction,
    Portdedepart,
    Portdarriver,
    PassagersInclusDansLePrix,
    SupplementParPassager,
    Moteur,
    ReservoirEau,
    ReservoirCarburant,
}
