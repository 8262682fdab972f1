pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_utilisateur_table;
mod m20260110_000002_create_bateau_table;
mod m20260110_000003_create_details_bateau_table;
mod m20260110_000004_create_reservation_table;
mod m20260110_000005_create_paiement_table;
mod m20260110_000006_create_contrat_table;
mod m20260110_000007_create_recu_table;
mod m20260110_000008_create_message_table;
mod m20260110_000009_create_demande_proprietaire_table;
mod m20260110_000010_create_media_table;
mod m20260110_000011_create_commentaire_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_utilisateur_table::Migration),
            Box::new(m20260110_000002_create_bateau_table::Migration),
            Box::new(m20260110_000003_create_details_bateau_table::Migration),
            Box::new(m20260110_000004_create_reservation_table::Migration),
            Box::new(m20260110_000005_create_paiement_table::Migration),
            Box::new(m20260110_000006_create_contrat_table::Migration),
            Box::new(m20260110_000007_create_recu_table::Migration),
            Box::new(m20260110_000008_create_message_table::Migration),
            Box::new(m20260110_000009_create_demande_proprietaire_table::Migration),
            Box::new(m20260110_000010_create_media_table::Migration),
            Box::new(m20260110_000011_create_commentaire_table::Migration),
        ]
    }
}
