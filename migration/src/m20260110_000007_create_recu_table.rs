use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000005_create_paiement_table::Paiement;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recu::Table)
                    .if_not_exists()
                    .col(pk_auto(Recu::Id))
                    .col(integer_uniq(Recu::PaiementId))
                    .col(
                        timestamp(Recu::CreeLe)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recu_paiement_id")
                            .from(Recu::Table, Recu::PaiementId)
                            .to(Paiement::Table, Paiement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recu {
    Table,
    Id,
    PaiementId,
    CreeLe,
}
