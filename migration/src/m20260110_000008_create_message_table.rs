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
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(integer(Message::ExpediteurId))
                    .col(integer_null(Message::DestinataireId))
                    .col(integer_null(Message::ReservationId))
                    .col(integer_null(Message::BateauId))
                    .col(text(Message::Contenu))
                    .col(string_null(Message::Objet))
                    .col(boolean(Message::Lu).default(false))
                    .col(
                        timestamp(Message::DateEnvoi)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_expediteur_id")
                            .from(Message::Table, Message::ExpediteurId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_destinataire_id")
                            .from(Message::Table, Message::DestinataireId)
                            .to(Utilisateur::Table, Utilisateur::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_reservation_id")
                            .from(Message::Table, Message::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_bateau_id")
                            .from(Message::Table, Message::BateauId)
                            .to(Bateau::Table, Bateau::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    ExpediteurId,
    DestinataireId,
    ReservationId,
    BateauId,
    Contenu,
    Objet,
    Lu,
    DateEnvoi,
}
