use crate::data::paiement::PaiementRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_reservation;
mod get_by_proprietaire;
