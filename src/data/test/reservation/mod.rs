use crate::data::reservation::ReservationRepository;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_overlapping;
mod get_by_proprietaire;
mod get_by_utilisateur;
