use crate::data::message::{DirectionMessage, MessageRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_utilisateur;
mod mark_as_read;
