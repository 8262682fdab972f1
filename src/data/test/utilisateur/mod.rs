use crate::data::utilisateur::{CreateUtilisateurParams, UtilisateurRepository};
use entity::enums::RoleUtilisateur;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_first_admin;
