use entity::enums::RoleUtilisateur;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::utilisateur::UtilisateurRepository,
    error::{auth::AuthError, AppError},
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::utilisateur::Model, AppError> {
        let user_repo = UtilisateurRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(utilisateur) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if utilisateur.role != RoleUtilisateur::Admin {
                        return Err(AuthError::AccessDenied.into());
                    }
                }
            }
        }

        Ok(utilisateur)
    }
}
