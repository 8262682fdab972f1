//! Registration and login logic.
//!
//! Passwords are hashed with argon2id; request identity is carried by the
//! session cookie, so no token issuance happens here.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use entity::enums::RoleUtilisateur;
use sea_orm::DatabaseConnection;

use crate::{
    data::utilisateur::{CreateUtilisateurParams, UtilisateurRepository},
    error::{auth::AuthError, AppError},
    model::auth::{LoginDto, RegisterDto},
};

/// Characters rejected in any credential field.
const UNSAFE_CHARS: &[char] = &['<', '>', '"', '\'', '`', ';', '(', ')', '{', '}', '$'];

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Validates the name, email and password shape, rejects duplicate
    /// emails, hashes the password and creates the account. An invalid or
    /// absent role defaults to CLIENT.
    ///
    /// # Arguments
    /// - `dto`: Registration form
    ///
    /// # Returns
    /// - `Ok(Model)`: The created account
    /// - `Err(AppError::AuthErr)`: Validation failure or duplicate email
    /// - `Err(AppError)`: Database error
    pub async fn register(&self, dto: RegisterDto) -> Result<entity::utilisateur::Model, AppError> {
        validate_name(&dto.nom, "Nom")?;
        validate_name(&dto.prenom, "Prénom")?;
        validate_email(&dto.email)?;
        validate_password_strength(&dto.password)?;

        let repo = UtilisateurRepository::new(self.db);

        let email = dto.email.trim().to_lowercase();
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let role = match dto.role.as_deref() {
            Some("CLIENT") => RoleUtilisateur::Client,
            Some("PROPRIETAIRE") => RoleUtilisateur::Proprietaire,
            Some("ADMIN") => RoleUtilisateur::Admin,
            _ => RoleUtilisateur::Client,
        };

        let utilisateur = repo
            .create(CreateUtilisateurParams {
                nom: dto.nom,
                prenom: dto.prenom,
                email,
                mot_de_passe: hash_password(&dto.password)?,
                role,
                telephone: None,
                adresse: None,
                photo_profil: None,
            })
            .await?;

        Ok(utilisateur)
    }

    /// Verifies a login attempt and returns the matching account.
    ///
    /// # Arguments
    /// - `dto`: Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(Model)`: Credentials accepted
    /// - `Err(AppError::AuthErr)`: Missing/invalid fields, unknown user or
    ///   wrong password
    /// - `Err(AppError)`: Database error
    pub async fn login(&self, dto: LoginDto) -> Result<entity::utilisateur::Model, AppError> {
        if dto.email.is_empty() || dto.password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }
        validate_email(&dto.email)?;
        if dto.password.contains(UNSAFE_CHARS) {
            return Err(AuthError::UnsafePassword.into());
        }

        let utilisateur = UtilisateurRepository::new(self.db)
            .find_by_email(dto.email.trim().to_lowercase().as_str())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(&dto.password, &utilisateur.mot_de_passe)? {
            return Err(AuthError::WrongPassword.into());
        }

        Ok(utilisateur)
    }
}

/// Hashes a password with argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored argon2id hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::InternalError(format!("Invalid stored password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Rejects empty names and names with anything but letters, spaces,
/// dashes and apostrophes.
fn validate_name(value: &str, label: &str) -> Result<(), AuthError> {
    let valid = !value.trim().is_empty()
        && value
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'');

    if valid {
        Ok(())
    } else {
        Err(AuthError::InvalidName(label.to_string()))
    }
}

/// Basic email shape check plus the unsafe-character filter.
fn validate_email(value: &str) -> Result<(), AuthError> {
    let value = value.trim();

    let well_formed = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !local.starts_with('.')
                && !local.ends_with('.')
                && !local.contains("..")
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if well_formed && !value.contains(UNSAFE_CHARS) && !value.contains(char::is_whitespace) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail)
    }
}

/// Password policy: at least 6 characters with an uppercase letter, a digit
/// and a special character.
fn validate_password_strength(value: &str) -> Result<(), AuthError> {
    let long_enough = value.len() >= 6;
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(AuthError::WeakPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("Secret123!").unwrap();
        assert!(verify_password("Secret123!", &hash).unwrap());
        assert!(!verify_password("autre-mot-de-passe", &hash).unwrap());
    }

    #[test]
    fn rejects_weak_passwords() {
        assert!(validate_password_strength("abc").is_err());
        assert!(validate_password_strength("password1!").is_err()); // no uppercase
        assert!(validate_password_strength("Password!").is_err()); // no digit
        assert!(validate_password_strength("Password1").is_err()); // no special
        assert!(validate_password_strength("Password1!").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("marin@example.com").is_ok());
        assert!(validate_email("pas-un-email").is_err());
        assert!(validate_email("a..b@example.com").is_err());
        assert!(validate_email("<script>@example.com").is_err());
        assert!(validate_email("marin@nodomain").is_err());
    }

    #[test]
    fn rejects_dangerous_names() {
        assert!(validate_name("Jean-Pierre", "Nom").is_ok());
        assert!(validate_name("O'Neil", "Nom").is_ok());
        assert!(validate_name("<b>nope</b>", "Nom").is_err());
        assert!(validate_name("", "Nom").is_err());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Utilisateur)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let dto = || RegisterDto {
            nom: "Marin".to_string(),
            prenom: "Jean".to_string(),
            email: "jean.marin@example.com".to_string(),
            password: "Password1!".to_string(),
            role: None,
        };

        let user = service.register(dto()).await.unwrap();
        assert_eq!(user.role, RoleUtilisateur::Client);

        let result = service.register(dto()).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::EmailTaken))
        ));
    }

    #[tokio::test]
    async fn register_defaults_invalid_role_to_client() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Utilisateur)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let user = service
            .register(RegisterDto {
                nom: "Marin".to_string(),
                prenom: "Jean".to_string(),
                email: "capitaine@example.com".to_string(),
                password: "Password1!".to_string(),
                role: Some("SUPERUSER".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.role, RoleUtilisateur::Client);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Utilisateur)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::utilisateur::UtilisateurFactory::new(db)
            .email("jean.marin@example.com")
            .password("Password1!")
            .build()
            .await
            .unwrap();

        let service = AuthService::new(db);

        let ok = service
            .login(LoginDto {
                email: "jean.marin@example.com".to_string(),
                password: "Password1!".to_string(),
            })
            .await;
        assert!(ok.is_ok());

        let wrong = service
            .login(LoginDto {
                email: "jean.marin@example.com".to_string(),
                password: "Autre1234!".to_string(),
            })
            .await;
        assert!(matches!(
            wrong,
            Err(AppError::AuthErr(AuthError::WrongPassword))
        ));

        let unknown = service
            .login(LoginDto {
                email: "inconnu@example.com".to_string(),
                password: "Password1!".to_string(),
            })
            .await;
        assert!(matches!(
            unknown,
            Err(AppError::AuthErr(AuthError::UserNotFound))
        ));
    }
}
