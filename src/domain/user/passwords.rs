use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use borsh::{BorshDeserialize, BorshSerialize};
use rand_core::OsRng;
use zeroize::{self, Zeroize};

use crate::error::{AppError, ErrArgon2};

/// Empreinte argon2 au format PHC: sel, coût et condensat dans une seule
/// chaîne opaque. Jamais le mot de passe en clair.
#[derive(Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PasswordDigest {
    hashed: String,
}

impl PasswordDigest {
    /// Hache le mot de passe avec un sel frais à chaque appel.
    pub fn from_plain(plain: &str) -> Result<Self, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| AppError::Argon2(ErrArgon2::PasswordHashError(e)))?
            .to_string();

        Ok(Self { hashed: hash })
    }

    /// Recalcule et compare en temps constant. Une empreinte illisible vaut
    /// `false`, jamais une erreur pour l'appelant.
    pub fn verify(&self, plain: &str) -> bool {
        match PasswordHash::new(&self.hashed) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(plain.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hashed
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PasswordDigest(<redacted>)")
    }
}

impl Drop for PasswordDigest {
    fn drop(&mut self) {
        self.hashed.zeroize();
    }
}
