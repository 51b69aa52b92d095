use crate::application::ports::password_hasher::PasswordHasher;
use crate::shared::error::AppError;
use argon2::password_hash::{
    rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier as _,
    SaltString,
};
use argon2::Argon2;

/// Argon2id digests behind the opaque hashing port.
#[derive(Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| AppError::Crypto(format!("Hash failed: {err}")))?;
        Ok(digest.to_string())
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|err| AppError::Crypto(format!("Invalid digest: {err}")))?;
        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(err) => Err(AppError::Crypto(format!("Verify failed: {err}"))),
        }
    }
}
