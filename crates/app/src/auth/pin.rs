//! Salted PIN hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a PIN with argon2 and a fresh random salt.
///
/// # Errors
///
/// Returns an error when hashing fails.
pub fn hash_pin(pin: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(pin.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Verify a PIN against a stored PHC hash string.
///
/// # Errors
///
/// Returns an error when the stored hash cannot be parsed; a plain mismatch
/// is `Ok(false)`.
pub fn verify_pin_hash(hash: &str, pin: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;

    Ok(Argon2::default()
        .verify_password(pin.as_bytes(), &parsed)
        .is_ok())
}
