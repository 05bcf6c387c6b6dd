//! Salted PBKDF2-SHA256 password hashes.
//!
//! Stored form: `pbkdf2:sha256:<iterations>$<salt hex>$<key hex>`.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

const SCHEME: &str = "pbkdf2:sha256";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Work factor for new hashes. Unit tests use a cheap one.
pub const PASSWORD_ITERATIONS: u32 = if cfg!(test) { 1_000 } else { 600_000 };

pub fn hash_password(password: &str) -> String {
    hash_password_with(password, PASSWORD_ITERATIONS)
}

pub fn hash_password_with(password: &str, iterations: u32) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let key = derive_key(password, &salt, iterations);
    format!(
        "{SCHEME}:{iterations}${}${}",
        hex::encode(salt),
        hex::encode(key)
    )
}

/// Check a password against a stored hash. Malformed hashes never match.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(method), Some(salt_hex), Some(key_hex)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let Some(iterations) = method
        .strip_prefix(SCHEME)
        .and_then(|rest| rest.strip_prefix(':'))
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| *n > 0)
    else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(key_hex)) else {
        return false;
    };
    if expected.len() != KEY_LEN {
        return false;
    }

    let actual = derive_key(password, &salt, iterations);
    // Compare every byte regardless of where the first mismatch is
    actual
        .iter()
        .zip(&expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}
