//! UUID value generator.

use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
///
/// Returned in canonical lowercase hyphenated form, e.g.
/// `550e8400-e29b-41d4-a716-446655440000`.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> String {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes).hyphenated().to_string()
}
