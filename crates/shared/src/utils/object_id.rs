use anyhow::Result;
use rand::TryRngCore;
use rand::rngs::OsRng;

const OBJECT_ID_BYTES: usize = 12;

/// Opaque 24-character lowercase hex identifier drawn from the OS RNG.
pub fn generate_object_id() -> Result<String> {
    let mut bytes = [0u8; OBJECT_ID_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;

    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}
