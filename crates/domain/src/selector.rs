use crate::{Claimed, catalog};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a hash of the seed.
///
/// Stored programs depend on this exact function.
#[must_use]
pub fn seed_hash(seed: &str) -> u32 {
    seed.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Picks one candidate reproducibly for the given seed.
///
/// Starts at the hashed index and walks forward, wrapping, past names already claimed in the
/// session. Returns `None` for an empty candidate list.
#[must_use]
pub fn select(
    candidates: &[&'static catalog::Exercise],
    seed: &str,
    claimed: &Claimed,
) -> Option<&'static catalog::Exercise> {
    if candidates.is_empty() {
        return None;
    }

    let start = seed_hash(seed) as usize % candidates.len();

    (0..candidates.len())
        .map(|k| candidates[(start + k) % candidates.len()])
        .find(|e| !claimed.has_name(e.name))
}
