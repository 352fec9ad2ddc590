use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a usage finding.
///
/// Identity fields:
/// - matcher id
/// - target name
/// - snippet, uppercased with whitespace runs collapsed
///
/// Offsets are left out so the fingerprint survives edits elsewhere in the unit.
pub fn fingerprint_for_usage(matcher: &str, target_name: &str, snippet: &str) -> String {
    let normalized = snippet
        .split_ascii_whitespace()
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join(" ");
    let canonical = [matcher, target_name, normalized.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
