use sha1::{Digest, Sha1};

/// Deterministic content fingerprint over the page's raw bytes.
///
/// Hashes the content verbatim, so it is whitespace-sensitive; callers that
/// want whitespace-insensitive duplicate detection normalize before hashing.
pub fn page_fingerprint(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
