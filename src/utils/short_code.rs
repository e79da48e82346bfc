//! Deterministic short code derivation.

/// Length of the short code in hex characters.
pub const CODE_LENGTH: usize = 8;

/// Derives the short code for a URL.
///
/// Computes the MD5 digest of the UTF-8 bytes of the input and returns the
/// first [`CODE_LENGTH`] characters of its lowercase hex encoding. Pure and
/// total: the same input always yields the same output, across process
/// restarts, for any string including the empty one (callers reject empty
/// input upstream).
///
/// # Collisions
///
/// At 8 hex characters (32 bits) distinct URLs can collide, and nothing
/// downstream detects that: the later URL silently aliases to the earlier
/// one's code. Known limitation inherited from the original schema; widen
/// [`CODE_LENGTH`] if the link population ever makes this likely.
///
/// # Examples
///
/// ```
/// use urlshort::utils::short_code::generate;
///
/// assert_eq!(generate("https://example.com"), "c984d06a");
/// ```
pub fn generate(url: &str) -> String {
    let digest = md5::compute(url.as_bytes());
    format!("{:x}", digest)[..CODE_LENGTH].to_string()
}
