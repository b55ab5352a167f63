//! Request signing primitives: canonical strings and hex digests (no I/O).
//!
//! The server recomputes these digests to authenticate requests, so the
//! canonical string ordering and the literal `=`, `&`, `,` separators are
//! part of the wire contract.

use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Compute the request signature (`sig`) for a send or pull operation.
///
/// The canonical string is
/// `appkey=<app_key>&random=<random>&time=<time>`, extended with
/// `&mobile=<m1>,<m2>,...` when `mobiles` is non-empty. Status pulls carry
/// no recipient context and must pass an empty slice, which omits the
/// `&mobile=` suffix entirely.
///
/// Returns the lowercase hex SHA-256 digest (64 characters).
pub fn calculate_signature<S: AsRef<str>>(
    app_key: &str,
    random: u32,
    time: u64,
    mobiles: &[S],
) -> String {
    let mut canonical = format!("appkey={app_key}&random={random}&time={time}");
    if !mobiles.is_empty() {
        canonical.push_str("&mobile=");
        canonical.push_str(
            &mobiles
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    hex::encode(Sha256::digest(canonical.as_bytes()))
}

/// Compute the upload authentication digest for a file transfer.
///
/// Same construction as [`calculate_signature`] but with a
/// `&content-sha1=<file_sha1>` suffix in place of `&mobile=`. The
/// `file_sha1` value is produced by [`sha1sum`].
pub fn calculate_auth(app_key: &str, random: u32, time: u64, content_sha1: &str) -> String {
    let canonical =
        format!("appkey={app_key}&random={random}&time={time}&content-sha1={content_sha1}");
    hex::encode(Sha256::digest(canonical.as_bytes()))
}

/// SHA-1 digest of raw bytes as lowercase hex (40 characters).
pub fn sha1sum(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha1::digest(data.as_ref()))
}
