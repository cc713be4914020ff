/*!
 * Text detection via a bounded UTF-8 decode probe
 */

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected by the probe
pub const PROBE_LEN: u64 = 1024;

/// Whether the first `PROBE_LEN` bytes of a file decode as UTF-8
///
/// A multi-byte sequence cut off by the probe boundary is not a failure, but
/// one cut off by end-of-file is. Only decodability is checked; control bytes
/// are accepted.
pub fn probe_text(path: &Path) -> io::Result<bool> {
    let mut buffer = Vec::with_capacity(PROBE_LEN as usize);
    File::open(path)?.take(PROBE_LEN).read_to_end(&mut buffer)?;
    let at_limit = buffer.len() as u64 == PROBE_LEN;
    Ok(is_text_prefix(&buffer, at_limit))
}

/// UTF-8 check; an incomplete trailing sequence passes only when `truncated`
pub fn is_text_prefix(bytes: &[u8], truncated: bool) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        // `error_len() == None` means the input ended mid-sequence
        Err(e) => truncated && e.error_len().is_none(),
    }
}
