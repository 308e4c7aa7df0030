//! String and number helpers shared by the record builder and the tag reader.

use std::collections::TryReserveError;

/// Text stored for primary fields the file does not provide.
pub const UNTAGGED: &str = "<Untagged>";

/// Copy `value` into freshly reserved storage, reporting allocation failure
/// instead of aborting.
pub fn copy_text(value: &str) -> Result<String, TryReserveError> {
    let mut out = String::new();
    out.try_reserve_exact(value.len())?;
    out.push_str(value);
    Ok(out)
}

/// Like [`copy_text`], but an empty value becomes [`UNTAGGED`].
pub fn text_or_untagged(value: &str) -> Result<String, TryReserveError> {
    if value.is_empty() {
        copy_text(UNTAGGED)
    } else {
        copy_text(value)
    }
}

/// Parse the maximal run of ASCII digits at the start of `value`.
///
/// Parsing stops at the first non-digit, so `"3/10"` is 3 and `"A3"` is 0.
/// Values too large for `u32` wrap, matching unsigned accumulation.
pub fn leading_number(value: &str) -> u32 {
    value
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
        })
}

/// True when `value` is empty or the untagged placeholder.
pub fn is_blank_or_untagged(value: &str) -> bool {
    value.is_empty() || value == UNTAGGED
}
