//! Bit-field helpers for instruction words.
//!
//! Fields are addressed by inclusive `[low, high]` positions with bit 0 the
//! least significant, matching the notation in the RISC-V manual. These are
//! pure functions over caller-supplied words; nothing here owns or stores
//! an encoding.

/// Extract bits `[low, high]` of `word`, shifted down so the field starts
/// at bit 0. Bits above the field are zero in the result.
///
/// Fields spanning the full word width (or more) are handled as a distinct
/// case so no mask computation shifts by the type width.
///
/// # Panics
///
/// Panics if `low > high`. A reversed range is a bug at the call site,
/// typically a malformed field constant, not a recoverable condition.
#[inline]
pub fn extract(word: u64, low: u32, high: u32) -> u64 {
    assert!(low <= high, "reversed bit range [{}, {}]", low, high);
    let nbits = high - low + 1;
    let mask = if nbits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << nbits) - 1
    };
    (word >> low) & mask
}

/// 32-bit variant of [`extract`] for plain instruction words.
///
/// # Panics
///
/// Panics if `low > high`.
#[inline]
pub fn extract32(word: u32, low: u32, high: u32) -> u32 {
    assert!(low <= high, "reversed bit range [{}, {}]", low, high);
    let nbits = high - low + 1;
    let mask = if nbits >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << nbits) - 1
    };
    (word >> low) & mask
}
