//! Decimal text for MessagePack numbers.
//!
//! Numbers are rendered the way `Number.prototype.toString()` renders an IEEE
//! double: shortest round-trip digits, plain notation for decimal exponents in
//! `[-7, 21)`, exponent notation (`1e+21`, `1.5e-7`) outside it.
//!
//! 64-bit integers are rebuilt from a 48-bit high half and a 16-bit low half
//! in double arithmetic, so values beyond 2^53 come out rounded to the nearest
//! representable double.
use alloc::string::{String, ToString};

/// Formats `value` as decimal text.
pub(crate) fn format_number(value: f64) -> String {
    ryu_js::Buffer::new().format(value).to_string()
}

/// Exact formatting for integers of up to 32 bits.
pub(crate) fn format_integer(value: i64) -> String {
    itoa::Buffer::new().format(value).to_string()
}

/// Big-endian `float 32`, widened to a double.
pub(crate) fn float32(bytes: [u8; 4]) -> f64 {
    f64::from(f32::from_be_bytes(bytes))
}

/// Big-endian `float 64`.
pub(crate) fn float64(bytes: [u8; 8]) -> f64 {
    f64::from_be_bytes(bytes)
}

/// `uint 64` as `high48 * 65536 + low16` in double arithmetic.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn uint64_from_halves(bytes: [u8; 8]) -> f64 {
    let high = u64::from_be_bytes(bytes) >> 16;
    let low = u16::from_be_bytes([bytes[6], bytes[7]]);
    // `high` has 48 significant bits, so the conversion is exact
    (high as f64) * 65536.0 + f64::from(low)
}

/// `int 64` as `high48 * 65536 + low16` in double arithmetic, with a signed
/// high half.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn int64_from_halves(bytes: [u8; 8]) -> f64 {
    let high = i64::from_be_bytes(bytes) >> 16;
    let low = u16::from_be_bytes([bytes[6], bytes[7]]);
    (high as f64) * 65536.0 + f64::from(low)
}
