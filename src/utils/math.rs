//! Base-unit formatting

use alloy::primitives::U256;

pub const DEFAULT_DECIMALS: u8 = 18;

/// Formats a base-unit integer as a decimal string with `decimals` places,
/// trimming trailing fractional zeros. `1e18` at 18 decimals is `"1"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals);
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}
