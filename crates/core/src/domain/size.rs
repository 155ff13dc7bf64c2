// Size strings ("2g", "512m") and human-readable byte formatting

use super::error::{DomainError, Result};

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;
pub const GIB: u64 = 1024 * MIB;

/// Parse a JVM-style size string into bytes
///
/// Accepts an unsigned integer followed by an optional, case-insensitive
/// unit suffix: `k`, `m` or `g` (binary multiples). No suffix means bytes.
///
/// # Example
/// ```text
/// parse_size("2g")?   == 2 * 1024 * 1024 * 1024
/// parse_size("512M")? == 512 * 1024 * 1024
/// parse_size("1024")? == 1024
/// ```
pub fn parse_size(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    let (digits, multiplier) = match trimmed.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => {
            let multiplier = match c.to_ascii_lowercase() {
                'k' => KIB,
                'm' => MIB,
                'g' => GIB,
                _ => return Err(DomainError::InvalidSize(raw.to_string())),
            };
            (&trimmed[..trimmed.len() - 1], multiplier)
        }
        _ => (trimmed, 1),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidSize(raw.to_string()));
    }

    let value: u64 = digits
        .parse()
        .map_err(|_| DomainError::SizeOverflow(raw.to_string()))?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| DomainError::SizeOverflow(raw.to_string()))
}

/// Render a byte count for operator-facing messages (e.g. "1.5GiB", "1023B")
pub fn format_bytes(bytes: u64) -> String {
    let (unit, divisor) = if bytes >= GIB {
        ("GiB", GIB)
    } else if bytes >= MIB {
        ("MiB", MIB)
    } else if bytes >= KIB {
        ("KiB", KIB)
    } else {
        return format!("{}B", bytes);
    };

    if bytes % divisor == 0 {
        format!("{}{}", bytes / divisor, unit)
    } else {
        format!("{:.1}{}", bytes as f64 / divisor as f64, unit)
    }
}
