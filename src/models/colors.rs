//! Color normalization from CSS computed-style values to the 6-hex-digit
//! form (no `#` prefix) used throughout the extracted scene data.

/// Fallback color used when a computed value is absent, transparent, or
/// cannot be parsed.
pub const FALLBACK_HEX: &str = "000000";

/// Normalizes a CSS color value to six lowercase hex digits without a `#`.
///
/// Rules, in order:
/// - empty, `transparent`, or `none` -> `"000000"`
/// - already hex (`#...`) -> the `#` is stripped and the digits lowercased
/// - otherwise the first three integers found in the string are taken as
///   R, G, B and encoded as two zero-padded hex digits each (this covers the
///   `rgb(...)` / `rgba(...)` forms computed styles produce)
/// - anything else -> `"000000"`
pub fn css_color_to_hex(value: &str) -> String {
    let value = value.trim();
    if value.is_empty()
        || value.eq_ignore_ascii_case("transparent")
        || value.eq_ignore_ascii_case("none")
    {
        return FALLBACK_HEX.to_string();
    }

    if let Some(hex) = value.strip_prefix('#') {
        return hex.to_ascii_lowercase();
    }

    let channels = leading_integers(value, 3);
    if channels.len() == 3 {
        format!(
            "{:02x}{:02x}{:02x}",
            channels[0], channels[1], channels[2]
        )
    } else {
        FALLBACK_HEX.to_string()
    }
}

/// Collects up to `limit` decimal integer runs from `value`, clamping each
/// to the 0-255 channel range.
fn leading_integers(value: &str, limit: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(limit);
    let mut current: Option<u32> = None;

    for ch in value.chars() {
        if let Some(digit) = ch.to_digit(10) {
            current = Some(current.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        } else if let Some(run) = current.take() {
            out.push(run.min(255) as u8);
            if out.len() == limit {
                return out;
            }
        }
    }
    if let Some(run) = current {
        if out.len() < limit {
            out.push(run.min(255) as u8);
        }
    }
    out
}
