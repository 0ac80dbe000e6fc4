use anyhow::{bail, ensure, Result};

const HEX_DIGITS: usize = 6;

/// Checks for the exact `#rrggbb` form. Shorthand (`#abc`) and alpha
/// (`#rrggbbaa`) forms are not hex colors here.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            digits.len() == HEX_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

pub fn parse_rgb8(value: &str) -> Result<[u8; 3]> {
    let digits = match value.strip_prefix('#') {
        Some(digits) => digits,
        None => bail!("hex color {:?} does not start with '#'", value),
    };
    ensure!(
        digits.len() == HEX_DIGITS,
        "hex color {:?} has {} digits, expected {}",
        value,
        digits.len(),
        HEX_DIGITS
    );
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        bail!("hex color {:?} contains non-hex digit {:?}", value, bad);
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        // all digits are ascii at this point, so byte slicing is fine
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)?;
    }
    Ok(rgb)
}

pub fn format_rgb8([red, green, blue]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", red, green, blue)
}
