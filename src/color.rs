//! Color-spec parsing, channel mixing, and hex formatting.
//!
//! Scale endpoints arrive as strings (`"#d4e7c8"`, `"rebeccapurple"`); the
//! typed representation is `palette`'s 8-bit sRGB. Mixing happens channel-wise
//! in sRGB space, which is what chart gradients conventionally use.

use palette::Srgb;

/// Parse a color spec: 3- or 6-digit hex (with or without `#`) or a CSS name.
pub fn parse(spec: &str) -> Option<Srgb<u8>> {
    let spec = spec.trim();
    if let Ok(c) = spec.parse::<Srgb<u8>>() {
        return Some(c);
    }
    palette::named::from_str(&spec.to_ascii_lowercase())
}

/// Whether `spec` is a legal color specification.
pub fn is_valid(spec: &str) -> bool {
    parse(spec).is_some()
}

/// Mix `a` toward `b` by `percentage` (0 yields `a`, 100 yields `b`).
pub fn mix(a: Srgb<u8>, b: Srgb<u8>, percentage: f64) -> Srgb<u8> {
    let p = (percentage / 100.0).clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| ((f64::from(y) - f64::from(x)) * p + f64::from(x)).round() as u8;
    Srgb::new(
        channel(a.red, b.red),
        channel(a.green, b.green),
        channel(a.blue, b.blue),
    )
}

/// Normalized lowercase `#rrggbb` form.
pub fn to_hex(c: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}
