//! Named color palette.
//!
//! Projects and labels reference colors by palette name; view options carry
//! the resolved hex value.

/// Palette name used when a resource does not specify one.
pub const DEFAULT_COLOR: &str = "charcoal";

const PALETTE: [(&str, &str); 20] = [
    ("berry_red", "#b8256f"),
    ("red", "#db4035"),
    ("orange", "#ff9933"),
    ("yellow", "#fad000"),
    ("olive_green", "#afb83b"),
    ("lime_green", "#7ecc49"),
    ("green", "#299438"),
    ("mint_green", "#6accbc"),
    ("teal", "#158fad"),
    ("sky_blue", "#14aaf5"),
    ("light_blue", "#96c3eb"),
    ("blue", "#4073ff"),
    ("grape", "#884dff"),
    ("violet", "#af38eb"),
    ("lavender", "#eb96eb"),
    ("magenta", "#e05194"),
    ("salmon", "#ff8d85"),
    ("charcoal", "#808080"),
    ("grey", "#b8b8b8"),
    ("taupe", "#ccac93"),
];

/// Hex value for a palette name. Unknown names resolve to the default color.
///
pub fn hex(name: &str) -> &'static str {
    lookup(name).unwrap_or_else(|| lookup(DEFAULT_COLOR).unwrap_or("#808080"))
}

/// Hex value for a palette name, if the name is part of the palette.
///
pub fn lookup(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}
