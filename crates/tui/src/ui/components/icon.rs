/// Maps an icon name to the glyph drawn in its place.
///
/// Unknown names render as `?` so a typo shows up on screen instead of
/// leaving a silent gap.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "check-circle" => "✔",
        "checkbox-marked" => "▣",
        "checkbox-blank" => "□",
        "pencil" => "✎",
        _ => "?",
    }
}
