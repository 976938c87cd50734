/// Illustration style phrase for a subject tag.
///
/// Unrecognized subjects fall back to a generic educational style.
pub fn style_for_subject(subject: &str) -> &'static str {
    match subject.to_lowercase().as_str() {
        "biology" => "a clean scientific diagram with soft colors",
        "chemistry" => "a minimalist lab illustration with labeled elements",
        "physics" => "a schematic drawing with arrows and simple shapes",
        "math" | "mathematics" => "a chalkboard sketch with geometric figures",
        "history" => "a muted vintage illustration in an engraving style",
        "geography" => "a flat map-style illustration with soft earth tones",
        "literature" => "a warm storybook watercolor illustration",
        _ => "a simple educational illustration",
    }
}
