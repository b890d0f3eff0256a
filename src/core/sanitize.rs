// src/core/sanitize.rs

/// Team headings come out as `"Research,"` or `" Policy "`.
/// Strip surrounding whitespace, then surrounding commas. Nothing else:
/// `"Research ,"` keeps its inner space and `","` becomes an empty label.
pub fn clean_team_label(raw: &str) -> String {
    s!(raw.trim().trim_matches(','))
}
