use crate::models::TagEntry;

/// Renders the entries as a single bracketed list, e.g. `[b: 10, a: 3]`.
pub fn render_entries(entries: &[TagEntry]) -> String {
    let items: Vec<String> = entries.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
