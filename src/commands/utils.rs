use super::models::ListKind;
use crate::utils::config::{COLOR_SCALES, TEMPLATES, TIME_FORMATS};

/// Lines of a predefined table, sorted by name as `NAME - VALUE`
pub fn list_lines(kind: ListKind) -> Vec<String> {
    let table = match kind {
        ListKind::Templates => TEMPLATES,
        ListKind::TimeFormats => TIME_FORMATS,
        ListKind::Scales => COLOR_SCALES,
    };

    let mut entries = table.to_vec();
    entries.sort_by_key(|(name, _)| *name);
    entries
        .into_iter()
        .map(|(name, value)| format!("{} - {}", name, value))
        .collect()
}

/// Display a predefined table
pub fn display_list(kind: ListKind) {
    for line in list_lines(kind) {
        println!("{}", line);
    }
}
