use crate::model::Contact;
use crate::store::NotebookStore;

/// Contacts whose name contains `query`, ignoring case.
pub fn search_by_name<'a>(store: &'a NotebookStore, query: &str) -> Vec<&'a Contact> {
    let lower = query.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }
    store
        .contacts()
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&lower))
        .collect()
}

/// Resolves a user-typed name to a single contact: the only partial match,
/// or else the first exact (case-insensitive) match.
pub fn find_one<'a>(store: &'a NotebookStore, query: &str) -> Option<&'a Contact> {
    let matches = search_by_name(store, query);
    match matches.len() {
        0 => None,
        1 => Some(matches[0]),
        _ => matches
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(query.trim())),
    }
}

pub fn in_group<'a>(store: &'a NotebookStore, group: &str) -> Vec<&'a Contact> {
    store
        .contacts()
        .iter()
        .filter(|c| c.group.eq_ignore_ascii_case(group.trim()))
        .collect()
}
