use notebook::error::NotebookError;
use notebook::persist::json_export;
use notebook::persist::text_format::{self, LoadOptions, NameMatching};
use notebook::store::NotebookStore;

fn strict() -> LoadOptions {
    LoadOptions {
        strict: true,
        ..LoadOptions::default()
    }
}

fn related_names(store: &NotebookStore, index: usize) -> Vec<String> {
    store.reminders()[index]
        .related_contacts
        .iter()
        .map(|&id| store.contact(id).unwrap().name.clone())
        .collect()
}

// ==========================================================================
// RENDER
// ==========================================================================

#[test]
fn render_empty_store_has_both_markers() {
    assert_eq!(text_format::render(&NotebookStore::new()), "[Contacts]\n[Reminders]\n");
}

#[test]
fn render_contact_without_numbers_is_followed_by_one_blank_line() {
    let mut store = NotebookStore::new();
    store.add_contact("Bob", "Work");
    assert_eq!(text_format::render(&store), "[Contacts]\nBob\nWork\n\n[Reminders]\n");
}

#[test]
fn render_joins_related_names_with_spaces() {
    let mut store = NotebookStore::new();
    let a = store.add_contact("Alice", "");
    let b = store.add_contact("Bob", "");
    store.add_reminder("Lunch", "noon", "", &[b, a]).unwrap();
    let text = text_format::render(&store);
    assert!(text.ends_with("[Reminders]\nLunch\nnoon\n\nBob Alice\n\n"));
}

// ==========================================================================
// PARSE
// ==========================================================================

#[test]
fn parse_two_contacts_and_one_reminder() {
    let text = "[Contacts]\nAlice\nFriends\n555-1\n\nBob\nWork\n\n[Reminders]\nCall Alice\n2024-01-01\nReminder text\nAlice\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();

    assert_eq!(store.contacts().len(), 2);
    assert_eq!(store.contacts()[0].phone_numbers, vec!["555-1"]);
    assert!(store.contacts()[1].phone_numbers.is_empty());
    assert_eq!(store.reminders().len(), 1);
    let reminder = &store.reminders()[0];
    assert_eq!(reminder.title, "Call Alice");
    assert_eq!(reminder.time, "2024-01-01");
    assert_eq!(reminder.explanation, "Reminder text");
    assert_eq!(related_names(&store, 0), vec!["Alice"]);
}

#[test]
fn parse_then_render_reproduces_the_file() {
    let text = "[Contacts]\nAlice\nFriends\n555-1\n\nBob\nWork\n\n[Reminders]\nCall Alice\n2024-01-01\nReminder text\nAlice\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(text_format::render(&store), text);
}

#[test]
fn one_blank_separator_follows_each_reminder() {
    let text = "[Contacts]\nAlice\n\n\n[Reminders]\nOne\nt1\ne1\nAlice\n\nTwo\nt2\n\n\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(store.contacts().len(), 1);
    let titles: Vec<&str> = store.reminders().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two"]);
    assert_eq!(store.reminders()[1].explanation, "");
    assert!(store.reminders()[1].related_contacts.is_empty());
}

#[test]
fn missing_reminder_separator_is_tolerated() {
    let text = "[Reminders]\nOne\nt1\ne1\n\n[Contacts]\nBob\nWork\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(store.reminders().len(), 1);
    assert_eq!(store.contacts()[0].name, "Bob");
    assert_eq!(store.contacts()[0].group, "Work");
}

#[test]
fn contact_with_empty_name_round_trips() {
    let mut store = NotebookStore::new();
    store.add_contact("", "Friends");
    let bob = store.add_contact("Bob", "Work");
    store.add_phone_number(bob, "555-2").unwrap();

    let text = text_format::render(&store);
    assert_eq!(text, "[Contacts]\n\nFriends\n\nBob\nWork\n555-2\n\n[Reminders]\n");

    let loaded = text_format::parse(&text, LoadOptions::default()).unwrap();
    let contacts: Vec<(&str, &str)> = loaded
        .contacts()
        .iter()
        .map(|c| (c.name.as_str(), c.group.as_str()))
        .collect();
    assert_eq!(contacts, vec![("", "Friends"), ("Bob", "Work")]);
    assert!(loaded.contacts()[0].phone_numbers.is_empty());
    assert_eq!(loaded.contacts()[1].phone_numbers, vec!["555-2"]);
}

#[test]
fn reminder_with_empty_title_round_trips() {
    let mut store = NotebookStore::new();
    let bob = store.add_contact("Bob", "Work");
    store.add_reminder("", "noon", "", &[bob]).unwrap();
    store.add_reminder("Second", "later", "text", &[]).unwrap();

    let loaded = text_format::parse(&text_format::render(&store), LoadOptions::default()).unwrap();
    let titles: Vec<&str> = loaded.reminders().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["", "Second"]);
    assert_eq!(loaded.reminders()[0].time, "noon");
    assert_eq!(related_names(&loaded, 0), vec!["Bob"]);
    assert_eq!(loaded.reminders()[1].explanation, "text");
}

#[test]
fn reminder_with_empty_explanation_keeps_its_related_line() {
    let text = "[Contacts]\nAlice\n\n\n[Reminders]\nCall\nnoon\n\nAlice\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(store.reminders().len(), 1);
    assert_eq!(related_names(&store, 0), vec!["Alice"]);
}

#[test]
fn lines_before_any_marker_are_ignored() {
    let text = "stray\n[Contacts]\nAlice\nFriends\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(store.contacts().len(), 1);
    assert_eq!(store.contacts()[0].name, "Alice");
}

#[test]
fn crlf_line_endings_are_accepted() {
    let text = "[Contacts]\r\nAlice\r\nFriends\r\n555-1\r\n\r\n[Reminders]\r\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(store.contacts()[0].group, "Friends");
    assert_eq!(store.contacts()[0].phone_numbers, vec!["555-1"]);
}

#[test]
fn phone_list_may_end_at_end_of_input() {
    let store = text_format::parse("[Contacts]\nAlice\nFriends\n555-1", strict()).unwrap();
    assert_eq!(store.contacts()[0].phone_numbers, vec!["555-1"]);
}

#[test]
fn lenient_parse_fills_truncated_reminder() {
    let store = text_format::parse("[Reminders]\nCall\n2024", LoadOptions::default()).unwrap();
    let reminder = &store.reminders()[0];
    assert_eq!(reminder.time, "2024");
    assert_eq!(reminder.explanation, "");
    assert!(reminder.related_contacts.is_empty());
}

#[test]
fn strict_parse_reports_truncated_reminder() {
    let err = text_format::parse("[Reminders]\nCall\n2024\n", strict()).unwrap_err();
    match err {
        NotebookError::MalformedRecord { line, reason } => {
            assert_eq!(line, 4);
            assert!(reason.contains("explanation"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_parse_reports_contact_without_group() {
    let err = text_format::parse("[Contacts]\nAlice", strict()).unwrap_err();
    assert!(matches!(err, NotebookError::MalformedRecord { line: 3, .. }));
}

#[test]
fn sections_may_repeat() {
    let text = "[Contacts]\nAlice\n\n\n[Reminders]\nA\nt\n\nAlice\n\n[Contacts]\nBob\n\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(store.contacts().len(), 2);
    assert_eq!(store.reminders().len(), 1);
}

// ==========================================================================
// NAME RESOLUTION
// ==========================================================================

#[test]
fn substring_matching_links_contained_names() {
    let text = "[Contacts]\nAn\n\n\nAnna\n\n\n[Reminders]\nVisit\nSunday\n\nAnna\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert_eq!(related_names(&store, 0), vec!["An", "Anna"]);
}

#[test]
fn exact_matching_links_whole_tokens_only() {
    let text = "[Contacts]\nAn\n\n\nAnna\n\n\n[Reminders]\nVisit\nSunday\n\nAnna\n\n";
    let options = LoadOptions {
        name_matching: NameMatching::Exact,
        ..LoadOptions::default()
    };
    let store = text_format::parse(text, options).unwrap();
    assert_eq!(related_names(&store, 0), vec!["Anna"]);
}

#[test]
fn exact_matching_links_names_containing_spaces() {
    let mut store = NotebookStore::new();
    let anna = store.add_contact("Anna Karenina", "Books");
    let bob = store.add_contact("Bob", "");
    store.add_reminder("Read", "tonight", "", &[anna, bob]).unwrap();

    let options = LoadOptions {
        name_matching: NameMatching::Exact,
        ..LoadOptions::default()
    };
    let loaded = text_format::parse(&text_format::render(&store), options).unwrap();
    assert_eq!(related_names(&loaded, 0), vec!["Anna Karenina", "Bob"]);
}

#[test]
fn exact_matching_requires_space_boundaries() {
    let mut store = NotebookStore::new();
    store.add_contact("Ann", "");
    let ids = text_format::resolve_related(&store, "Anna Joanne", NameMatching::Exact);
    assert!(ids.is_empty());
    let ids = text_format::resolve_related(&store, "Joanne Ann", NameMatching::Exact);
    assert_eq!(ids.len(), 1);
}

#[test]
fn exact_matching_picks_first_duplicate() {
    let mut store = NotebookStore::new();
    let first = store.add_contact("Sam", "A");
    store.add_contact("Sam", "B");
    let ids = text_format::resolve_related(&store, "Sam Sam", NameMatching::Exact);
    assert_eq!(ids, vec![first]);
}

#[test]
fn substring_matching_links_duplicates_in_contact_order() {
    let mut store = NotebookStore::new();
    let first = store.add_contact("Sam", "A");
    let second = store.add_contact("Sam", "B");
    let ids = text_format::resolve_related(&store, "Sam", NameMatching::Substring);
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn empty_name_is_contained_in_every_line() {
    let mut store = NotebookStore::new();
    let nameless = store.add_contact("", "");
    assert_eq!(
        text_format::resolve_related(&store, "Bob", NameMatching::Substring),
        vec![nameless]
    );
    assert!(text_format::resolve_related(&store, "Bob", NameMatching::Exact).is_empty());
}

#[test]
fn reminders_only_see_contacts_loaded_before_them() {
    let text = "[Reminders]\nEarly\nnow\n\nZoe\n\n[Contacts]\nZoe\n\n\n";
    let store = text_format::parse(text, LoadOptions::default()).unwrap();
    assert!(store.reminders()[0].related_contacts.is_empty());
}

// ==========================================================================
// JSON EXPORT
// ==========================================================================

#[test]
fn json_export_uses_contact_names() {
    let mut store = NotebookStore::new();
    let alice = store.add_contact("Alice", "Friends");
    store.add_phone_number(alice, "555-1").unwrap();
    store.add_reminder("Call Alice", "2024-01-01", "", &[alice]).unwrap();

    let json = json_export::to_json(&store).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["contacts"][0]["name"], "Alice");
    assert_eq!(value["contacts"][0]["phone_numbers"][0], "555-1");
    assert_eq!(value["reminders"][0]["title"], "Call Alice");
    assert_eq!(value["reminders"][0]["related_contacts"][0], "Alice");
}

#[test]
fn json_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");
    json_export::export_json(&NotebookStore::new(), &path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value["contacts"].as_array().unwrap().is_empty());
    assert!(value["reminders"].as_array().unwrap().is_empty());
}
