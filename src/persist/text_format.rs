//! The line-oriented data file.
//!
//! ```text
//! [Contacts]
//! <name>
//! <group>
//! <phone>...
//! <blank>
//! [Reminders]
//! <title>
//! <time>
//! <explanation>
//! <related contact names, space separated>
//! <blank>
//! ```
//!
//! Nothing is escaped. A value containing a line break, or a name equal to
//! a section marker, cannot be represented.

use std::iter::Peekable;
use std::str::Lines;

use crate::error::{NotebookError, NotebookResult};
use crate::model::{Contact, Id, Reminder};
use crate::store::NotebookStore;

pub const CONTACTS_MARKER: &str = "[Contacts]";
pub const REMINDERS_MARKER: &str = "[Reminders]";

/// How the related-contacts line of a reminder is resolved to contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatching {
    /// Every contact whose name occurs anywhere in the line is linked, so
    /// "An" matches a line reading "Anna".
    #[default]
    Substring,
    /// A contact is linked when its whole name appears between spaces or
    /// line ends, so "An" does not match "Anna" but "Anna Karenina" does
    /// match. Only the first contact of each name is linked; empty names
    /// never match.
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Report records cut short by end of input instead of filling the
    /// missing lines with empty strings.
    pub strict: bool,
    pub name_matching: NameMatching,
}

/// Renders the whole notebook. Every line, including the blank line after
/// each record, ends with `\n`.
pub fn render(store: &NotebookStore) -> String {
    let mut out = String::new();

    push_line(&mut out, CONTACTS_MARKER);
    for contact in store.contacts() {
        push_line(&mut out, &contact.name);
        push_line(&mut out, &contact.group);
        for number in &contact.phone_numbers {
            push_line(&mut out, number);
        }
        out.push('\n');
    }

    push_line(&mut out, REMINDERS_MARKER);
    for reminder in store.reminders() {
        push_line(&mut out, &reminder.title);
        push_line(&mut out, &reminder.time);
        push_line(&mut out, &reminder.explanation);
        let names: Vec<&str> = reminder
            .related_contacts
            .iter()
            .filter_map(|&id| store.contact(id))
            .map(|c| c.name.as_str())
            .collect();
        push_line(&mut out, &names.join(" "));
        out.push('\n');
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Contacts,
    Reminders,
}

/// Numbered line reader. Line numbers are 1-based.
struct Cursor<'a> {
    lines: Peekable<Lines<'a>>,
    line_no: usize,
    strict: bool,
}

impl<'a> Cursor<'a> {
    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line)
    }

    /// Consumes the next line only if it is blank.
    fn skip_blank(&mut self) {
        if matches!(self.lines.peek(), Some(line) if line.is_empty()) {
            self.next_line();
        }
    }

    /// Reads the next positional field of a record, whatever it contains.
    fn field(&mut self, record: &str, field: &str) -> NotebookResult<&'a str> {
        match self.next_line() {
            Some(line) => Ok(line),
            None if self.strict => Err(NotebookError::MalformedRecord {
                line: self.line_no + 1,
                reason: format!("{} ends before its {} line", record, field),
            }),
            None => Ok(""),
        }
    }
}

/// Parses a data file into a fresh store.
///
/// Inside a section every line other than a marker starts a record, even an
/// empty one. Each record consumes its own trailing blank line. Lines before
/// the first section marker are ignored.
pub fn parse(input: &str, options: LoadOptions) -> NotebookResult<NotebookStore> {
    let mut store = NotebookStore::new();
    let mut cursor = Cursor {
        lines: input.lines().peekable(),
        line_no: 0,
        strict: options.strict,
    };
    let mut section = Section::None;

    while let Some(line) = cursor.next_line() {
        match line {
            CONTACTS_MARKER => section = Section::Contacts,
            REMINDERS_MARKER => section = Section::Reminders,
            first => match section {
                Section::None => {
                    log::debug!("Skipping line {} outside any section", cursor.line_no);
                }
                Section::Contacts => {
                    let contact = parse_contact(&mut cursor, first)?;
                    store.insert_contact(contact);
                }
                Section::Reminders => {
                    let reminder = parse_reminder(&mut cursor, first, &store, options.name_matching)?;
                    store.insert_reminder(reminder);
                }
            },
        }
    }

    Ok(store)
}

fn parse_contact(cursor: &mut Cursor<'_>, name: &str) -> NotebookResult<Contact> {
    let group = cursor.field("contact", "group")?;
    let mut contact = Contact::create(name.to_string(), group.to_string());
    // The phone list runs to the next blank line, which is consumed.
    while let Some(number) = cursor.next_line() {
        if number.is_empty() {
            break;
        }
        contact.add_phone_number(number.to_string());
    }
    Ok(contact)
}

fn parse_reminder(
    cursor: &mut Cursor<'_>,
    title: &str,
    store: &NotebookStore,
    matching: NameMatching,
) -> NotebookResult<Reminder> {
    let time = cursor.field("reminder", "time")?;
    let explanation = cursor.field("reminder", "explanation")?;
    let related_line = cursor.field("reminder", "related contacts")?;
    // Separator written after every reminder; tolerated when missing.
    cursor.skip_blank();

    let mut reminder = Reminder::create(title.to_string(), time.to_string(), explanation.to_string());
    for contact_id in resolve_related(store, related_line, matching) {
        reminder.add_related_contact(contact_id);
    }
    Ok(reminder)
}

/// Resolves a related-contacts line against the contacts loaded so far.
pub fn resolve_related(
    store: &NotebookStore,
    related_line: &str,
    matching: NameMatching,
) -> Vec<Id<Contact>> {
    match matching {
        NameMatching::Substring => store
            .contacts()
            .iter()
            .filter(|c| related_line.contains(c.name.as_str()))
            .map(|c| c.id)
            .collect(),
        NameMatching::Exact => {
            let mut ids: Vec<Id<Contact>> = Vec::new();
            let mut linked: Vec<&str> = Vec::new();
            for contact in store.contacts() {
                let name = contact.name.as_str();
                if name.is_empty() || linked.contains(&name) {
                    continue;
                }
                if contains_whole_name(related_line, name) {
                    linked.push(name);
                    ids.push(contact.id);
                }
            }
            ids
        }
    }
}

/// True if `name` occurs in `line` bounded by spaces or the line ends.
/// Names may themselves contain spaces.
fn contains_whole_name(line: &str, name: &str) -> bool {
    line.match_indices(name).any(|(start, _)| {
        let end = start + name.len();
        let before_ok = start == 0 || line[..start].ends_with(' ');
        let after_ok = end == line.len() || line[end..].starts_with(' ');
        before_ok && after_ok
    })
}
