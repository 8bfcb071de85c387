use std::path::Path;

use crate::error::{NotebookError, NotebookResult};
use crate::model::{Contact, Id, Reminder};
use crate::persist::file_io;
use crate::persist::text_format::LoadOptions;

/// What a successful load brought into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub contacts: usize,
    pub reminders: usize,
}

/// In-memory notebook: contacts and reminders in insertion order.
///
/// Reminders refer to contacts through `Id<Contact>` handles. Contacts are
/// never removed, so every handle a reminder holds stays resolvable.
#[derive(Debug, Clone, Default)]
pub struct NotebookStore {
    contacts: Vec<Contact>,
    reminders: Vec<Reminder>,
}

impl NotebookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new contact with no phone numbers. Names are not
    /// de-duplicated.
    pub fn add_contact(&mut self, name: &str, group: &str) -> Id<Contact> {
        let contact = Contact::create(name.to_string(), group.to_string());
        let id = contact.id;
        self.contacts.push(contact);
        log::info!("Contact added: {}", name);
        id
    }

    pub fn add_phone_number(&mut self, contact_id: Id<Contact>, number: &str) -> NotebookResult<()> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or_else(|| contact_not_found(contact_id))?;
        contact.add_phone_number(number.to_string());
        log::info!("Phone number added to {}: {}", contact.name, number);
        Ok(())
    }

    /// Stores a new reminder linked to `related`. Every handle must belong
    /// to a contact in this store; repeated handles are linked once.
    pub fn add_reminder(
        &mut self,
        title: &str,
        time: &str,
        explanation: &str,
        related: &[Id<Contact>],
    ) -> NotebookResult<Id<Reminder>> {
        let mut reminder = Reminder::create(title.to_string(), time.to_string(), explanation.to_string());
        for &contact_id in related {
            if self.contact(contact_id).is_none() {
                return Err(contact_not_found(contact_id));
            }
            reminder.add_related_contact(contact_id);
        }
        let id = reminder.id;
        self.reminders.push(reminder);
        log::info!("Reminder added: {}", title);
        Ok(id)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn contact(&self, id: Id<Contact>) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn reminder(&self, id: Id<Reminder>) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty() && self.reminders.is_empty()
    }

    /// Writes the notebook to `path` in the line format. On failure the
    /// file previously at `path`, if any, is left as it was.
    pub fn save(&self, path: &Path) -> NotebookResult<()> {
        file_io::save(self, path)
    }

    pub fn load(&mut self, path: &Path) -> NotebookResult<LoadSummary> {
        self.load_with(path, LoadOptions::default())
    }

    /// Replaces the contents of the store with the notebook read from
    /// `path`. On any error the store is left unchanged.
    pub fn load_with(&mut self, path: &Path, options: LoadOptions) -> NotebookResult<LoadSummary> {
        let loaded = file_io::load(path, options)?;
        let summary = LoadSummary {
            contacts: loaded.contacts.len(),
            reminders: loaded.reminders.len(),
        };
        *self = loaded;
        log::info!(
            "Loaded {} contacts and {} reminders from {}",
            summary.contacts,
            summary.reminders,
            path.display()
        );
        Ok(summary)
    }

    // Parser entry points: records read from a file are not logged one by one.
    pub(crate) fn insert_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub(crate) fn insert_reminder(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
    }
}

fn contact_not_found(id: Id<Contact>) -> NotebookError {
    NotebookError::NotFound {
        entity_type: "Contact".into(),
        id: id.to_string(),
    }
}
