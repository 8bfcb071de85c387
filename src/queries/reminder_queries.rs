use crate::model::{Contact, Id, Reminder};
use crate::store::NotebookStore;

/// The contacts a reminder links to, in link order.
pub fn related_contacts<'a>(store: &'a NotebookStore, reminder: &Reminder) -> Vec<&'a Contact> {
    reminder
        .related_contacts
        .iter()
        .filter_map(|&id| store.contact(id))
        .collect()
}

pub fn reminders_for(store: &NotebookStore, contact_id: Id<Contact>) -> Vec<&Reminder> {
    store
        .reminders()
        .iter()
        .filter(|r| r.is_related_to(contact_id))
        .collect()
}
