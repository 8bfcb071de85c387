use super::contact::Contact;
use super::ids::Id;

/// A titled note with a free-form time and links to related contacts.
///
/// `time` is kept as text; nothing parses or orders it.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: Id<Reminder>,
    pub title: String,
    pub time: String,
    pub explanation: String,
    /// Non-owning links into the store's contact collection.
    pub related_contacts: Vec<Id<Contact>>,
}

impl Reminder {
    pub fn create(title: String, time: String, explanation: String) -> Self {
        Self {
            id: Id::generate(),
            title,
            time,
            explanation,
            related_contacts: Vec::new(),
        }
    }

    /// Links a contact. Linking the same contact twice is a no-op.
    pub fn add_related_contact(&mut self, contact_id: Id<Contact>) {
        if !self.related_contacts.contains(&contact_id) {
            self.related_contacts.push(contact_id);
        }
    }

    pub fn is_related_to(&self, contact_id: Id<Contact>) -> bool {
        self.related_contacts.contains(&contact_id)
    }
}
