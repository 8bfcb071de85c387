use crate::error::NotebookResult;
use crate::model::{Contact, Id};
use crate::store::NotebookStore;
use crate::validation;

/// Adds a contact from user input, optionally with a first phone number.
pub fn add_contact(
    store: &mut NotebookStore,
    name: &str,
    group: &str,
    phone: Option<&str>,
) -> NotebookResult<Id<Contact>> {
    let valid_name = validation::required_line(name, "name")?;
    let valid_group = validation::storable_line(group, "group")?;
    let valid_phone = phone
        .map(|p| validation::required_line(p, "phone number"))
        .transpose()?;

    let id = store.add_contact(&valid_name, &valid_group);
    if let Some(number) = valid_phone {
        store.add_phone_number(id, &number)?;
    }
    Ok(id)
}

pub fn add_phone(store: &mut NotebookStore, contact_id: Id<Contact>, number: &str) -> NotebookResult<()> {
    // A blank number would end the phone list when the file is read back.
    let valid_number = validation::required_line(number, "phone number")?;
    store.add_phone_number(contact_id, &valid_number)
}
