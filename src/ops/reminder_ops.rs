use crate::error::NotebookResult;
use crate::model::{Contact, Id, Reminder};
use crate::store::NotebookStore;
use crate::validation;

pub fn add_reminder(
    store: &mut NotebookStore,
    title: &str,
    time: &str,
    explanation: &str,
    related: &[Id<Contact>],
) -> NotebookResult<Id<Reminder>> {
    let valid_title = validation::required_line(title, "title")?;
    let valid_time = validation::storable_line(time, "time")?;
    let valid_explanation = validation::storable_line(explanation, "explanation")?;
    store.add_reminder(&valid_title, &valid_time, &valid_explanation, related)
}
