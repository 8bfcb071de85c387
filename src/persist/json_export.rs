use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::NotebookResult;
use crate::store::NotebookStore;

#[derive(Debug, Serialize)]
struct NotebookExport<'a> {
    contacts: Vec<ContactExport<'a>>,
    reminders: Vec<ReminderExport<'a>>,
}

#[derive(Debug, Serialize)]
struct ContactExport<'a> {
    name: &'a str,
    group: &'a str,
    phone_numbers: &'a [String],
}

#[derive(Debug, Serialize)]
struct ReminderExport<'a> {
    title: &'a str,
    time: &'a str,
    explanation: &'a str,
    /// Names rather than handles; handles do not outlive the session.
    related_contacts: Vec<&'a str>,
}

/// Pretty-printed JSON view of the notebook.
pub fn to_json(store: &NotebookStore) -> NotebookResult<String> {
    let export = NotebookExport {
        contacts: store
            .contacts()
            .iter()
            .map(|c| ContactExport {
                name: &c.name,
                group: &c.group,
                phone_numbers: &c.phone_numbers,
            })
            .collect(),
        reminders: store
            .reminders()
            .iter()
            .map(|r| ReminderExport {
                title: &r.title,
                time: &r.time,
                explanation: &r.explanation,
                related_contacts: r
                    .related_contacts
                    .iter()
                    .filter_map(|&id| store.contact(id))
                    .map(|c| c.name.as_str())
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

pub fn export_json(store: &NotebookStore, path: &Path) -> NotebookResult<()> {
    let json = to_json(store)?;
    fs::write(path, json)?;
    log::info!("Exported notebook to {}", path.display());
    Ok(())
}
