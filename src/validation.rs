use crate::error::{NotebookError, NotebookResult};
use crate::persist::text_format::{CONTACTS_MARKER, REMINDERS_MARKER};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> NotebookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(NotebookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a value can be written as one line of the data file:
/// no line breaks, and not equal to a section marker.
/// Returns the trimmed string on success; it may be empty.
pub fn storable_line(value: &str, field: &str) -> NotebookResult<String> {
    let trimmed = value.trim();
    if trimmed.contains(['\n', '\r']) {
        return Err(NotebookError::MultiLine {
            field: field.to_string(),
        });
    }
    if trimmed == CONTACTS_MARKER || trimmed == REMINDERS_MARKER {
        return Err(NotebookError::ReservedLine {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Both checks: a non-blank value that fits on one data-file line.
pub fn required_line(value: &str, field: &str) -> NotebookResult<String> {
    let value = non_blank(value, field)?;
    storable_line(&value, field)
}
