use std::io::{self, Write};

use crate::model::*;
use crate::queries::contact_queries;
use crate::session::Session;

pub struct CLIContext {
    pub session: Session,
}

impl CLIContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Find a contact by name query. Prints a message if not found or ambiguous.
    pub fn find_contact(&self, args: &str) -> Option<Id<Contact>> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(contact) = contact_queries::find_one(&self.session.store, query) {
            return Some(contact.id);
        }

        let matches = contact_queries::search_by_name(&self.session.store, query);
        if matches.is_empty() {
            println!("No contact found matching '{}'", query);
        } else {
            println!("Multiple matches found:");
            for c in &matches {
                println!("  {}", c.name);
            }
            println!("Please be more specific.");
        }
        None
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::NotebookError) {
        println!("Error: {}", e);
    }
}
