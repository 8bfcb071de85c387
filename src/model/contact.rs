use std::fmt;

use super::ids::Id;

/// A named entry in the address book.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: Id<Contact>,
    pub name: String,
    pub group: String,
    pub phone_numbers: Vec<String>,
}

impl Contact {
    pub fn create(name: String, group: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            group,
            phone_numbers: Vec::new(),
        }
    }

    pub fn add_phone_number(&mut self, number: String) {
        self.phone_numbers.push(number);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}, Group: {}", self.name, self.group)?;
        write!(f, "Phone Numbers: {}", self.phone_numbers.join(" "))
    }
}
