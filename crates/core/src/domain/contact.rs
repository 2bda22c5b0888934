// Contact Domain Model
//
// The dashboard's visited-contacts cards are backed by a fixed demo
// data set; only the orderings are computed.

use serde::{Deserialize, Serialize};

/// A contact shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub visits: i64,
    pub is_company: bool,
}

impl Contact {
    pub fn person(name: impl Into<String>, visits: i64) -> Self {
        Self {
            name: name.into(),
            visits,
            is_company: false,
        }
    }

    pub fn company(name: impl Into<String>, visits: i64) -> Self {
        Self {
            name: name.into(),
            visits,
            is_company: true,
        }
    }

    /// Badge text: first letter of each word, uppercased, at most two.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// The demo contact pool backing both dashboard cards.
pub fn demo_contacts() -> Vec<Contact> {
    vec![
        Contact::person("Marie Jones", 10),
        Contact::company("Acme Corp", 10),
        Contact::person("Vivian Casey", 10),
        Contact::person("Lucia Bianchi", 9),
        Contact::person("Noah Park", 10),
    ]
}

/// Contacts ordered by visits descending. Ties keep their pool order.
pub fn most_visited(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(|a, b| b.visits.cmp(&a.visits));
    sorted
}

/// Contacts ordered by visits ascending. Ties keep their pool order.
pub fn least_visited(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(|a, b| a.visits.cmp(&b.visits));
    sorted
}
