//! Per-container request generations.
//!
//! Each load takes a ticket for its container. Only the newest ticket may
//! write to the container, so an older response that arrives late is dropped.

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: String,
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: RefCell<HashMap<String, u64>>,
}

impl RequestTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, key: &str) -> Ticket {
        let mut latest = self.latest.borrow_mut();
        let generation = latest.entry(key.to_string()).or_insert(0);
        *generation += 1;
        Ticket {
            key: key.to_string(),
            generation: *generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.borrow().get(&ticket.key).copied() == Some(ticket.generation)
    }
}
