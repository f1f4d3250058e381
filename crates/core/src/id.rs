// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification ID generation

use crate::notification::NotificationId;
use std::cell::Cell;
use std::rc::Rc;

/// Generates unique notification identifiers
pub trait IdGen {
    fn next_id(&self) -> NotificationId;
}

/// UUID v4 generator, the default for dispatched notifications
#[derive(Clone, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next_id(&self) -> NotificationId {
        NotificationId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Sequential generator for tests that need predictable ids
///
/// Clones share one counter.
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Rc<Cell<u64>>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Rc::new(Cell::new(1)),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("notification")
    }
}

impl IdGen for SequentialIdGen {
    fn next_id(&self) -> NotificationId {
        let n = self.counter.get();
        self.counter.set(n + 1);
        NotificationId::new(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
