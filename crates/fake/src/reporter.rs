// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion reporting
//!
//! Assertions never decide how a failure surfaces; they hand every outcome
//! to a [`Reporter`]. The default panics, which is what `#[test]` functions
//! observe as a failure.

use crate::error::AssertionFailure;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Receives the outcome of every assertion
pub trait Reporter {
    fn report(&self, outcome: Result<(), AssertionFailure>);
}

/// Panics with the failure message
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[allow(clippy::panic)]
    fn report(&self, outcome: Result<(), AssertionFailure>) {
        if let Err(failure) = outcome {
            panic!("{failure}");
        }
    }
}

/// Collects failures instead of raising them
///
/// Clones share state, so a test can keep one handle and give the other to
/// the fake.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    checks: Rc<Cell<usize>>,
    failures: Rc<RefCell<Vec<AssertionFailure>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assertions reported so far
    pub fn checks(&self) -> usize {
        self.checks.get()
    }

    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.failures.borrow().clone()
    }

    /// True if every reported assertion passed
    pub fn all_passed(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    /// Drain collected failures, keeping the check count
    pub fn take_failures(&self) -> Vec<AssertionFailure> {
        std::mem::take(&mut *self.failures.borrow_mut())
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, outcome: Result<(), AssertionFailure>) {
        self.checks.set(self.checks.get() + 1);
        if let Err(failure) = outcome {
            self.failures.borrow_mut().push(failure);
        }
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
