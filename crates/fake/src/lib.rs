// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald-fake: a recording stand-in for notification dispatch
//!
//! Swap [`NotificationFake`] in wherever production code takes a
//! [`Dispatcher`](herald_core::Dispatcher). Sends are indexed by recipient
//! and notification kind; tests then query or assert on them:
//!
//! ```ignore
//! let fake = NotificationFake::new();
//! fake.send(&user, &mut WelcomeEmail::new());
//!
//! fake.assert_sent_to::<WelcomeEmail>(&user);
//! fake.assert_sent_times::<WelcomeEmail>(1);
//! fake.assert_not_sent::<PasswordReset>();
//! ```
//!
//! Failed assertions panic by default; see [`Reporter`] to collect them
//! instead. Everything here is single-threaded.

mod assert;
pub mod config;
pub mod error;
mod fake;
mod query;
pub mod record;
pub mod reporter;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use config::{FakeConfig, IdStrategy};
pub use error::{AssertionFailure, ConfigError};
pub use fake::NotificationFake;
pub use record::{NotificationRecord, Sent};
pub use reporter::{CollectingReporter, PanicReporter, Reporter};
pub use store::RecordStore;
