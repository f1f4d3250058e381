// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald-core: capability contracts for notification dispatch
//!
//! This crate provides:
//! - The `Notifiable` and `Notification` traits that dispatchers are generic over
//! - Value types for channels, locales, notification ids and kinds
//! - Recipient normalization (one notifiable or many)
//! - The `Dispatcher` surface production code sends through
//! - ID generation for notification instances

pub mod dispatch;
pub mod id;
pub mod notifiable;
pub mod notification;
pub mod recipients;

pub use dispatch::{ChannelDriver, Dispatcher};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use notifiable::{AnonymousNotifiable, Notifiable, RecipientKey};
pub use notification::{Channel, Locale, Notification, NotificationId, NotificationKind};
pub use recipients::Recipients;
