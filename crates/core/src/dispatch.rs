// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch surface production code sends notifications through

use crate::notification::{Locale, Notification};
use crate::recipients::Recipients;

/// A concrete delivery channel (mail transport, SMS gateway, ...)
pub trait ChannelDriver {
    fn name(&self) -> &str;
}

/// Sends notifications to one or more notifiables
///
/// `send` may defer delivery; `send_now` must not. Implementations assign an
/// id to `notification` if it has none, so callers can correlate afterwards.
pub trait Dispatcher {
    fn send<N: Notification>(&self, recipients: impl Into<Recipients>, notification: &mut N);

    fn send_now<N: Notification>(&self, recipients: impl Into<Recipients>, notification: &mut N);

    /// Look up the driver registered for a channel name
    fn channel(&self, name: &str) -> Option<&dyn ChannelDriver>;

    /// Set the locale used when a notification does not carry its own
    fn locale(&self, locale: impl Into<Locale>) -> &Self;
}
