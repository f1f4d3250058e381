// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recipient capability

use crate::notification::{short_type_name, Channel};
use std::collections::BTreeMap;
use std::fmt;

/// An entity notifications can be sent to
pub trait Notifiable: 'static {
    /// Type discriminator; first level of a dispatcher's record index
    ///
    /// Defaults to the fully qualified type name, generic arguments included,
    /// so distinct types never share index entries.
    fn notifiable_type(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Stable identity within the type
    fn notifiable_key(&self) -> String;

    /// Delivery address for `channel`, if this notifiable has one
    fn route_for(&self, _channel: &Channel) -> Option<String> {
        None
    }
}

/// `(type, key)` pair identifying one notifiable
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipientKey {
    pub recipient_type: String,
    pub recipient_id: String,
}

impl RecipientKey {
    pub fn new(recipient_type: impl Into<String>, recipient_id: impl Into<String>) -> Self {
        Self {
            recipient_type: recipient_type.into(),
            recipient_id: recipient_id.into(),
        }
    }

    /// Resolve the key of a notifiable
    pub fn of<R: Notifiable + ?Sized>(recipient: &R) -> Self {
        Self::new(recipient.notifiable_type(), recipient.notifiable_key())
    }

    /// Type name without module path, as shown in messages
    pub fn type_name(&self) -> &str {
        short_type_name(&self.recipient_type)
    }
}

impl fmt::Display for RecipientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.recipient_id.is_empty() {
            f.write_str(self.type_name())
        } else {
            write!(f, "{}#{}", self.type_name(), self.recipient_id)
        }
    }
}

/// Ad-hoc recipient addressed only by per-channel routes
///
/// Every anonymous notifiable shares one key, so all on-demand sends are
/// filed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnonymousNotifiable {
    routes: BTreeMap<Channel, String>,
}

impl AnonymousNotifiable {
    pub const TYPE: &'static str = "AnonymousNotifiable";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the address used for `channel`
    pub fn route(mut self, channel: impl Into<Channel>, address: impl Into<String>) -> Self {
        self.routes.insert(channel.into(), address.into());
        self
    }

    pub fn routes(&self) -> &BTreeMap<Channel, String> {
        &self.routes
    }
}

impl Notifiable for AnonymousNotifiable {
    fn notifiable_type(&self) -> &str {
        Self::TYPE
    }

    fn notifiable_key(&self) -> String {
        String::new()
    }

    fn route_for(&self, channel: &Channel) -> Option<String> {
        self.routes.get(channel).cloned()
    }
}

#[cfg(test)]
#[path = "notifiable_tests.rs"]
mod tests;
