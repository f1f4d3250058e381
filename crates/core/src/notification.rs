// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification capability and its value types

use crate::notifiable::Notifiable;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_newtype!(
    /// Name of a delivery medium (`mail`, `sms`, `slack`, ...)
    Channel
);

string_newtype!(
    /// Opaque locale tag; never validated
    Locale
);

string_newtype!(
    /// Identifier shared by every record produced from one notification instance
    NotificationId
);

/// Runtime kind of a notification, used as an index key
///
/// Identity is the Rust type; the short type name is carried for messages.
#[derive(Clone, Copy)]
pub struct NotificationKind {
    type_id: TypeId,
    name: &'static str,
}

impl NotificationKind {
    pub fn of<N: Notification>() -> Self {
        Self {
            type_id: TypeId::of::<N>(),
            name: N::kind_name(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for NotificationKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for NotificationKind {}

impl Hash for NotificationKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl PartialOrd for NotificationKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Name first so iteration reads alphabetically; TypeId breaks ties between
// same-named types from different modules.
impl Ord for NotificationKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(other.name)
            .then_with(|| self.type_id.cmp(&other.type_id))
    }
}

impl fmt::Debug for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotificationKind").field(&self.name).finish()
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A message that can be dispatched to notifiables
///
/// The dispatcher clones the instance once per send call, after assigning an
/// id, so every recipient of that call observes the same value.
pub trait Notification: Clone + 'static {
    /// Identifier, if one has been assigned
    fn id(&self) -> Option<&NotificationId>;

    /// Store an identifier; called at most once per instance by a dispatcher
    fn set_id(&mut self, id: NotificationId);

    /// Per-instance locale overriding the dispatcher default
    fn locale(&self) -> Option<&Locale> {
        None
    }

    /// Channels this notification should go out on for `notifiable`
    fn via(&self, notifiable: &dyn Notifiable) -> Vec<Channel>;

    /// Veto a single channel for a single notifiable
    fn should_send(&self, _notifiable: &dyn Notifiable, _channel: &Channel) -> bool {
        true
    }

    /// Kind name used in indexes and failure messages
    fn kind_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strip the module path (and generic arguments) from a Rust type name
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
