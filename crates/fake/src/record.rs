// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured send events

use herald_core::{
    Channel, Locale, Notifiable, Notification, NotificationId, NotificationKind, RecipientKey,
};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// One captured (recipient, notification) send event
///
/// Records are immutable once built. Clones share the notification and
/// recipient.
#[derive(Clone)]
pub struct NotificationRecord {
    kind: NotificationKind,
    notification_id: NotificationId,
    notification: Rc<dyn Any>,
    recipient: Rc<dyn Notifiable>,
    recipient_key: RecipientKey,
    channels: Vec<Channel>,
    locale: Option<Locale>,
}

impl NotificationRecord {
    pub(crate) fn new(
        kind: NotificationKind,
        notification_id: NotificationId,
        notification: Rc<dyn Any>,
        recipient: Rc<dyn Notifiable>,
        recipient_key: RecipientKey,
        channels: Vec<Channel>,
        locale: Option<Locale>,
    ) -> Self {
        Self {
            kind,
            notification_id,
            notification,
            recipient,
            recipient_key,
            channels,
            locale,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn notification_id(&self) -> &NotificationId {
        &self.notification_id
    }

    /// The recorded notification, if it is an `N`
    pub fn notification<N: Notification>(&self) -> Option<Rc<N>> {
        Rc::clone(&self.notification).downcast::<N>().ok()
    }

    pub fn recipient(&self) -> &dyn Notifiable {
        self.recipient.as_ref()
    }

    /// Shared handle to the recipient, usable wherever `Recipients` are taken
    pub fn shared_recipient(&self) -> Rc<dyn Notifiable> {
        Rc::clone(&self.recipient)
    }

    pub fn recipient_key(&self) -> &RecipientKey {
        &self.recipient_key
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// True if this record and `other` came from the same notification instance
    /// in the same send call
    pub fn same_notification(&self, other: &NotificationRecord) -> bool {
        Rc::ptr_eq(&self.notification, &other.notification)
    }

    pub(crate) fn typed<N: Notification>(&self) -> Option<Sent<N>> {
        Some(Sent {
            notification: self.notification::<N>()?,
            record: self.clone(),
        })
    }
}

impl fmt::Debug for NotificationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRecord")
            .field("kind", &self.kind)
            .field("notification_id", &self.notification_id)
            .field("recipient", &self.recipient_key)
            .field("channels", &self.channels)
            .field("locale", &self.locale)
            .finish()
    }
}

/// A record whose notification has been downcast to its concrete type
#[derive(Clone)]
pub struct Sent<N> {
    notification: Rc<N>,
    record: NotificationRecord,
}

impl<N> Sent<N> {
    pub fn notification(&self) -> &N {
        &self.notification
    }

    pub fn notification_id(&self) -> &NotificationId {
        self.record.notification_id()
    }

    pub fn recipient(&self) -> &dyn Notifiable {
        self.record.recipient()
    }

    pub fn recipient_key(&self) -> &RecipientKey {
        self.record.recipient_key()
    }

    pub fn channels(&self) -> &[Channel] {
        self.record.channels()
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.record.locale()
    }

    pub fn record(&self) -> &NotificationRecord {
        &self.record
    }
}

impl<N> fmt::Debug for Sent<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sent").field(&self.record).finish()
    }
}
