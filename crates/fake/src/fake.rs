// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording dispatcher
//!
//! [`NotificationFake`] stands in for a real [`Dispatcher`]: every send is
//! captured in a [`RecordStore`] and nothing is delivered. Queries live in
//! `query.rs`, assertions in `assert.rs`.

use crate::config::FakeConfig;
use crate::record::NotificationRecord;
use crate::reporter::{PanicReporter, Reporter};
use crate::store::RecordStore;
use herald_core::{
    Channel, ChannelDriver, Dispatcher, IdGen, Locale, Notification, NotificationId,
    NotificationKind, RecipientKey, Recipients,
};
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// In-memory dispatcher that records instead of delivering
///
/// Single-threaded: state lives in `RefCell`s and the fake is `!Send`.
pub struct NotificationFake {
    pub(crate) store: RefCell<RecordStore>,
    locale: RefCell<Option<Locale>>,
    ids: Box<dyn IdGen>,
    pub(crate) reporter: Box<dyn Reporter>,
}

impl NotificationFake {
    pub fn new() -> Self {
        Self::with_config(FakeConfig::default())
    }

    pub fn with_config(config: FakeConfig) -> Self {
        Self {
            store: RefCell::new(RecordStore::new()),
            ids: config.id_gen(),
            locale: RefCell::new(config.default_locale),
            reporter: Box::new(PanicReporter),
        }
    }

    /// Route assertion outcomes to `reporter` instead of panicking
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn with_id_gen(mut self, ids: impl IdGen + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Record `notification` for each recipient
    pub fn send<N: Notification>(&self, recipients: impl Into<Recipients>, notification: &mut N) {
        self.record(recipients.into(), notification, None);
    }

    /// Same as [`send`](Self::send); the fake never queues
    pub fn send_now<N: Notification>(
        &self,
        recipients: impl Into<Recipients>,
        notification: &mut N,
    ) {
        self.record(recipients.into(), notification, None);
    }

    /// Record with an explicit channel list instead of asking `via`
    pub fn send_now_via<N, C>(
        &self,
        recipients: impl Into<Recipients>,
        notification: &mut N,
        channels: impl IntoIterator<Item = C>,
    ) where
        N: Notification,
        C: Into<Channel>,
    {
        let channels = channels.into_iter().map(Into::into).collect();
        self.record(recipients.into(), notification, Some(channels));
    }

    /// Always `None`: the fake has no drivers
    pub fn channel(&self, name: &str) -> Option<&dyn ChannelDriver> {
        tracing::trace!(name, "channel lookup on fake");
        None
    }

    /// Set the default locale; returns `self` for chaining
    pub fn locale(&self, locale: impl Into<Locale>) -> &Self {
        let locale = locale.into();
        tracing::debug!(%locale, "default locale set");
        *self.locale.borrow_mut() = Some(locale);
        self
    }

    pub fn default_locale(&self) -> Option<Locale> {
        self.locale.borrow().clone()
    }

    fn record<N: Notification>(
        &self,
        recipients: Recipients,
        notification: &mut N,
        channels: Option<Vec<Channel>>,
    ) {
        let kind = NotificationKind::of::<N>();
        let span = tracing::info_span!("fake.send", kind = kind.name(), recipients = recipients.len());
        let _guard = span.enter();

        if recipients.is_empty() {
            tracing::debug!("no recipients, nothing recorded");
            return;
        }

        let notification_id = self.assign_id(notification);
        let locale = notification.locale().cloned().or_else(|| self.default_locale());
        let shared: Rc<dyn Any> = Rc::new(notification.clone());

        for recipient in recipients {
            let recipient_key = RecipientKey::of(recipient.as_ref());
            let requested = match &channels {
                Some(channels) => channels.clone(),
                None => notification.via(recipient.as_ref()),
            };
            let channels: Vec<Channel> = requested
                .into_iter()
                .filter(|channel| notification.should_send(recipient.as_ref(), channel))
                .collect();

            tracing::debug!(
                recipient_type = %recipient_key.type_name(),
                recipient_id = %recipient_key.recipient_id,
                %notification_id,
                ?channels,
                "recorded"
            );

            let record = NotificationRecord::new(
                kind,
                notification_id.clone(),
                Rc::clone(&shared),
                recipient,
                recipient_key,
                channels,
                locale.clone(),
            );
            self.store.borrow_mut().append(record);
        }
    }

    fn assign_id<N: Notification>(&self, notification: &mut N) -> NotificationId {
        if let Some(id) = notification.id() {
            return id.clone();
        }
        let id = self.ids.next_id();
        tracing::trace!(%id, "assigned notification id");
        notification.set_id(id.clone());
        id
    }
}

impl Default for NotificationFake {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NotificationFake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationFake")
            .field("records", &self.store.borrow().len())
            .field("locale", &self.locale.borrow())
            .finish()
    }
}

impl Dispatcher for NotificationFake {
    fn send<N: Notification>(&self, recipients: impl Into<Recipients>, notification: &mut N) {
        NotificationFake::send(self, recipients, notification);
    }

    fn send_now<N: Notification>(&self, recipients: impl Into<Recipients>, notification: &mut N) {
        NotificationFake::send_now(self, recipients, notification);
    }

    fn channel(&self, name: &str) -> Option<&dyn ChannelDriver> {
        NotificationFake::channel(self, name)
    }

    fn locale(&self, locale: impl Into<Locale>) -> &Self {
        NotificationFake::locale(self, locale)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
