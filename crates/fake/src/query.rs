// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read path over recorded sends
//!
//! Every lookup is scoped to one notification kind, selected by type
//! parameter. Predicates receive `(notification, recipient, channels)`;
//! closures that only care about the notification ignore the rest:
//!
//! ```ignore
//! let urgent = fake.sent_where::<InvoicePaid>(|n, _, _| n.amount > 1_000);
//! let by_sms = fake.sent_to_where::<InvoicePaid>(&user, |_, _, channels| {
//!     channels.iter().any(|c| c == "sms")
//! });
//! ```

use crate::fake::NotificationFake;
use crate::record::{NotificationRecord, Sent};
use herald_core::{
    AnonymousNotifiable, Channel, Notifiable, Notification, NotificationKind, RecipientKey,
};
use std::rc::Rc;

impl NotificationFake {
    /// Notifications of kind `N` sent to anyone, in index order
    pub fn sent<N: Notification>(&self) -> Vec<Rc<N>> {
        self.kind_records::<N>()
            .iter()
            .filter_map(NotificationRecord::notification::<N>)
            .collect()
    }

    /// Notifications of kind `N` sent to anyone that satisfy `predicate`
    pub fn sent_where<N: Notification>(
        &self,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) -> Vec<Rc<N>> {
        select(&self.kind_records::<N>(), &predicate)
    }

    /// Notifications of kind `N` sent to `recipient`, in send order
    pub fn sent_to<N: Notification>(&self, recipient: &dyn Notifiable) -> Vec<Rc<N>> {
        self.recipient_records::<N>(recipient)
            .iter()
            .filter_map(NotificationRecord::notification::<N>)
            .collect()
    }

    /// Notifications of kind `N` sent to `recipient` that satisfy `predicate`
    pub fn sent_to_where<N: Notification>(
        &self,
        recipient: &dyn Notifiable,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) -> Vec<Rc<N>> {
        select(&self.recipient_records::<N>(recipient), &predicate)
    }

    /// True if any `N` was sent; never materializes the records
    pub fn has_sent<N: Notification>(&self) -> bool {
        self.store.borrow().has_kind(NotificationKind::of::<N>())
    }

    /// True if any `N` was sent to `recipient`
    pub fn has_sent_to<N: Notification>(&self, recipient: &dyn Notifiable) -> bool {
        self.store
            .borrow()
            .has_kind_for(&RecipientKey::of(recipient), NotificationKind::of::<N>())
    }

    /// Full records of kind `N`, with recipients, channels and locales
    pub fn records<N: Notification>(&self) -> Vec<Sent<N>> {
        self.kind_records::<N>()
            .iter()
            .filter_map(NotificationRecord::typed::<N>)
            .collect()
    }

    /// Full records of kind `N` sent to `recipient`
    pub fn records_to<N: Notification>(&self, recipient: &dyn Notifiable) -> Vec<Sent<N>> {
        self.recipient_records::<N>(recipient)
            .iter()
            .filter_map(NotificationRecord::typed::<N>)
            .collect()
    }

    /// Notifications of kind `N` sent to on-demand (anonymous) notifiables
    pub fn sent_on_demand_where<N: Notification>(
        &self,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) -> Vec<Rc<N>> {
        let records: Vec<NotificationRecord> = self
            .store
            .borrow()
            .of_type(AnonymousNotifiable::TYPE, NotificationKind::of::<N>())
            .cloned()
            .collect();
        select(&records, &predicate)
    }

    /// Every record of every kind, in index order
    pub fn sent_notifications(&self) -> Vec<NotificationRecord> {
        self.store.borrow().iter().cloned().collect()
    }

    /// Every record of every kind filed under `recipient`
    pub fn sent_notifications_to(&self, recipient: &dyn Notifiable) -> Vec<NotificationRecord> {
        self.store
            .borrow()
            .all_for(&RecipientKey::of(recipient))
            .cloned()
            .collect()
    }

    /// Number of records across all kinds and recipients
    pub fn count(&self) -> usize {
        self.store.borrow().len()
    }

    // Records are cloned out so predicates run without the store borrowed.
    fn kind_records<N: Notification>(&self) -> Vec<NotificationRecord> {
        self.store
            .borrow()
            .of_kind(NotificationKind::of::<N>())
            .cloned()
            .collect()
    }

    fn recipient_records<N: Notification>(
        &self,
        recipient: &dyn Notifiable,
    ) -> Vec<NotificationRecord> {
        self.store
            .borrow()
            .for_recipient(&RecipientKey::of(recipient), NotificationKind::of::<N>())
            .to_vec()
    }
}

fn select<N: Notification>(
    records: &[NotificationRecord],
    predicate: &impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
) -> Vec<Rc<N>> {
    records
        .iter()
        .filter_map(|record| {
            let notification = record.notification::<N>()?;
            predicate(&*notification, record.recipient(), record.channels())
                .then_some(notification)
        })
        .collect()
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
