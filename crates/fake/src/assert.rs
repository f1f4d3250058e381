// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assertions over recorded sends
//!
//! Each assertion runs a query, turns the result into an outcome, and hands
//! it to the fake's [`Reporter`](crate::Reporter). Methods taking
//! `impl Into<Recipients>` check every recipient separately, so one call can
//! report several failures; an empty recipient list checks nothing.

use crate::error::AssertionFailure;
use crate::fake::NotificationFake;
use herald_core::{
    AnonymousNotifiable, Channel, Notifiable, Notification, NotificationKind, RecipientKey,
    Recipients,
};

impl NotificationFake {
    /// At least one `N` was sent to anyone
    pub fn assert_sent<N: Notification>(&self) {
        let kind = NotificationKind::of::<N>();
        self.verdict(if self.has_sent::<N>() {
            Ok(())
        } else {
            Err(AssertionFailure::NotSent { kind })
        });
    }

    /// At least one `N` satisfying `predicate` was sent
    pub fn assert_sent_where<N: Notification>(
        &self,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) {
        let kind = NotificationKind::of::<N>();
        self.verdict(if self.sent_where::<N>(predicate).is_empty() {
            Err(AssertionFailure::NotSent { kind })
        } else {
            Ok(())
        });
    }

    /// Exactly `times` `N` were sent, counted through [`sent`](Self::sent)
    pub fn assert_sent_times<N: Notification>(&self, times: usize) {
        let actual = self.sent::<N>().len();
        self.verdict(count_outcome::<N>(times, actual));
    }

    /// Each recipient received at least one `N`
    pub fn assert_sent_to<N: Notification>(&self, recipients: impl Into<Recipients>) {
        let kind = NotificationKind::of::<N>();
        let recipients: Recipients = recipients.into();
        for recipient in recipients.iter() {
            self.verdict(if self.has_sent_to::<N>(recipient) {
                Ok(())
            } else {
                Err(AssertionFailure::NotSentTo {
                    kind,
                    recipient: RecipientKey::of(recipient),
                })
            });
        }
    }

    /// Each recipient received at least one `N` satisfying `predicate`
    pub fn assert_sent_to_where<N: Notification>(
        &self,
        recipients: impl Into<Recipients>,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) {
        let kind = NotificationKind::of::<N>();
        let recipients: Recipients = recipients.into();
        for recipient in recipients.iter() {
            let matched = self.sent_to_where::<N>(recipient, &predicate);
            self.verdict(if matched.is_empty() {
                Err(AssertionFailure::NotSentTo {
                    kind,
                    recipient: RecipientKey::of(recipient),
                })
            } else {
                Ok(())
            });
        }
    }

    /// Each recipient received exactly `times` `N`
    pub fn assert_sent_to_times<N: Notification>(
        &self,
        recipients: impl Into<Recipients>,
        times: usize,
    ) {
        let kind = NotificationKind::of::<N>();
        let recipients: Recipients = recipients.into();
        for recipient in recipients.iter() {
            let actual = self.sent_to::<N>(recipient).len();
            self.verdict(if actual == times {
                Ok(())
            } else {
                Err(AssertionFailure::CountMismatchTo {
                    kind,
                    recipient: RecipientKey::of(recipient),
                    expected: times,
                    actual,
                })
            });
        }
    }

    /// No `N` was sent to anyone
    pub fn assert_not_sent<N: Notification>(&self) {
        let count = self.sent::<N>().len();
        self.verdict(unexpected_outcome::<N>(count));
    }

    /// No `N` satisfying `predicate` was sent
    pub fn assert_not_sent_where<N: Notification>(
        &self,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) {
        let count = self.sent_where::<N>(predicate).len();
        self.verdict(unexpected_outcome::<N>(count));
    }

    /// No recipient received an `N`
    pub fn assert_not_sent_to<N: Notification>(&self, recipients: impl Into<Recipients>) {
        self.assert_not_sent_to_where::<N>(recipients, |_, _, _| true);
    }

    /// No recipient received an `N` satisfying `predicate`
    pub fn assert_not_sent_to_where<N: Notification>(
        &self,
        recipients: impl Into<Recipients>,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) {
        let kind = NotificationKind::of::<N>();
        let recipients: Recipients = recipients.into();
        for recipient in recipients.iter() {
            let count = self.sent_to_where::<N>(recipient, &predicate).len();
            self.verdict(if count == 0 {
                Ok(())
            } else {
                Err(AssertionFailure::UnexpectedlySentTo {
                    kind,
                    recipient: RecipientKey::of(recipient),
                    count,
                })
            });
        }
    }

    /// Nothing of any kind was sent to anyone
    pub fn assert_nothing_sent(&self) {
        let store = self.store.borrow();
        let outcome = if store.is_empty() {
            Ok(())
        } else {
            Err(AssertionFailure::SomethingSent { count: store.len() })
        };
        drop(store);
        self.verdict(outcome);
    }

    /// Nothing of any kind was sent to each recipient
    pub fn assert_nothing_sent_to(&self, recipients: impl Into<Recipients>) {
        let recipients: Recipients = recipients.into();
        for recipient in recipients.iter() {
            let count = self.sent_notifications_to(recipient).len();
            self.verdict(if count == 0 {
                Ok(())
            } else {
                Err(AssertionFailure::SomethingSentTo {
                    recipient: RecipientKey::of(recipient),
                    count,
                })
            });
        }
    }

    /// Exactly `expected` `N` records exist, summed across every recipient
    ///
    /// Counts the index directly rather than through [`sent`](Self::sent);
    /// the two always agree with [`assert_sent_times`](Self::assert_sent_times).
    pub fn assert_times_sent<N: Notification>(&self, expected: usize) {
        let actual = self.store.borrow().count_kind(NotificationKind::of::<N>());
        self.verdict(count_outcome::<N>(expected, actual));
    }

    /// Exactly `expected` records exist across all kinds
    pub fn assert_count(&self, expected: usize) {
        let actual = self.count();
        self.verdict(if actual == expected {
            Ok(())
        } else {
            Err(AssertionFailure::TotalMismatch { expected, actual })
        });
    }

    /// At least one `N` went to an on-demand notifiable
    pub fn assert_sent_on_demand<N: Notification>(&self) {
        self.assert_sent_on_demand_where::<N>(|_, _, _| true);
    }

    /// At least one `N` satisfying `predicate` went to an on-demand notifiable
    pub fn assert_sent_on_demand_where<N: Notification>(
        &self,
        predicate: impl Fn(&N, &dyn Notifiable, &[Channel]) -> bool,
    ) {
        let kind = NotificationKind::of::<N>();
        self.verdict(if self.sent_on_demand_where::<N>(predicate).is_empty() {
            Err(AssertionFailure::NotSentOnDemand { kind })
        } else {
            Ok(())
        });
    }

    /// Exactly `times` `N` went to on-demand notifiables
    pub fn assert_sent_on_demand_times<N: Notification>(&self, times: usize) {
        self.assert_sent_to_times::<N>(&AnonymousNotifiable::new(), times);
    }

    fn verdict(&self, outcome: Result<(), AssertionFailure>) {
        if let Err(failure) = &outcome {
            tracing::warn!(%failure, "notification assertion failed");
        }
        self.reporter.report(outcome);
    }
}

fn count_outcome<N: Notification>(expected: usize, actual: usize) -> Result<(), AssertionFailure> {
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::CountMismatch {
            kind: NotificationKind::of::<N>(),
            expected,
            actual,
        })
    }
}

fn unexpected_outcome<N: Notification>(count: usize) -> Result<(), AssertionFailure> {
    if count == 0 {
        Ok(())
    } else {
        Err(AssertionFailure::UnexpectedlySent {
            kind: NotificationKind::of::<N>(),
            count,
        })
    }
}

#[cfg(test)]
#[path = "assert_tests.rs"]
mod tests;
