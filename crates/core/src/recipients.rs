// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of "one notifiable or many"

use crate::notifiable::{Notifiable, RecipientKey};
use std::fmt;
use std::rc::Rc;

/// Ordered list of notifiables a notification is addressed to
///
/// Built from a single `&R`, an array or `Vec` of references, or by
/// collecting an iterator of references. Each notifiable is cloned once and
/// shared by everything recorded for it. Already shared notifiables
/// (`Rc<dyn Notifiable>`) are taken as-is, which also allows lists mixing
/// notifiable types.
#[derive(Clone, Default)]
pub struct Recipients(Vec<Rc<dyn Notifiable>>);

impl Recipients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<R: Notifiable + Clone>(&mut self, recipient: &R) {
        self.0.push(Rc::new(recipient.clone()));
    }

    pub fn push_shared(&mut self, recipient: Rc<dyn Notifiable>) {
        self.0.push(recipient);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Notifiable> {
        self.0.iter().map(|r| r.as_ref())
    }

    pub fn keys(&self) -> Vec<RecipientKey> {
        self.iter().map(RecipientKey::of).collect()
    }
}

impl<R: Notifiable + Clone> From<&R> for Recipients {
    fn from(recipient: &R) -> Self {
        let mut recipients = Self::new();
        recipients.push(recipient);
        recipients
    }
}

impl<R: Notifiable + Clone, const N: usize> From<[&R; N]> for Recipients {
    fn from(recipients: [&R; N]) -> Self {
        recipients.into_iter().collect()
    }
}

impl<R: Notifiable + Clone> From<Vec<&R>> for Recipients {
    fn from(recipients: Vec<&R>) -> Self {
        recipients.into_iter().collect()
    }
}

impl<'a, R: Notifiable + Clone> FromIterator<&'a R> for Recipients {
    fn from_iter<I: IntoIterator<Item = &'a R>>(iter: I) -> Self {
        let mut recipients = Self::new();
        for recipient in iter {
            recipients.push(recipient);
        }
        recipients
    }
}

impl From<Rc<dyn Notifiable>> for Recipients {
    fn from(recipient: Rc<dyn Notifiable>) -> Self {
        Self(vec![recipient])
    }
}

impl From<Vec<Rc<dyn Notifiable>>> for Recipients {
    fn from(recipients: Vec<Rc<dyn Notifiable>>) -> Self {
        Self(recipients)
    }
}

impl FromIterator<Rc<dyn Notifiable>> for Recipients {
    fn from_iter<I: IntoIterator<Item = Rc<dyn Notifiable>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Recipients {
    type Item = Rc<dyn Notifiable>;
    type IntoIter = std::vec::IntoIter<Rc<dyn Notifiable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Debug for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|r| RecipientKey::of(r).to_string()))
            .finish()
    }
}

#[cfg(test)]
#[path = "recipients_tests.rs"]
mod tests;
