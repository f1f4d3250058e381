// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only record index
//!
//! Records are filed under `recipient type → recipient id → notification kind`.
//! Each level is created on first write and never removed, so an absent key
//! means nothing was sent and no level ever holds an empty collection.

use crate::record::NotificationRecord;
use herald_core::{NotificationKind, RecipientKey};
use std::collections::BTreeMap;

type KindIndex = BTreeMap<NotificationKind, Vec<NotificationRecord>>;
type IdIndex = BTreeMap<String, KindIndex>;

#[derive(Debug, Default)]
pub struct RecordStore {
    types: BTreeMap<String, IdIndex>,
    len: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a record under its recipient key and kind
    pub fn append(&mut self, record: NotificationRecord) {
        let key = record.recipient_key().clone();
        self.types
            .entry(key.recipient_type)
            .or_default()
            .entry(key.recipient_id)
            .or_default()
            .entry(record.kind())
            .or_default()
            .push(record);
        self.len += 1;
    }

    /// Records of `kind` filed under one recipient, in insertion order
    pub fn for_recipient(&self, key: &RecipientKey, kind: NotificationKind) -> &[NotificationRecord] {
        self.kinds_for(key)
            .and_then(|kinds| kinds.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Records of `kind` across every recipient
    ///
    /// Only the `kind` entry of each recipient is visited.
    pub fn of_kind(&self, kind: NotificationKind) -> impl Iterator<Item = &NotificationRecord> {
        self.types
            .values()
            .flat_map(|ids| ids.values())
            .filter_map(move |kinds| kinds.get(&kind))
            .flatten()
    }

    /// Records of `kind` filed under any recipient of `recipient_type`
    pub fn of_type(
        &self,
        recipient_type: &str,
        kind: NotificationKind,
    ) -> impl Iterator<Item = &NotificationRecord> {
        self.types
            .get(recipient_type)
            .into_iter()
            .flat_map(|ids| ids.values())
            .filter_map(move |kinds| kinds.get(&kind))
            .flatten()
    }

    /// Every record filed under one recipient, kinds in key order
    pub fn all_for(&self, key: &RecipientKey) -> impl Iterator<Item = &NotificationRecord> {
        self.kinds_for(key).into_iter().flat_map(|kinds| kinds.values()).flatten()
    }

    pub fn has_kind(&self, kind: NotificationKind) -> bool {
        self.types
            .values()
            .flat_map(|ids| ids.values())
            .any(|kinds| kinds.contains_key(&kind))
    }

    pub fn has_kind_for(&self, key: &RecipientKey, kind: NotificationKind) -> bool {
        self.kinds_for(key)
            .is_some_and(|kinds| kinds.contains_key(&kind))
    }

    /// Total number of `kind` records, summed level by level
    pub fn count_kind(&self, kind: NotificationKind) -> usize {
        let mut total = 0;
        for ids in self.types.values() {
            for kinds in ids.values() {
                if let Some(records) = kinds.get(&kind) {
                    total += records.len();
                }
            }
        }
        total
    }

    /// Every record in index order
    pub fn iter(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.types
            .values()
            .flat_map(|ids| ids.values())
            .flat_map(|kinds| kinds.values())
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no recipient key exists at all
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn kinds_for(&self, key: &RecipientKey) -> Option<&KindIndex> {
        self.types
            .get(&key.recipient_type)
            .and_then(|ids| ids.get(&key.recipient_id))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
