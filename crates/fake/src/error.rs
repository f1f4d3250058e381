// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the notification fake

use herald_core::{NotificationKind, RecipientKey};
use thiserror::Error;

/// A failed dispatch assertion
///
/// Messages name the notification kind and, for count checks, the expected
/// and observed counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    #[error("the expected [{kind}] notification was not sent")]
    NotSent { kind: NotificationKind },

    #[error("the expected [{kind}] notification was not sent to {recipient}")]
    NotSentTo {
        kind: NotificationKind,
        recipient: RecipientKey,
    },

    #[error("the unexpected [{kind}] notification was sent {count} time(s)")]
    UnexpectedlySent { kind: NotificationKind, count: usize },

    #[error("the unexpected [{kind}] notification was sent to {recipient} {count} time(s)")]
    UnexpectedlySentTo {
        kind: NotificationKind,
        recipient: RecipientKey,
        count: usize,
    },

    #[error("expected [{kind}] to be sent {expected} time(s), but it was sent {actual} time(s)")]
    CountMismatch {
        kind: NotificationKind,
        expected: usize,
        actual: usize,
    },

    #[error(
        "expected [{kind}] to be sent to {recipient} {expected} time(s), but it was sent {actual} time(s)"
    )]
    CountMismatchTo {
        kind: NotificationKind,
        recipient: RecipientKey,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} notification(s) in total, but {actual} were sent")]
    TotalMismatch { expected: usize, actual: usize },

    #[error("expected no notifications, but {count} were sent")]
    SomethingSent { count: usize },

    #[error("expected no notifications to {recipient}, but {count} were sent")]
    SomethingSentTo { recipient: RecipientKey, count: usize },

    #[error("the expected [{kind}] on-demand notification was not sent")]
    NotSentOnDemand { kind: NotificationKind },
}

impl AssertionFailure {
    /// Notification kind the failed check was about, if any
    pub fn kind(&self) -> Option<NotificationKind> {
        match self {
            Self::NotSent { kind }
            | Self::NotSentTo { kind, .. }
            | Self::UnexpectedlySent { kind, .. }
            | Self::UnexpectedlySentTo { kind, .. }
            | Self::CountMismatch { kind, .. }
            | Self::CountMismatchTo { kind, .. }
            | Self::NotSentOnDemand { kind } => Some(*kind),
            Self::TotalMismatch { .. } | Self::SomethingSent { .. } | Self::SomethingSentTo { .. } => {
                None
            }
        }
    }
}

/// Errors loading a [`FakeConfig`](crate::FakeConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("sequential id prefix must not be empty")]
    EmptyIdPrefix,
}
