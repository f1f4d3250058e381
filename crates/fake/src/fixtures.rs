// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifiables and notifications shared by unit tests

use herald_core::{Channel, Locale, Notifiable, Notification, NotificationId, RecipientKey};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub phone: Option<String>,
}

impl Notifiable for User {
    fn notifiable_key(&self) -> String {
        self.id.to_string()
    }

    fn route_for(&self, channel: &Channel) -> Option<String> {
        match channel.as_str() {
            "sms" => self.phone.clone(),
            _ => None,
        }
    }
}

pub fn user(id: u64) -> User {
    User { id, phone: None }
}

pub fn user_with_phone(id: u64, phone: &str) -> User {
    User {
        id,
        phone: Some(phone.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub slug: String,
}

impl Notifiable for Team {
    fn notifiable_key(&self) -> String {
        self.slug.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WelcomeEmail {
    pub id: Option<NotificationId>,
    pub locale: Option<Locale>,
}

impl Notification for WelcomeEmail {
    fn id(&self) -> Option<&NotificationId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: NotificationId) {
        self.id = Some(id);
    }

    fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    fn via(&self, _notifiable: &dyn Notifiable) -> Vec<Channel> {
        vec![Channel::from("mail")]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordReset {
    pub id: Option<NotificationId>,
}

impl Notification for PasswordReset {
    fn id(&self) -> Option<&NotificationId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: NotificationId) {
        self.id = Some(id);
    }

    fn via(&self, _notifiable: &dyn Notifiable) -> Vec<Channel> {
        vec![Channel::from("mail")]
    }
}

/// Adds SMS when the recipient has a phone route and slack for teams;
/// zero-amount invoices veto slack
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoicePaid {
    pub id: Option<NotificationId>,
    pub amount: u64,
}

impl InvoicePaid {
    pub fn new(amount: u64) -> Self {
        Self { id: None, amount }
    }
}

impl Notification for InvoicePaid {
    fn id(&self) -> Option<&NotificationId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: NotificationId) {
        self.id = Some(id);
    }

    fn via(&self, notifiable: &dyn Notifiable) -> Vec<Channel> {
        let mut channels = vec![Channel::from("mail")];
        if notifiable.route_for(&Channel::from("sms")).is_some() {
            channels.push(Channel::from("sms"));
        }
        if is_team(notifiable) {
            channels.push(Channel::from("slack"));
        }
        channels
    }

    fn should_send(&self, notifiable: &dyn Notifiable, channel: &Channel) -> bool {
        !(is_team(notifiable) && channel == "slack" && self.amount == 0)
    }
}

fn is_team(notifiable: &dyn Notifiable) -> bool {
    RecipientKey::of(notifiable).type_name() == "Team"
}
