//! Shared notifiables and notifications for specs

pub use herald_core::{
    AnonymousNotifiable, Channel, Dispatcher, Locale, Notifiable, Notification, NotificationId,
    RecipientKey,
};
pub use herald_fake::{AssertionFailure, CollectingReporter, FakeConfig, NotificationFake};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub email: String,
}

impl Notifiable for User {
    fn notifiable_key(&self) -> String {
        self.id.to_string()
    }

    fn route_for(&self, channel: &Channel) -> Option<String> {
        (channel.as_str() == "mail").then(|| self.email.clone())
    }
}

pub fn user(id: u64) -> User {
    User {
        id,
        email: format!("user{id}@example.com"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: u64,
}

impl Notifiable for Organization {
    fn notifiable_key(&self) -> String {
        self.id.to_string()
    }
}

macro_rules! notification {
    ($name:ident { $($field:ident: $ty:ty),* } via [$($channel:literal),*]) => {
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            pub id: Option<NotificationId>,
            pub locale: Option<Locale>,
            $(pub $field: $ty,)*
        }

        impl Notification for $name {
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
                vec![$(Channel::from($channel)),*]
            }
        }
    };
}

notification!(WelcomeEmail {} via ["mail"]);
notification!(PasswordReset { token: String } via ["mail"]);
notification!(OrderShipped { order: u64 } via ["mail", "database"]);

/// A fake whose assertions collect instead of panicking
pub fn collecting_fake() -> (NotificationFake, CollectingReporter) {
    let reporter = CollectingReporter::new();
    (NotificationFake::new().with_reporter(reporter.clone()), reporter)
}

/// Application code under test: only knows about `Dispatcher`
pub fn ship_order<D: Dispatcher>(dispatcher: &D, customer: &User, order: u64) -> OrderShipped {
    let mut notification = OrderShipped {
        order,
        ..OrderShipped::default()
    };
    dispatcher.send(customer, &mut notification);
    notification
}
