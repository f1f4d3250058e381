//! Query specs
//!
//! Verify kind- and recipient-scoped lookups and predicate filtering.

use crate::prelude::*;

#[test]
fn nothing_sent_yields_empty_results() {
    let fake = NotificationFake::new();

    assert!(fake.sent::<WelcomeEmail>().is_empty());
    assert!(fake.sent_to::<WelcomeEmail>(&user(1)).is_empty());
    assert!(!fake.has_sent::<WelcomeEmail>());
    assert!(!fake.has_sent_to::<WelcomeEmail>(&user(1)));
    assert!(fake.sent_notifications().is_empty());
}

#[test]
fn lookups_are_isolated_by_kind_and_recipient() {
    let fake = NotificationFake::new();
    let (u1, u2) = (user(1), user(2));

    fake.send(&u1, &mut WelcomeEmail::default());
    fake.send(&u2, &mut PasswordReset::default());

    similar_asserts::assert_eq!(fake.sent::<WelcomeEmail>().len(), 1);
    similar_asserts::assert_eq!(fake.sent::<PasswordReset>().len(), 1);
    assert!(fake.sent_to::<WelcomeEmail>(&u2).is_empty());
    assert!(fake.sent_to::<PasswordReset>(&u1).is_empty());
}

#[test]
fn predicate_selects_by_payload() {
    let fake = NotificationFake::new();
    let u1 = user(1);

    fake.send(
        &u1,
        &mut PasswordReset {
            token: "abc".into(),
            ..PasswordReset::default()
        },
    );
    fake.send(
        &u1,
        &mut PasswordReset {
            token: "xyz".into(),
            ..PasswordReset::default()
        },
    );

    let matching = fake.sent_to_where::<PasswordReset>(&u1, |n, _, _| n.token == "xyz");
    similar_asserts::assert_eq!(matching.len(), 1);
    similar_asserts::assert_eq!(matching[0].token.as_str(), "xyz");
}

#[test]
fn predicate_receives_recipient_and_channels() {
    let fake = NotificationFake::new();
    let (u1, u2) = (user(1), user(2));

    fake.send([&u1, &u2], &mut OrderShipped::default());

    let to_u2 = fake.sent_where::<OrderShipped>(|_, recipient, channels| {
        recipient.route_for(&Channel::from("mail")).as_deref() == Some("user2@example.com")
            && channels.iter().any(|c| c == "database")
    });
    similar_asserts::assert_eq!(to_u2.len(), 1);
}

#[test]
fn insertion_order_is_kept_per_recipient() {
    let fake = NotificationFake::new();
    let u1 = user(1);

    for order in [3, 1, 2] {
        ship_order(&fake, &u1, order);
    }

    let orders: Vec<u64> = fake
        .sent_to::<OrderShipped>(&u1)
        .iter()
        .map(|n| n.order)
        .collect();
    similar_asserts::assert_eq!(orders, vec![3, 1, 2]);
}

#[test]
fn records_snapshot_every_send() {
    let fake = NotificationFake::new();
    let u1 = user(1);
    let org = Organization { id: 1 };

    fake.send(&u1, &mut WelcomeEmail::default());
    fake.send(&org, &mut OrderShipped::default());

    let keys: Vec<String> = fake
        .sent_notifications()
        .iter()
        .map(|r| format!("{} {}", r.recipient_key(), r.kind()))
        .collect();
    similar_asserts::assert_eq!(
        keys,
        vec![
            "Organization#1 OrderShipped".to_string(),
            "User#1 WelcomeEmail".to_string(),
        ]
    );
    similar_asserts::assert_eq!(fake.count(), 2);
}
