//! Assertion failure specs
//!
//! Verify that failing assertions produce diagnosable messages.

use crate::prelude::*;

#[test]
#[should_panic(expected = "the expected [WelcomeEmail] notification was not sent")]
fn missing_notification_panics() {
    NotificationFake::new().assert_sent::<WelcomeEmail>();
}

#[test]
#[should_panic(expected = "expected no notifications, but 1 were sent")]
fn nothing_sent_fails_after_send() {
    let fake = NotificationFake::new();
    fake.send(&user(1), &mut WelcomeEmail::default());
    fake.assert_nothing_sent();
}

#[test]
#[should_panic(
    expected = "expected [OrderShipped] to be sent to User#1 3 time(s), but it was sent 1 time(s)"
)]
fn recipient_count_mismatch_panics() {
    let fake = NotificationFake::new();
    let u1 = user(1);
    ship_order(&fake, &u1, 9);
    fake.assert_sent_to_times::<OrderShipped>(&u1, 3);
}

#[test]
fn messages_name_kind_recipient_and_counts() {
    let (fake, reporter) = collecting_fake();
    let (u1, u2) = (user(1), user(2));
    fake.send(&u1, &mut WelcomeEmail::default());

    fake.assert_sent_to::<WelcomeEmail>([&u1, &u2]);
    fake.assert_not_sent::<WelcomeEmail>();
    fake.assert_times_sent::<WelcomeEmail>(4);
    fake.assert_nothing_sent_to(&u1);

    let messages: Vec<String> = reporter.failures().iter().map(ToString::to_string).collect();
    similar_asserts::assert_eq!(
        messages,
        vec![
            "the expected [WelcomeEmail] notification was not sent to User#2".to_string(),
            "the unexpected [WelcomeEmail] notification was sent 1 time(s)".to_string(),
            "expected [WelcomeEmail] to be sent 4 time(s), but it was sent 1 time(s)".to_string(),
            "expected no notifications to User#1, but 1 were sent".to_string(),
        ]
    );
    similar_asserts::assert_eq!(reporter.checks(), 5);
}

#[test]
fn failures_are_structured() {
    let (fake, reporter) = collecting_fake();
    let u1 = user(1);

    fake.assert_sent_to::<PasswordReset>(&u1);

    match reporter.failures().as_slice() {
        [AssertionFailure::NotSentTo { kind, recipient }] => {
            similar_asserts::assert_eq!(kind.name(), "PasswordReset");
            similar_asserts::assert_eq!(recipient.clone(), RecipientKey::of(&u1));
            similar_asserts::assert_eq!(recipient.to_string(), "User#1");
        }
        other => panic!("unexpected failures: {other:?}"),
    }
}
