//! Locale specs
//!
//! Verify the default locale and per-notification overrides.

use crate::prelude::*;

#[test]
fn default_locale_is_recorded() {
    let fake = NotificationFake::new();
    let u1 = user(1);

    fake.locale("de").send(&u1, &mut WelcomeEmail::default());

    let records = fake.records_to::<WelcomeEmail>(&u1);
    similar_asserts::assert_eq!(records[0].locale().cloned(), Some(Locale::new("de")));
}

#[test]
fn notification_locale_overrides_default() {
    let fake = NotificationFake::new();
    let u1 = user(1);
    let mut welcome = WelcomeEmail {
        locale: Some(Locale::new("it")),
        ..WelcomeEmail::default()
    };

    fake.locale("de").send(&u1, &mut welcome);

    let records = fake.records_to::<WelcomeEmail>(&u1);
    similar_asserts::assert_eq!(records[0].locale().cloned(), Some(Locale::new("it")));
}

#[test]
fn configured_locale_applies_until_changed() {
    let config = FakeConfig::from_toml_str("default_locale = \"en\"\n").unwrap();
    let fake = NotificationFake::with_config(config);
    let u1 = user(1);

    fake.send(&u1, &mut WelcomeEmail::default());
    fake.locale("sv");
    fake.send(&u1, &mut WelcomeEmail::default());

    let locales: Vec<Option<String>> = fake
        .records_to::<WelcomeEmail>(&u1)
        .iter()
        .map(|r| r.locale().map(ToString::to_string))
        .collect();
    similar_asserts::assert_eq!(locales, vec![Some("en".to_string()), Some("sv".to_string())]);
}

#[test]
fn no_locale_anywhere_is_fine() {
    let fake = NotificationFake::new();
    let u1 = user(1);

    fake.send(&u1, &mut WelcomeEmail::default());

    assert!(fake.records_to::<WelcomeEmail>(&u1)[0].locale().is_none());
}
