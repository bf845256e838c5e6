use proptest::prelude::*;

use tally_core::{Currency, LedgerError, Value};

proptest! {
    #[test]
    fn parse_inverts_render(minor_units in any::<i64>()) {
        let value = Value::new(minor_units);
        for currency in Currency::PRESETS {
            let text = currency.render(value);
            prop_assert_eq!(currency.parse(&text).unwrap(), value);
        }
    }

    #[test]
    fn render_has_one_sign_at_most(minor_units in any::<i64>()) {
        let text = Currency::EUR.render(Value::new(minor_units));
        prop_assert!(text.matches('-').count() <= 1);
        prop_assert_eq!(text.starts_with('-'), minor_units < 0);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,16}") {
        match Currency::EUR.parse(&text) {
            Ok(value) => {
                let reparsed = Currency::EUR.parse(&Currency::EUR.render(value)).unwrap();
                prop_assert_eq!(reparsed, value);
            }
            Err(err) => prop_assert!(matches!(err, LedgerError::Parse(_))),
        }
    }
}
