use chrono::{TimeZone, Utc};

use devutils_core::base::{self, apply_edit, BaseField, BaseValues, Radix};
use devutils_core::time::{self, InputFormat, TimeConverter, TimeState};

#[test]
fn test_decimal_edit_populates_every_field() {
    let state = apply_edit(&BaseValues::default(), BaseField::Decimal, "255");
    assert_eq!(state.binary, "11111111");
    assert_eq!(state.octal, "377");
    assert_eq!(state.hex, "ff");
    assert_eq!(state.custom, "7v");
    assert_eq!(state.custom_base, Radix::DEFAULT_CUSTOM);
}

#[test]
fn test_every_field_agrees_after_an_edit() {
    let mut state = BaseValues::new(Radix::new(7).expect("valid radix"));
    assert!(state.edit(BaseField::Binary, "101101"));
    for (field, text) in state.entries() {
        let decimal = base::convert_base(text, state.effective_base(field), Radix::DECIMAL)
            .expect("field should be valid in its own base");
        assert_eq!(decimal, "45", "{} disagrees", field);
    }
}

#[test]
fn test_session_of_edits_and_radix_changes() {
    let mut state = BaseValues::default();
    assert!(state.edit(BaseField::Hex, "1a2b549f"));
    assert_eq!(state.decimal, "439047327");

    state.set_custom_base(Radix::new(36).expect("valid radix"));
    assert_eq!(state.custom, "79eb33");
    assert_eq!(state.hex, "1a2b549f");

    assert!(!state.edit(BaseField::Octal, "9"));
    assert_eq!(state.hex, "1a2b549f");

    assert!(state.edit(BaseField::Custom, ""));
    assert!(state.is_empty());
}

#[test]
fn test_validation_properties() {
    for b in Radix::MIN..=Radix::MAX {
        assert!(base::validate("", b));
        for b2 in Radix::MIN..=Radix::MAX {
            assert_eq!(base::convert("", b, b2).expect("empty converts"), "");
        }
    }
    assert!(!base::validate("G", 16));
    assert!(base::validate("g", 17));
    assert!(!base::validate("2", 2));
    assert!(base::validate("1", 2));
}

#[test]
fn test_parse_and_format_round_trip() {
    let instant = time::parse_time("1704067200", InputFormat::Unix, &Utc).expect("parse");
    assert_eq!(instant, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(time::format_time(&instant, InputFormat::Ms), "1704067200000");

    let day = time::parse_time("60*60*24", InputFormat::Unix, &Utc).expect("parse");
    assert_eq!(day.timestamp(), 86_400);
}

#[test]
fn test_relative_time_one_year_two_months_three_days() {
    let instant = Utc.with_ymd_and_hms(2022, 5, 10, 8, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2023, 7, 13, 8, 0, 0).unwrap();
    assert_eq!(time::relative_time(&instant, &now), "1yr 2mo 3d ago");
    assert_eq!(time::relative_time(&now, &instant), "1yr 2mo 3d from now");
}

#[test]
fn test_converter_in_named_zone() {
    let mut conv = TimeConverter::new(chrono_tz::Asia::Jakarta, InputFormat::Iso);
    assert!(conv.set_input("2024-01-01T00:00:00.000+07:00"));
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let details = conv.details(&now).expect("valid instant");
    assert_eq!(details.local, "Mon Jan 01 00:00:00 +07:00 2024");
    assert_eq!(details.utc, "2023-12-31T17:00:00.000Z");
    assert_eq!(details.relative, "7hr ago");
    assert_eq!(details.day_of_year, 1);
    assert!(details.is_leap_year);

    conv.set_format(InputFormat::Unix);
    assert_eq!(conv.input(), "1704042000");
    assert!(matches!(conv.state(), TimeState::Valid(_)));
}

#[test]
fn test_details_serialize_for_json_output() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let details = time::TimeDetails::new(&instant, &instant);
    let value = serde_json::to_value(&details).expect("serialize");
    assert_eq!(value["unix"], 1_704_067_200);
    assert_eq!(value["formats"][2]["value"], "2024-01-01");
    assert_eq!(value["formats"][2]["format"], "iso_date");
}
