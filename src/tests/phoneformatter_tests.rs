use crate::phoneformatter::{
    FormatError, PhoneNumberFormat, PhoneNumberType, phoneformatter::PhoneFormatter,
};

use super::{init_logger, region_code::RegionCode};

fn get_phone_formatter() -> PhoneFormatter {
    init_logger();
    PhoneFormatter::new()
}

#[test]
fn parse_requires_region_for_national_numbers() {
    let formatter = get_phone_formatter();
    assert_eq!(
        formatter.parse("4155552671", None).unwrap_err(),
        FormatError::MissingRegion
    );
    assert!(formatter.parse("+14155552671", None).is_ok());
    assert!(formatter.parse("(415) 555-2671", Some(RegionCode::us())).is_ok());
}

#[test]
fn parse_rejects_invalid_regions() {
    let formatter = get_phone_formatter();
    for region in [RegionCode::zz(), RegionCode::invalid(), "", "   ", "USA"] {
        assert!(
            formatter
                .parse("4155552671", Some(region))
                .is_err_and(|err| matches!(err, FormatError::InvalidRegion(_))),
            "region '{}' should be rejected",
            region
        );
    }
}

#[test]
fn parse_accepts_lowercase_regions() {
    let formatter = get_phone_formatter();
    let lower = formatter.format("4155552671", "us", PhoneNumberFormat::E164).unwrap();
    assert_eq!(lower, "+14155552671");
}

#[test]
fn parse_fails_on_garbage() {
    let formatter = get_phone_formatter();
    assert!(formatter.parse("aaa", Some(RegionCode::us())).is_err());
    assert!(formatter.parse("", Some(RegionCode::gb())).is_err());
}

#[test]
fn is_valid_number() {
    let formatter = get_phone_formatter();
    assert_eq!(formatter.is_valid_number("4155552671", RegionCode::us(), None), Ok(true));
    assert_eq!(formatter.is_valid_number("+1 (415) 555-2671", RegionCode::gb(), None), Ok(true));
    assert_eq!(formatter.is_valid_number("020 8765 4321", RegionCode::gb(), None), Ok(true));
    assert!(formatter.is_valid_number("bbb", RegionCode::fi(), None).is_err());
}

#[test]
fn is_valid_number_for_type() {
    let formatter = get_phone_formatter();
    // US numbers can't be told apart, so they count as both.
    assert_eq!(
        formatter.is_valid_number("4155552671", RegionCode::us(), Some(PhoneNumberType::Mobile)),
        Ok(true)
    );
    assert_eq!(
        formatter.is_valid_number("4155552671", RegionCode::us(), Some(PhoneNumberType::FixedLine)),
        Ok(true)
    );
    assert_eq!(
        formatter.is_valid_number("07400 123456", RegionCode::gb(), Some(PhoneNumberType::Mobile)),
        Ok(true)
    );
    assert_eq!(
        formatter.is_valid_number("07400 123456", RegionCode::gb(), Some(PhoneNumberType::FixedLine)),
        Ok(false)
    );
    assert_eq!(
        formatter.is_valid_number("020 8765 4321", RegionCode::gb(), Some(PhoneNumberType::TollFree)),
        Ok(false)
    );
}

#[test]
fn number_type() {
    let formatter = get_phone_formatter();
    assert_eq!(
        formatter.number_type("4155552671", RegionCode::us()),
        Ok(PhoneNumberType::FixedLineOrMobile)
    );
    assert_eq!(
        formatter.number_type("07400 123456", RegionCode::gb()),
        Ok(PhoneNumberType::Mobile)
    );
    assert_eq!(
        formatter.number_type("020 8765 4321", RegionCode::gb()),
        Ok(PhoneNumberType::FixedLine)
    );
}

#[test]
fn format_us_number() {
    let formatter = get_phone_formatter();
    let format = |number_format| formatter.format("4155552671", RegionCode::us(), number_format).unwrap();
    assert_eq!(format(PhoneNumberFormat::E164), "+14155552671");
    assert_eq!(format(PhoneNumberFormat::International), "+1 415-555-2671");
    assert_eq!(format(PhoneNumberFormat::National), "(415) 555-2671");
    assert_eq!(format(PhoneNumberFormat::RFC3966), "tel:+1-415-555-2671");
}

#[test]
fn format_gb_number() {
    let formatter = get_phone_formatter();
    let format = |number_format| formatter.format("020 8765 4321", RegionCode::gb(), number_format).unwrap();
    assert_eq!(format(PhoneNumberFormat::E164), "+442087654321");
    assert_eq!(format(PhoneNumberFormat::International), "+44 20 8765 4321");
    assert_eq!(format(PhoneNumberFormat::National), "020 8765 4321");
}

#[test]
fn format_ignores_region_for_international_input() {
    let formatter = get_phone_formatter();
    assert_eq!(
        formatter.format("+358-9-1911", RegionCode::fi(), PhoneNumberFormat::E164),
        Ok("+35891911".to_string())
    );
    assert_eq!(
        formatter.format("+44 20 8765 4321", RegionCode::us(), PhoneNumberFormat::E164),
        Ok("+442087654321".to_string())
    );
}

#[test]
fn format_keeps_country_code_digits_matching_national_prefix() {
    let formatter = get_phone_formatter();
    // 121 and 8000 start with the US and RU national prefixes.
    assert_eq!(
        formatter.format("+44 121 234 5678", RegionCode::us(), PhoneNumberFormat::E164),
        Ok("+441212345678".to_string())
    );
    assert_eq!(
        formatter.format("+44 8000 123456", RegionCode::ru(), PhoneNumberFormat::E164),
        Ok("+448000123456".to_string())
    );
    assert_eq!(
        formatter.format("+800 1234 5678", RegionCode::us(), PhoneNumberFormat::E164),
        Ok("+80012345678".to_string())
    );
    assert_eq!(
        formatter.is_valid_number("+44 121 234 5678", RegionCode::us(), None),
        Ok(true)
    );
}

#[test]
fn parse_still_checks_region_for_international_input() {
    let formatter = get_phone_formatter();
    assert!(formatter
        .parse("+44 121 234 5678", Some(RegionCode::invalid()))
        .is_err_and(|err| matches!(err, FormatError::InvalidRegion(_))));
}

#[test]
fn format_local() {
    let formatter = get_phone_formatter();
    assert_eq!(
        formatter.format_local("+358-9-1911", RegionCode::fi()),
        Ok("09 1911".to_string())
    );
    // Numbers of another country are written internationally.
    assert_eq!(
        formatter.format_local("+62 623 61751214", RegionCode::r#in()),
        Ok("+62 623 61751214".to_string())
    );
    assert_eq!(
        formatter.format_local("+44 20 8765 4321", RegionCode::us()),
        Ok("+44 20 8765 4321".to_string())
    );
    assert!(formatter.format_local("4155552671", RegionCode::zz()).is_err());
}

#[test]
fn format_number_for_mobile_dialing_same_region() {
    let formatter = get_phone_formatter();
    // NANPA numbers are always dialed internationally.
    assert_eq!(
        formatter.format_number_for_mobile_dialing("4155552671", RegionCode::us(), true),
        Ok("+1 415-555-2671".to_string())
    );
    assert_eq!(
        formatter.format_number_for_mobile_dialing("4155552671", RegionCode::us(), false),
        Ok("+14155552671".to_string())
    );
    assert_eq!(
        formatter.format_number_for_mobile_dialing("+44 20 8765 4321", RegionCode::gb(), true),
        Ok("020 8765 4321".to_string())
    );
    assert_eq!(
        formatter.format_number_for_mobile_dialing("+44 20 8765 4321", RegionCode::gb(), false),
        Ok("02087654321".to_string())
    );
}

#[test]
fn format_number_for_mobile_dialing_other_region() {
    let formatter = get_phone_formatter();
    assert_eq!(
        formatter.format_number_for_mobile_dialing("+44 20 8765 4321", RegionCode::us(), true),
        Ok("+44 20 8765 4321".to_string())
    );
    assert_eq!(
        formatter.format_number_for_mobile_dialing("+44 20 8765 4321", RegionCode::us(), false),
        Ok("+442087654321".to_string())
    );
}

#[test]
fn format_number_for_mobile_dialing_international_input() {
    let formatter = get_phone_formatter();
    assert_eq!(
        formatter.format_number_for_mobile_dialing("+44 121 234 5678", RegionCode::us(), true),
        Ok("+44 121 234 5678".to_string())
    );
    // Non-geographic numbers are dialed internationally from anywhere.
    assert_eq!(
        formatter.format_number_for_mobile_dialing("+800 1234 5678", RegionCode::us(), true),
        Ok("+800 1234 5678".to_string())
    );
    assert_eq!(
        formatter.format_number_for_mobile_dialing("+800 1234 5678", RegionCode::us(), false),
        Ok("+80012345678".to_string())
    );
}

#[test]
fn format_number_for_mobile_dialing_errors() {
    let formatter = get_phone_formatter();
    assert!(formatter
        .format_number_for_mobile_dialing("4155552671", RegionCode::invalid(), true)
        .is_err_and(|err| matches!(err, FormatError::InvalidRegion(_))));
    assert!(formatter
        .format_number_for_mobile_dialing("ccc", RegionCode::jp(), true)
        .is_err());
}

#[test]
fn region_code_for_number() {
    let formatter = get_phone_formatter();
    assert_eq!(formatter.region_code_for_number("+14155552671"), Ok("US".to_string()));
    assert_eq!(formatter.region_code_for_number("+44 20 8765 4321"), Ok("GB".to_string()));
    assert_eq!(
        formatter.region_code_for_number("4155552671"),
        Err(FormatError::MissingRegion)
    );
}

#[test]
fn example_numbers() {
    let formatter = get_phone_formatter();
    assert_eq!(formatter.example_landline_number(RegionCode::us()), Ok("2015550123".to_string()));
    assert_eq!(formatter.example_mobile_number(RegionCode::us()), Ok("2015550123".to_string()));
    assert_eq!(formatter.example_landline_number(RegionCode::gb()), Ok("1212345678".to_string()));
    assert_eq!(formatter.example_mobile_number(RegionCode::gb()), Ok("7400123456".to_string()));
    assert_eq!(formatter.example_landline_number(RegionCode::jp()), Ok("312345678".to_string()));
    assert_eq!(formatter.example_mobile_number(RegionCode::jp()), Ok("9012345678".to_string()));
}

#[test]
fn example_numbers_are_valid() {
    let formatter = get_phone_formatter();
    for region in [RegionCode::us(), RegionCode::gb(), RegionCode::jp()] {
        for kind in [PhoneNumberType::FixedLine, PhoneNumberType::Mobile] {
            let example = formatter.example_number(region, kind).unwrap();
            assert_eq!(
                formatter.is_valid_number(&example, region, Some(kind)),
                Ok(true),
                "example {} of type {:?} for {}",
                example,
                kind,
                region
            );
        }
    }
}

#[test]
fn example_number_errors() {
    let formatter = get_phone_formatter();
    assert!(formatter
        .example_landline_number(RegionCode::zz())
        .is_err_and(|err| matches!(err, FormatError::InvalidRegion(_))));
    assert_eq!(
        formatter.example_number(RegionCode::us(), PhoneNumberType::Unknown),
        Err(FormatError::NoExampleNumber {
            region: RegionCode::us().to_string(),
            kind: PhoneNumberType::Unknown,
        })
    );
}
