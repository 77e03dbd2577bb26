//! Phone number helpers: cleaning raw input, validation, formatting in
//! several regional conventions, region detection, example numbers and
//! country names.
//!
//! Numbering plan rules come from the metadata compiled into the
//! [`phonenumber`] crate. [`PHONE_FORMATTER`] exposes every operation with
//! typed errors, while the free functions at the crate root never fail and
//! return a fallback value instead.

mod phoneformatter;
mod sanitizer;
mod fallback;
pub mod i18n;

#[cfg(test)]
mod tests;

pub use fallback::{
    clean_phone, country_code_to_name, country_for_e164_number, example_landline_number,
    example_mobile_number, format_e164, format_international, format_local,
    format_number_for_mobile_dialing, format_rfc3966, is_valid_number,
};
pub use phoneformatter::{
    FormatError, PHONE_FORMATTER, PhoneNumberFormat, PhoneNumberType,
    phoneformatter::PhoneFormatter,
};
pub use phonenumber::PhoneNumber;
