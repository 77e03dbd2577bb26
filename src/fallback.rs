// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Best-effort helpers on top of [`PHONE_FORMATTER`].
//!
//! None of these functions fail. Whenever the underlying operation returns
//! an error it is logged at debug level and a fallback value is returned
//! instead: `false`, an empty string, or the caller's original input,
//! depending on the function. Use [`PHONE_FORMATTER`] directly to see the
//! errors.

use log::debug;

use crate::{
    i18n,
    phoneformatter::{FormatError, PHONE_FORMATTER, PhoneNumberFormat, PhoneNumberType},
};

fn or_fallback<T>(operation: &str, result: Result<T, FormatError>, fallback: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|err| {
        debug!("{} failed, using fallback value: {}", operation, err);
        fallback()
    })
}

/// Removes any non numeric characters from the phone number but leaves a
/// plus sign at the beginning.
///
/// ```
/// assert_eq!(i18n_phone_formatter::clean_phone("+1 (415) 555-2671"), "+14155552671");
/// ```
pub fn clean_phone(phone: &str) -> String {
    PHONE_FORMATTER.clean_phone(phone)
}

/// Tests whether a phone number matches a valid pattern in `country`, and
/// optionally is of the given type. Returns `false` if the number can't be
/// parsed.
pub fn is_valid_number(phone: &str, country: &str, kind: Option<PhoneNumberType>) -> bool {
    or_fallback(
        "is_valid_number",
        PHONE_FORMATTER.is_valid_number(phone, country, kind),
        || false,
    )
}

/// Formats the number as E164, or returns an empty string.
pub fn format_e164(country: &str, phone: &str) -> String {
    or_fallback(
        "format_e164",
        PHONE_FORMATTER.format(phone, country, PhoneNumberFormat::E164),
        String::new,
    )
}

/// Formats the number in international format, or returns `phone` as given.
pub fn format_international(country: &str, phone: &str) -> String {
    or_fallback(
        "format_international",
        PHONE_FORMATTER.format(phone, country, PhoneNumberFormat::International),
        || phone.to_string(),
    )
}

/// Formats the number the way it's written inside `country`. Numbers from
/// other countries come out in international format. Falls back to
/// [`format_international`].
pub fn format_local(country: &str, phone: &str) -> String {
    PHONE_FORMATTER
        .format_local(phone, country)
        .unwrap_or_else(|err| {
            debug!("format_local failed, trying international format: {}", err);
            format_international(country, phone)
        })
}

/// Formats the number as a `tel:` URI, or returns an empty string.
pub fn format_rfc3966(country: &str, phone: &str) -> String {
    or_fallback(
        "format_rfc3966",
        PHONE_FORMATTER.format(phone, country, PhoneNumberFormat::RFC3966),
        String::new,
    )
}

/// Returns the number formatted so it can be dialed from a mobile phone in
/// `country`. If the number can't be reached from there, or can't be
/// parsed, the result is an empty string.
pub fn format_number_for_mobile_dialing(country: &str, phone: &str) -> String {
    or_fallback(
        "format_number_for_mobile_dialing",
        PHONE_FORMATTER.format_number_for_mobile_dialing(phone, country, true),
        String::new,
    )
}

/// Returns the region code for an E164 formatted number, or an empty string.
pub fn country_for_e164_number(phone: &str) -> String {
    or_fallback(
        "country_for_e164_number",
        PHONE_FORMATTER.region_code_for_number(phone),
        String::new,
    )
}

/// Example fixed-line national number for `country`, or an empty string.
pub fn example_landline_number(country: &str) -> String {
    or_fallback(
        "example_landline_number",
        PHONE_FORMATTER.example_landline_number(country),
        String::new,
    )
}

/// Example mobile national number for `country`, or an empty string.
pub fn example_mobile_number(country: &str) -> String {
    or_fallback(
        "example_mobile_number",
        PHONE_FORMATTER.example_mobile_number(country),
        String::new,
    )
}

/// English name for an ISO 3166-1 alpha-2 code, ignoring case.
pub fn country_code_to_name(code: &str) -> Option<&'static str> {
    i18n::country_code_to_name(code)
}
