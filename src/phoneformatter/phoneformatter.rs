// Copyright (C) 2009 The Libphonenumber Authors
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

use log::trace;
use phonenumber::{PhoneNumber, metadata::DATABASE};

use crate::{
    i18n::RegionCode,
    phoneformatter::{
        FormatError, PhoneNumberFormat, PhoneNumberType,
        helper_constants::{
            NANPA_COUNTRY_CODE, PLUS_SIGN, REGION_REQUIRING_CARRIER_CODE,
            REGIONS_DIALLED_INTERNATIONALLY_FROM_MOBILE,
        },
        helper_functions::{
            engine_mode, example_for_type, number_type_from_engine, parse_catching_panics,
            parse_region,
        },
    },
    sanitizer::Sanitizer,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, FormatError>;

/// Cleans, validates and formats phone numbers. Numbering plan knowledge
/// comes from the metadata compiled into the `phonenumber` crate; this type
/// only decides what to ask it and how to present the answer.
///
/// Every input number goes through [`PhoneFormatter::clean_phone`] before it
/// reaches the engine.
pub struct PhoneFormatter {
    /// Helper holding the regular expressions used to sanitize input.
    sanitizer: Sanitizer,
}

impl PhoneFormatter {
    pub(crate) fn new() -> Self {
        Self {
            sanitizer: Sanitizer::new(),
        }
    }

    /// Strips all characters except digits and a single leading `+`.
    pub fn clean_phone(&self, phone_number: &str) -> String {
        self.sanitizer.clean_phone(phone_number)
    }

    /// Parses `phone_number` in the context of `region_code`.
    ///
    /// Without a region the number must carry its country code after a
    /// leading `+`. A number with a leading `+` is always read as
    /// international, the region is still checked but otherwise unused.
    pub fn parse(&self, phone_number: &str, region_code: Option<&str>) -> Result<PhoneNumber> {
        let cleaned = self.clean_phone(phone_number);
        let region = region_code.map(parse_region).transpose()?;
        if cleaned.starts_with(PLUS_SIGN) {
            // The engine would strip the region's national prefix from the
            // digits after the country code.
            return parse_catching_panics(None, &cleaned);
        }
        if region.is_none() {
            trace!("Number '{}' has no leading plus and no region was given", cleaned);
            return Err(FormatError::MissingRegion);
        }
        parse_catching_panics(region, &cleaned)
    }

    /// Tests whether a number matches a valid pattern for its region. This
    /// says nothing about whether the number is actually in use.
    ///
    /// With `kind` the number must also be of that type, where
    /// `FixedLineOrMobile` numbers satisfy both `FixedLine` and `Mobile`.
    pub fn is_valid_number(
        &self,
        phone_number: &str,
        region_code: &str,
        kind: Option<PhoneNumberType>,
    ) -> Result<bool> {
        let number = self.parse(phone_number, Some(region_code))?;
        if !phonenumber::is_valid(&number) {
            trace!("Number '{}' is not valid for region {}", phone_number, region_code);
            return Ok(false);
        }
        let Some(requested) = kind else {
            return Ok(true);
        };
        let actual = Self::get_number_type(&number);
        if !actual.satisfies(requested) {
            trace!("Number '{}' is {:?}, {:?} was requested", phone_number, actual, requested);
            return Ok(false);
        }
        Ok(true)
    }

    /// Returns the type of the number according to the region's metadata.
    pub fn number_type(&self, phone_number: &str, region_code: &str) -> Result<PhoneNumberType> {
        let number = self.parse(phone_number, Some(region_code))?;
        Ok(Self::get_number_type(&number))
    }

    /// Formats a number given in the context of `region_code`.
    pub fn format(
        &self,
        phone_number: &str,
        region_code: &str,
        number_format: PhoneNumberFormat,
    ) -> Result<String> {
        let number = self.parse(phone_number, Some(region_code))?;
        Ok(Self::format_parsed(&number, number_format))
    }

    /// Formats the number the way it is written inside `region_code`: national
    /// format for numbers of that region, international format for numbers
    /// belonging anywhere else.
    pub fn format_local(&self, phone_number: &str, region_code: &str) -> Result<String> {
        let region = format!("{:?}", parse_region(region_code)?);
        let number = self.parse(phone_number, Some(region_code))?;
        let number_format = match Self::get_region_code_for_number(&number) {
            Some(number_region) if number_region == region => PhoneNumberFormat::National,
            number_region => {
                trace!("Number '{}' belongs to {:?}, not {}", phone_number, number_region, region);
                PhoneNumberFormat::International
            }
        };
        Ok(Self::format_parsed(&number, number_format))
    }

    /// Returns a number formatted in such a way that it can be dialed from a
    /// mobile phone in `calling_from`. If the number cannot be reached from
    /// that region the result is an empty string.
    ///
    /// With `with_formatting` unset the result keeps only diallable
    /// characters, and numbers dialed across borders come out as E164.
    pub fn format_number_for_mobile_dialing(
        &self,
        phone_number: &str,
        calling_from: &str,
        with_formatting: bool,
    ) -> Result<String> {
        let calling_from_id = parse_region(calling_from)?;
        let number = self.parse(phone_number, Some(calling_from))?;
        let calling_from = format!("{:?}", calling_from_id);

        let Some(region_code) = Self::get_region_code_for_number(&number) else {
            trace!("Number '{}' has an unknown country calling code", phone_number);
            return Ok(String::new());
        };
        let number_type = Self::get_number_type(&number);
        let is_valid_number = number_type != PhoneNumberType::Unknown;

        let formatted_number = if calling_from == region_code {
            let is_fixed_line_or_mobile = number_type.is_fixed_line_or_mobile();
            if region_code == REGION_REQUIRING_CARRIER_CODE && is_fixed_line_or_mobile {
                // Parsed numbers never carry a preferred domestic carrier code,
                // and without one these numbers can't be connected.
                trace!("Number '{}' needs a carrier code to be dialed in {}", phone_number, region_code);
                String::new()
            } else if number.code().value() == NANPA_COUNTRY_CODE {
                // International format always works for NANPA numbers, except
                // for possible short numbers which are dialed nationally.
                let number_format = if is_valid_number {
                    PhoneNumberFormat::International
                } else {
                    PhoneNumberFormat::National
                };
                Self::format_parsed(&number, number_format)
            } else {
                // Carrier codes or special prefixes would be needed to dial
                // these nationally, international format always works.
                let number_format = if is_fixed_line_or_mobile
                    && REGIONS_DIALLED_INTERNATIONALLY_FROM_MOBILE.contains(&region_code.as_str())
                {
                    PhoneNumberFormat::International
                } else {
                    PhoneNumberFormat::National
                };
                Self::format_parsed(&number, number_format)
            }
        } else if is_valid_number {
            // Short numbers are assumed not to be diallable from outside their
            // region, so only valid regular length numbers get here.
            let number_format = if with_formatting {
                PhoneNumberFormat::International
            } else {
                PhoneNumberFormat::E164
            };
            return Ok(Self::format_parsed(&number, number_format));
        } else {
            trace!("Number '{}' can't be dialed from {}", phone_number, calling_from);
            String::new()
        };

        if with_formatting {
            Ok(formatted_number)
        } else {
            Ok(self.sanitizer.normalize_diallable_chars_only(&formatted_number))
        }
    }

    /// Returns the ISO 3166-1 alpha-2 code of the region a number given in
    /// E164 format belongs to.
    pub fn region_code_for_number(&self, phone_number: &str) -> Result<String> {
        let number = self.parse(phone_number, None)?;
        Self::get_region_code_for_number(&number)
            .filter(|region_code| region_code.as_str() != RegionCode::un001())
            .ok_or(FormatError::UnknownRegion)
    }

    /// Returns the national significant number of the metadata example for
    /// `kind` in `region_code`, e.g. `"2015550123"` for a US fixed line.
    pub fn example_number(&self, region_code: &str, kind: PhoneNumberType) -> Result<String> {
        let region = parse_region(region_code)?;
        let region = format!("{:?}", region);
        DATABASE
            .by_id(&region)
            .and_then(|metadata| example_for_type(metadata, kind))
            .ok_or_else(|| {
                trace!("No example number of type {:?} for region {}", kind, region);
                FormatError::NoExampleNumber { region, kind }
            })
    }

    pub fn example_landline_number(&self, region_code: &str) -> Result<String> {
        self.example_number(region_code, PhoneNumberType::FixedLine)
    }

    pub fn example_mobile_number(&self, region_code: &str) -> Result<String> {
        self.example_number(region_code, PhoneNumberType::Mobile)
    }

    fn format_parsed(number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        number.format().mode(engine_mode(number_format)).to_string()
    }

    fn get_number_type(number: &PhoneNumber) -> PhoneNumberType {
        number_type_from_engine(number.number_type(&DATABASE))
    }

    /// Region of the metadata the number resolves to; `"001"` for
    /// non-geographical entities.
    fn get_region_code_for_number(number: &PhoneNumber) -> Option<String> {
        number.metadata(&DATABASE).map(|metadata| metadata.id().to_string())
    }
}
