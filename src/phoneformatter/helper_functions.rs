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

use std::panic;

use phonenumber::{Mode, PhoneNumber, Type, country, metadata::Metadata};

use crate::i18n::RegionCode;

use super::{FormatError, PhoneNumberFormat, PhoneNumberType};

/// Turns a user supplied region code into the engine's region id.
/// Codes are trimmed and compared case-insensitively; "ZZ" is never valid.
pub(super) fn parse_region(region_code: &str) -> Result<country::Id, FormatError> {
    let trimmed = region_code.trim();
    if trimmed.is_empty() || RegionCode::is_unknown(trimmed) {
        log::warn!("Invalid or unknown region code provided: '{}'", region_code);
        return Err(FormatError::InvalidRegion(region_code.to_string()));
    }
    trimmed.to_ascii_uppercase().parse::<country::Id>().map_err(|_| {
        log::warn!("Invalid or unknown region code provided: '{}'", region_code);
        FormatError::InvalidRegion(region_code.to_string())
    })
}

/// Parses an already cleaned number. The engine has a few unchecked
/// unwraps, so panics are caught and reported as errors.
pub(super) fn parse_catching_panics(
    region: Option<country::Id>,
    phone_number: &str,
) -> Result<PhoneNumber, FormatError> {
    match panic::catch_unwind(|| phonenumber::parse(region, phone_number)) {
        Ok(Ok(number)) => Ok(number),
        Ok(Err(err)) => {
            log::trace!("Failed to parse '{}' for region {:?}: {:?}", phone_number, region, err);
            Err(FormatError::FailedToParse(format!("{:?}", err)))
        }
        Err(_) => {
            log::error!("Phone number engine panicked while parsing '{}'", phone_number);
            Err(FormatError::EnginePanicked(phone_number.to_string()))
        }
    }
}

pub(super) fn engine_mode(number_format: PhoneNumberFormat) -> Mode {
    match number_format {
        PhoneNumberFormat::E164 => Mode::E164,
        PhoneNumberFormat::International => Mode::International,
        PhoneNumberFormat::National => Mode::National,
        PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
    }
}

/// Maps the engine's number type onto ours. Engine types that have no
/// libphonenumber counterpart (short codes, emergency, ...) are `Unknown`.
pub(super) fn number_type_from_engine(engine_type: Type) -> PhoneNumberType {
    match engine_type {
        Type::FixedLine => PhoneNumberType::FixedLine,
        Type::Mobile => PhoneNumberType::Mobile,
        Type::FixedLineOrMobile => PhoneNumberType::FixedLineOrMobile,
        Type::TollFree => PhoneNumberType::TollFree,
        Type::PremiumRate => PhoneNumberType::PremiumRate,
        Type::SharedCost => PhoneNumberType::SharedCost,
        Type::Voip => PhoneNumberType::VoIP,
        Type::PersonalNumber => PhoneNumberType::PersonalNumber,
        Type::Pager => PhoneNumberType::Pager,
        Type::Uan => PhoneNumberType::UAN,
        Type::Voicemail => PhoneNumberType::VoiceMail,
        _ => PhoneNumberType::Unknown,
    }
}

/// Returns the example national number the metadata carries for the given
/// type. `FixedLineOrMobile` uses the fixed-line example, as libphonenumber does.
pub(super) fn example_for_type(metadata: &Metadata, kind: PhoneNumberType) -> Option<String> {
    let descriptors = metadata.descriptors();
    let descriptor = match kind {
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => descriptors.fixed_line(),
        PhoneNumberType::Mobile => descriptors.mobile(),
        PhoneNumberType::TollFree => descriptors.toll_free(),
        PhoneNumberType::PremiumRate => descriptors.premium_rate(),
        PhoneNumberType::SharedCost => descriptors.shared_cost(),
        PhoneNumberType::VoIP => descriptors.voip(),
        PhoneNumberType::PersonalNumber => descriptors.personal_number(),
        PhoneNumberType::Pager => descriptors.pager(),
        PhoneNumberType::UAN => descriptors.uan(),
        PhoneNumberType::VoiceMail => descriptors.voicemail(),
        PhoneNumberType::Unknown => None,
    }?;
    descriptor.example().map(|example| example.to_string())
}
