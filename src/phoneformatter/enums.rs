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

use strum::{AsRefStr, EnumIter, EnumString};

use super::errors::FormatError;

/// Defines the various standardized formats for representing phone numbers.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// Always starts with a `+` followed by the country code, no separators.
    E164,
    /// **International format.**
    /// Country code plus the number grouped the way the region writes it.
    International,
    /// **National format.**
    /// Used for dialing within the number's own country; may include a
    /// national prefix (like '0').
    National,
    /// **RFC3966 format.**
    /// A `tel:` URI with hyphens as separators.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
///
/// The numeric codes returned by [`PhoneNumberType::code`] and accepted by
/// `TryFrom<i32>` are the ones libphonenumber uses, and names parse the way
/// libphonenumber spells them (`"FIXED_LINE"`, `"VOIP"`, ...), ignoring case.
#[derive(Debug, EnumIter, EnumString, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// Traditional landlines tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    TollFree,
    /// **Premium-rate numbers.**
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    #[strum(serialize = "VOIP")]
    VoIP,
    /// **Personal numbers.**
    /// Associated with a person and routable to mobile or fixed-line.
    PersonalNumber,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    #[strum(serialize = "UAN")]
    UAN,
    /// **Voicemail access numbers.**
    #[strum(serialize = "VOICEMAIL")]
    VoiceMail,
    /// **Unknown type.**
    /// The number does not match any of the known patterns for its region.
    Unknown,
}

impl PhoneNumberType {
    /// Numeric code of the type as libphonenumber defines it.
    pub fn code(self) -> i32 {
        match self {
            PhoneNumberType::FixedLine => 0,
            PhoneNumberType::Mobile => 1,
            PhoneNumberType::FixedLineOrMobile => 2,
            PhoneNumberType::TollFree => 3,
            PhoneNumberType::PremiumRate => 4,
            PhoneNumberType::SharedCost => 5,
            PhoneNumberType::VoIP => 6,
            PhoneNumberType::PersonalNumber => 7,
            PhoneNumberType::Pager => 8,
            PhoneNumberType::UAN => 9,
            PhoneNumberType::VoiceMail => 10,
            PhoneNumberType::Unknown => -1,
        }
    }

    /// Returns `true` if a number of type `self` satisfies a request for
    /// `requested`. Regions that can't tell fixed-line from mobile numbers
    /// report `FixedLineOrMobile`, which satisfies both.
    pub fn satisfies(self, requested: PhoneNumberType) -> bool {
        self == requested
            || (self == PhoneNumberType::FixedLineOrMobile
                && matches!(requested, PhoneNumberType::FixedLine | PhoneNumberType::Mobile))
    }

    pub(crate) fn is_fixed_line_or_mobile(self) -> bool {
        matches!(
            self,
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Mobile
        )
    }
}

impl TryFrom<i32> for PhoneNumberType {
    type Error = FormatError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        use strum::IntoEnumIterator;

        PhoneNumberType::iter()
            .find(|kind| kind.code() == code)
            .ok_or(FormatError::UnknownNumberTypeCode(code))
    }
}
