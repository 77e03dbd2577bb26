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

use thiserror::Error;

use super::PhoneNumberType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Region code is empty, malformed, `ZZ`, or unknown to the metadata.
    #[error("Invalid or unsupported region code: '{0}'")]
    InvalidRegion(String),
    /// A national number was given without a region to interpret it in.
    #[error("A region is required for numbers without a leading '+'")]
    MissingRegion,
    #[error("Failed to parse phone number: {0}")]
    FailedToParse(String),
    /// The numbering plan engine panicked on this input; the panic was caught.
    #[error("Phone number engine panicked while parsing '{0}'")]
    EnginePanicked(String),
    #[error("Could not determine a region for the number")]
    UnknownRegion,
    #[error("Region {region} has no example number of type {kind:?}")]
    NoExampleNumber {
        region: String,
        kind: PhoneNumberType,
    },
    #[error("Unknown phone number type code: {0}")]
    UnknownNumberTypeCode(i32),
}
