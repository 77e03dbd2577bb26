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

pub const PLUS_SIGN: &'static str = "+";
// ASCII plus and its full-width variant.
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";
// Characters kept when a number is reduced to what can be typed on a keypad.
pub const DIALLABLE_CHARS: &'static str = "0-9+*#";

pub const NANPA_COUNTRY_CODE: u16 = 1;

// Regions whose fixed-line and mobile numbers can only be dialed reliably
// from a mobile phone in international format, even from inside the region.
pub const REGIONS_DIALLED_INTERNATIONALLY_FROM_MOBILE: [&'static str; 3] = ["MX", "CL", "UZ"];
// Fixed-line and mobile numbers here need a carrier code when dialed inside
// the region.
pub const REGION_REQUIRING_CARRIER_CODE: &'static str = "BR";
