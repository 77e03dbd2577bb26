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

// `COUNTRY_NAMES`: ISO 3166-1 alpha-2 codes paired with English names,
// sorted by code. Source of truth is resources/country_names.txt.
include!(concat!(env!("OUT_DIR"), "/country_names.rs"));

/// Looks up the English name of a country by its ISO 3166-1 alpha-2 code.
///
/// The lookup ignores ASCII case and surrounding whitespace, so `"dj"`,
/// `" DJ "` and `"Dj"` all resolve to `"Djibouti"`. Anything that is not a
/// known two-letter code yields `None`.
pub fn country_code_to_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    if code.len() != 2 || !code.is_ascii() {
        log::trace!("'{code}' is not shaped like an ISO 3166-1 alpha-2 code");
        return None;
    }
    let upper = code.to_ascii_uppercase();
    COUNTRY_NAMES
        .binary_search_by(|(known, _)| (*known).cmp(upper.as_str()))
        .ok()
        .map(|index| COUNTRY_NAMES[index].1)
}
