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

use regex::Regex;

use crate::phoneformatter::helper_constants::{DIALLABLE_CHARS, PLUS_CHARS, PLUS_SIGN};

/// Regular expressions used to strip user input down to something the
/// numbering plan engine can parse. Compiled once per formatter.
pub(crate) struct Sanitizer {
    /// Anything that is neither an ASCII digit nor a plus sign.
    non_digit_or_plus_pattern: Regex,
    /// Anything that is not an ASCII digit.
    non_digit_pattern: Regex,
    /// Anything that can't be entered on a phone keypad.
    non_diallable_pattern: Regex,
}

impl Sanitizer {
    pub fn new() -> Self {
        // it'll be initialized only once, so we can use slow format!
        Self {
            non_digit_or_plus_pattern: Regex::new(&format!("[^0-9{}]", PLUS_CHARS)).unwrap(),
            non_digit_pattern: Regex::new("[^0-9]").unwrap(),
            non_diallable_pattern: Regex::new(&format!("[^{}]", DIALLABLE_CHARS)).unwrap(),
        }
    }

    /// Removes every character except digits, keeping a plus sign only if it
    /// leads the digits that survive.
    ///
    /// Unicode decimal digits (full-width, Arabic-Indic, ...) are converted to
    /// ASCII first, so `"４１５"` cleans to `"415"`.
    pub fn clean_phone(&self, phone: &str) -> String {
        let normalized = dec_from_char::normalize_decimals(phone);
        let stripped = self.non_digit_or_plus_pattern.replace_all(&normalized, "");
        let has_leading_plus = stripped
            .chars()
            .next()
            .is_some_and(|first| PLUS_CHARS.contains(first));

        let digits = self.non_digit_pattern.replace_all(&stripped, "");
        if has_leading_plus {
            fast_cat::concat_str!(PLUS_SIGN, &digits)
        } else {
            digits.into_owned()
        }
    }

    /// Keeps only the characters that can be dialed: digits, `+`, `*` and `#`.
    pub fn normalize_diallable_chars_only(&self, phone: &str) -> String {
        let normalized = dec_from_char::normalize_decimals(phone);
        self.non_diallable_pattern
            .replace_all(&normalized, "")
            .into_owned()
    }
}
