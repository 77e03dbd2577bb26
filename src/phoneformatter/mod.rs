pub(crate) mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phoneformatter;

use std::sync::LazyLock;

pub use enums::{PhoneNumberFormat, PhoneNumberType};
pub use errors::FormatError;
use crate::phoneformatter::phoneformatter::PhoneFormatter;

pub static PHONE_FORMATTER: LazyLock<PhoneFormatter> = LazyLock::new(|| {
    PhoneFormatter::new()
});
