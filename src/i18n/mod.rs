mod region_code;
mod country_names;

pub use region_code::RegionCode;
pub use country_names::{country_code_to_name, COUNTRY_NAMES};
