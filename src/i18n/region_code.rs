pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Region code used by libphonenumber metadata for non-geographical
    /// entities such as +800 (International Toll Free Service).
    pub fn un001() -> &'static str {
        return "001";
    }

    /// Returns `true` if `region_code` is the "unknown" region, ignoring case.
    pub fn is_unknown(region_code: &str) -> bool {
        region_code.trim().eq_ignore_ascii_case(Self::get_unknown())
    }
}
