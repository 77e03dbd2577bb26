/**
 * Turns resources/country_names.txt into a sorted static table that is
 * included by src/i18n/country_names.rs
 */

use std::{collections::BTreeMap, env, fmt::Write as _, fs::{self, File}, io::{BufRead, BufReader}, path::Path};

use thiserror::Error;

const COUNTRY_NAMES_PATH: &str = "resources/country_names.txt";
const GENERATED_FILE_NAME: &str = "country_names.rs";

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num} has invalid country code '{code}', expected two ASCII uppercase letters")]
    InvalidCountryCode { line_num: usize, code: String },

    #[error("Line {line_num} has no '|' separator")]
    MissingSeparator { line_num: usize },

    #[error("Country code '{code}' is defined twice (second time on line {line_num})")]
    DuplicateCountryCode { line_num: usize, code: String },

    #[error("Environment variable OUT_DIR is not set")]
    MissingOutDir,

    #[error("Failed to render generated table: {0}")]
    Render(#[from] std::fmt::Error),
}

fn parse_country_names(path: &str, names: &mut BTreeMap<String, String>) -> Result<(), BuildError> {
    names.clear();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((code, name)) = line.split_once('|') else {
            return Err(BuildError::MissingSeparator { line_num: line_number });
        };
        let code = code.trim();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(BuildError::InvalidCountryCode {
                line_num: line_number,
                code: code.to_string(),
            });
        }
        if names.insert(code.to_string(), name.trim().to_string()).is_some() {
            return Err(BuildError::DuplicateCountryCode {
                line_num: line_number,
                code: code.to_string(),
            });
        }
    }

    Ok(())
}

fn render_table(names: &BTreeMap<String, String>) -> Result<String, BuildError> {
    let mut out = String::with_capacity(names.len() * 48);
    writeln!(out, "// Generated by build/rust_build.rs from {}, do not edit.", COUNTRY_NAMES_PATH)?;
    writeln!(out, "pub static COUNTRY_NAMES: [(&str, &str); {}] = [", names.len())?;
    // BTreeMap iteration keeps the table sorted by code for binary search
    for (code, name) in names {
        writeln!(out, "    ({:?}, {:?}),", code, name)?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", COUNTRY_NAMES_PATH);

    let mut names = BTreeMap::new();
    parse_country_names(COUNTRY_NAMES_PATH, &mut names)?;

    let out_dir = env::var_os("OUT_DIR").ok_or(BuildError::MissingOutDir)?;
    let destination = Path::new(&out_dir).join(GENERATED_FILE_NAME);
    fs::write(destination, render_table(&names)?)?;
    Ok(())
}
