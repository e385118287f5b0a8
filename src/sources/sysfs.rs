//! Bounded reads of single-line sysfs attributes

use crate::core::constants::MAX_ATTRIBUTE_LEN;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Read the first line of an attribute file, without the trailing newline.
///
/// Returns `None` if the file cannot be opened or read.
pub fn read_attribute(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file.take(MAX_ATTRIBUTE_LEN));
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    if line.ends_with('\n') {
        line.pop();
    }
    Some(line)
}

/// Read and parse a numeric attribute. Unreadable and unparsable both give `None`.
pub fn read_value<T: FromStr>(path: &Path) -> Option<T> {
    let line = read_attribute(path)?;
    match line.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::debug!("Unparsable value {:?} in {}", line, path.display());
            None
        }
    }
}
