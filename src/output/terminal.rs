//! Terminal output utilities.

use std::error::Error;
use std::io::Write;

/// Format a value as a left-aligned field of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn pad_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Write the whole rendered output to stdout in a single write.
pub fn write_stdout(text: &str) -> Result<(), Box<dyn Error>> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_field_short() {
        assert_eq!(pad_field("test", 10), "test      ");
    }

    #[test]
    fn test_pad_field_exact() {
        assert_eq!(pad_field("test", 4), "test");
    }

    #[test]
    fn test_pad_field_long() {
        assert_eq!(pad_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_pad_field_number() {
        assert_eq!(pad_field(42, 4), "42  ");
    }
}
