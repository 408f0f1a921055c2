//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Render a value in the chosen format.
///
/// `pretty` is only called for [`OutputFormat::Pretty`].
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => Ok(pretty(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_picks_formatter() {
        let value = vec!["a", "b"];

        let json = render(&value, OutputFormat::Json, |_| unreachable!()).unwrap();
        let pretty = render(&value, OutputFormat::Pretty, |v| v.join(", ")).unwrap();

        assert_eq!(json, r#"["a","b"]"#);
        assert_eq!(pretty, "a, b");
    }
}
