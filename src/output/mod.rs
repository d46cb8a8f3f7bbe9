//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Types that can be rendered in every output format
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_vec_formats_as_table_and_json() {
        let rows = vec![Row {
            name: "a.txt".to_string(),
        }];

        let table = rows.format(OutputFormat::Table).unwrap();
        assert!(table.contains("NAME"));
        assert!(table.contains("a.txt"));

        let json = rows.format(OutputFormat::Json).unwrap();
        assert!(json.contains("\"name\": \"a.txt\""));
    }
}
