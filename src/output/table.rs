//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with centered headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No files found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct FileRow {
        #[tabled(rename = "NAME")]
        name: String,
        #[tabled(rename = "SIZE")]
        size: String,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<FileRow> = vec![];
        assert_eq!(format_table(&rows), "No files found.");
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![
            FileRow {
                name: "a.txt".to_string(),
                size: "12 B".to_string(),
            },
            FileRow {
                name: "b.png".to_string(),
                size: "1.5 KB".to_string(),
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("NAME"));
        assert!(result.contains("SIZE"));
        assert!(result.contains("a.txt"));
        assert!(result.contains("1.5 KB"));
        // Rounded style corners
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
