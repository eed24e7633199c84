//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[derive(Tabled)]
struct FieldRow<'a> {
    #[tabled(rename = "FIELD")]
    field: &'a str,
    #[tabled(rename = "VALUE")]
    value: &'a str,
}

/// Format labelled values as a two-column table
pub fn format_fields(fields: &[(&str, String)]) -> String {
    let rows: Vec<FieldRow<'_>> = fields
        .iter()
        .map(|(field, value)| FieldRow {
            field,
            value: value.as_str(),
        })
        .collect();
    format_table(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(format_table(&items), "No results found.");
    }

    #[test]
    fn test_format_table_rows() {
        let items = vec![
            TestRow {
                id: "1".to_string(),
                name: "João".to_string(),
            },
            TestRow {
                id: "2".to_string(),
                name: "Pedro".to_string(),
            },
        ];

        let result = format_table(&items);

        assert!(result.contains("ID"));
        assert!(result.contains("NAME"));
        assert!(result.contains("João"));
        assert!(result.contains("Pedro"));
    }

    #[test]
    fn test_format_fields() {
        let result = format_fields(&[("Status", "pendente".to_string())]);
        assert!(result.contains("FIELD"));
        assert!(result.contains("Status"));
        assert!(result.contains("pendente"));
        assert!(result.starts_with('╭'));
    }
}
