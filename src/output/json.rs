//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Position of `data` within a paginated listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

/// Pagination details for list output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                pagination: None,
            },
        }
    }

    pub fn with_pagination(mut self, info: PageInfo) -> Self {
        self.meta.pagination = Some(info);
        self
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Format one page of a listing as pretty-printed JSON
pub fn format_json_page<T: Serialize + ?Sized>(
    data: &T,
    info: PageInfo,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data).with_pagination(info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec!["item1", "item2"]);

        assert_eq!(output.data, vec!["item1", "item2"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
        assert!(output.meta.pagination.is_none());
    }

    #[test]
    fn test_format_json_keeps_backend_fields() {
        let items = json!([{"id": 1, "nome": "Carlos", "status": "pendente"}]);

        let parsed: Value = serde_json::from_str(&format_json(&items).unwrap()).unwrap();

        assert_eq!(parsed["data"], items);
        assert!(parsed["meta"]["timestamp"].is_string());
        assert!(parsed["meta"].get("pagination").is_none());
    }

    #[test]
    fn test_format_json_page() {
        let info = PageInfo {
            page: 2,
            page_size: 8,
            total_items: 9,
            total_pages: 2,
        };

        let result = format_json_page(&json!([{"id": 9}]), info).unwrap();
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["meta"]["pagination"]["page"], 2);
        assert_eq!(parsed["meta"]["pagination"]["total_items"], 9);
    }

    #[test]
    fn test_format_json_empty_vec() {
        let items: Vec<Value> = vec![];
        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\": []"));
    }
}
