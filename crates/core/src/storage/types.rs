use serde::Deserialize;

/// Offset pagination window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    /// Number of rows to skip.
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of rows to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_page_deserializes_missing_fields() {
        let page: Page = serde_json::from_str(r#"{"skip":20}"#).unwrap();
        assert_eq!(page.skip, 20);
        assert_eq!(page.limit, 10);
    }
}
