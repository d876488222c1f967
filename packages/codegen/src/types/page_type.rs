//! Page type hints for generation requests.

use serde::{Deserialize, Serialize};

/// Optional page type hint guiding generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Data entry forms with validation
    Form,

    /// Collections with search and filters
    List,

    /// Single-record detail views
    Detail,

    /// Stat cards and activity overviews
    Dashboard,
}

impl PageType {
    /// Lowercase name as used in prompts and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Form => "form",
            PageType::List => "list",
            PageType::Detail => "detail",
            PageType::Dashboard => "dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_wire_format() {
        let page_type: PageType = serde_json::from_str("\"dashboard\"").unwrap();
        assert_eq!(page_type, PageType::Dashboard);
        assert_eq!(serde_json::to_string(&PageType::Form).unwrap(), "\"form\"");
    }
}
