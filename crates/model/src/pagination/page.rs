use crate::records::record::Record;
use serde::{Deserialize, Serialize};

/// One page of records, newest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub records: Vec<Record>,

    /// Token for the following page. `None` means this is the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_continuation_token: Option<String>,
}

impl Page {
    pub fn is_last(&self) -> bool {
        self.next_continuation_token.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_omitted_on_last_page() {
        let page = Page::default();
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"records":[]}"#);
        assert!(page.is_last());
    }
}
