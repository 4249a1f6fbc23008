//! Page Location
//!
//! Read-only view of the page URL: query parameters and the current site
//! directory. The resolver reads both once, at initialization.

use crate::helpers::parse_query_string;

/// Contract for the page-location source
pub trait PageLocation: Send + Sync {
    /// Value of a query-string parameter, `None` when absent
    fn query_param(&self, name: &str) -> Option<String>;

    /// First segment of the page path, used for brand lookup
    fn current_dir(&self) -> String;
}

/// Location parsed once from a URL or a path-with-query string
#[derive(Debug, Clone)]
pub struct UrlLocation {
    dir: String,
    params: Vec<(String, String)>,
}

impl UrlLocation {
    /// Parse a full URL (`https://host/dir/page?k=v`) or a bare
    /// path-with-query (`/dir/page?k=v`). Fragments are ignored.
    pub fn parse(url: &str) -> Self {
        let without_fragment = url.split('#').next().unwrap_or_default();

        // Drop `scheme://host` when present, keeping the path onward.
        let path_and_query = match without_fragment.find("://") {
            Some(idx) => {
                let rest = &without_fragment[idx + 3..];
                rest.find('/').map(|slash| &rest[slash..]).unwrap_or("")
            }
            None => without_fragment,
        };

        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, query),
            None => (path_and_query, ""),
        };

        let dir = path
            .split('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or_default()
            .to_string();

        Self {
            dir,
            params: parse_query_string(query),
        }
    }
}

impl PageLocation for UrlLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn current_dir(&self) -> String {
        self.dir.clone()
    }
}
