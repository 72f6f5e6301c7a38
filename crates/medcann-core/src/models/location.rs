//! Browser location and navigation request models.

use serde::{Deserialize, Serialize};

/// Current browser location, split into path, query pairs and fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// URL pathname (e.g. `/app/clinical/professional/dashboard`)
    pub path: String,
    /// Query pairs in their original order
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`
    pub fragment: Option<String>,
}

impl Location {
    /// Parse a relative href such as `/app/x?section=lessons#top`.
    ///
    /// Never fails: a missing path becomes `/` and pairs without `=` get an
    /// empty value.
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = match href.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (href, None),
        };
        let (path, query_str) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };

        let query = query_str
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();

        Self {
            path: if path.is_empty() { "/".into() } else { path.to_string() },
            query,
            fragment,
        }
    }

    /// First value for a query key.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Href with `key` set to `value`, keeping every other pair in place.
    /// An absent key is appended.
    pub fn with_query_param(&self, key: &str, value: &str) -> String {
        let mut query: Vec<(String, String)> = Vec::with_capacity(self.query.len() + 1);
        let mut replaced = false;
        for (k, v) in &self.query {
            if k == key {
                if !replaced {
                    query.push((k.clone(), value.to_string()));
                    replaced = true;
                }
            } else {
                query.push((k.clone(), v.clone()));
            }
        }
        if !replaced {
            query.push((key.to_string(), value.to_string()));
        }

        let mut href = self.path.clone();
        href.push('?');
        href.push_str(
            &query
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&"),
        );
        if let Some(fragment) = &self.fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

/// How a navigation affects browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Replace the current entry (automatic corrections)
    Replace,
    /// Push a new entry (deliberate role switches)
    Push,
}

/// A client-side navigation for the router to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    /// Fully formed target href
    pub href: String,
    pub mode: HistoryMode,
}

impl NavigationRequest {
    pub fn replace(href: String) -> Self {
        Self {
            href,
            mode: HistoryMode::Replace,
        }
    }

    pub fn push(href: String) -> Self {
        Self {
            href,
            mode: HistoryMode::Push,
        }
    }
}
