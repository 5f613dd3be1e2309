//! Test settings
//!
//! A test's metadata can be given as a typed [`TestSettings`] value or as a
//! block of line comments, the form test authors write next to their steps:
//!
//! ```text
//! // title: search and delete something
//! // tags: search, delete-content
//! // browsers: chrome, firefox
//! // disabled
//! ```
//!
//! Comment extraction is purely textual. Unknown keys are kept in the
//! [`SettingsMap`] but ignored when building [`TestSettings`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Value of one comment setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Bare `// name` line
    Flag,
    /// `// name: a, b, c`
    List(Vec<String>),
}

/// Settings mined from comment text, keyed by setting name
pub type SettingsMap = BTreeMap<String, SettingValue>;

fn setting_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*//\s*(?:([^:]+):\s*(.*)|([^:]*))$").expect("valid settings regex")
    })
}

/// Scan `source` for `// name: value, ...` and bare `// flag` lines.
///
/// Only lines that start with a comment marker count. Keys are trimmed and
/// case-sensitive; values are split on commas and trimmed, dropping empty
/// entries. A later line with the same key replaces an earlier one.
pub fn extract_settings(source: &str) -> SettingsMap {
    let mut settings = SettingsMap::new();
    for line in source.lines() {
        let Some(caps) = setting_line_re().captures(line) else {
            continue;
        };
        if let Some(name) = caps.get(1) {
            let name = name.as_str().trim();
            if name.is_empty() {
                continue;
            }
            let values = caps
                .get(2)
                .map(|v| v.as_str())
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect();
            settings.insert(name.to_string(), SettingValue::List(values));
        } else if let Some(flag) = caps.get(3) {
            let flag = flag.as_str().trim();
            if !flag.is_empty() {
                settings.insert(flag.to_string(), SettingValue::Flag);
            }
        }
    }
    settings
}

/// Typed metadata for one test registration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSettings {
    pub title: Option<String>,
    pub tags: Vec<String>,
    /// Browser aliases; `None` means the configured defaults
    pub browsers: Option<Vec<String>>,
    pub path: Option<String>,
    /// Explicit site id; `None` lets the registry infer one from tags
    pub site_id: Option<String>,
    pub disabled: bool,
}

impl TestSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings out of comment text
    pub fn from_comments(source: &str) -> Self {
        Self::from_map(&extract_settings(source))
    }

    /// Build typed settings from an extracted map.
    ///
    /// List-valued keys given as bare flags are treated as absent. `browser`
    /// takes precedence over `browsers`.
    pub fn from_map(map: &SettingsMap) -> Self {
        let list = |key: &str| match map.get(key) {
            Some(SettingValue::List(values)) => Some(values.as_slice()),
            _ => None,
        };

        Self {
            title: list("title").map(|v| v.join(", ")),
            tags: list("tags").map(<[String]>::to_vec).unwrap_or_default(),
            browsers: list("browser")
                .or_else(|| list("browsers"))
                .filter(|v| !v.is_empty())
                .map(<[String]>::to_vec),
            path: list("path").map(|v| v.join(",")),
            site_id: list("site_id").map(|v| v.join(",")),
            disabled: map.contains_key("disabled"),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn browsers<I, S>(mut self, browsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.browsers = Some(browsers.into_iter().map(Into::into).collect());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl From<&str> for TestSettings {
    fn from(source: &str) -> Self {
        Self::from_comments(source)
    }
}
