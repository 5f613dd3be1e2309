//! Site configuration
//!
//! The configuration is a JSON document, by default `rfconfig.json`:
//!
//! ```json
//! {
//!   "defaultBrowsers": ["chrome", "firefox"],
//!   "sites": { "login": { "site_id": "1234" }, "admin": { "site_id": "5678" } },
//!   "addTags": ["regression"],
//!   "tagsAsSuffix": ["mobile"]
//! }
//! ```
//!
//! Site inference scans `sites` in document order, so the order of the keys in
//! the file is significant.

use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::Result;

/// Default path of the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "rfconfig.json";

/// One site entry: tests tagged with `tag` run against `site_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRule {
    pub tag: String,
    pub site_id: String,
}

/// Configuration shared by every test in a build
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Browsers used by tests that don't declare any
    #[serde(default = "default_browsers")]
    pub default_browsers: Vec<String>,
    /// Ordered tag to site mapping used to infer a test's site id
    #[serde(default, deserialize_with = "ordered_sites")]
    pub sites: Vec<SiteRule>,
    /// Tags appended to every test
    #[serde(default)]
    pub add_tags: Vec<String>,
    /// Tags that, when present on a test, are appended to its title
    #[serde(default)]
    pub tags_as_suffix: Vec<String>,
}

fn default_browsers() -> Vec<String> {
    vec!["chrome".to_string()]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_browsers: default_browsers(),
            sites: Vec::new(),
            add_tags: Vec::new(),
            tags_as_suffix: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, falling back to defaults when it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "no configuration at {}; using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(
            "loaded configuration from {} ({} sites)",
            path.display(),
            config.sites.len()
        );
        Ok(config)
    }

    /// Parse configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builder-style helper to add a site rule at the end of the lookup order
    pub fn with_site(mut self, tag: impl Into<String>, site_id: impl Into<String>) -> Self {
        self.sites.push(SiteRule {
            tag: tag.into(),
            site_id: site_id.into(),
        });
        self
    }

    /// Site id of the first configured site whose tag is in `tags`
    pub fn site_for_tags<S: AsRef<str>>(&self, tags: &[S]) -> Option<&str> {
        self.sites
            .iter()
            .find(|rule| tags.iter().any(|t| t.as_ref() == rule.tag))
            .map(|rule| rule.site_id.as_str())
    }

    /// Tag used for generated stubs: the first site's tag, or `none`
    pub fn first_site_tag(&self) -> &str {
        self.sites.first().map(|r| r.tag.as_str()).unwrap_or("none")
    }
}

#[derive(Deserialize)]
struct SiteEntry {
    site_id: String,
}

// serde_json maps are sorted unless `preserve_order` is on; visit the object
// directly so rules keep the file's key order.
fn ordered_sites<'de, D>(deserializer: D) -> std::result::Result<Vec<SiteRule>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SitesVisitor;

    impl<'de> Visitor<'de> for SitesVisitor {
        type Value = Vec<SiteRule>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of tag names to { \"site_id\": ... }")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rules = Vec::new();
            while let Some((tag, entry)) = map.next_entry::<String, SiteEntry>()? {
                if rules.iter().any(|r: &SiteRule| r.tag == tag) {
                    return Err(de::Error::custom(format!("duplicate site tag: {}", tag)));
                }
                rules.push(SiteRule {
                    tag,
                    site_id: entry.site_id,
                });
            }
            Ok(rules)
        }
    }

    deserializer.deserialize_map(SitesVisitor)
}
