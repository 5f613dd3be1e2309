//! Named groups of registrations

use crate::config::SiteConfig;
use crate::registry::TestRegistry;
use crate::{Error, Result};

/// A function that registers a group of related tests
pub type Group = fn(&mut TestRegistry);

/// An ordered collection of registration groups.
///
/// Groups usually mirror source files: one group per feature area, built
/// together so id and title uniqueness holds across the whole suite.
#[derive(Clone, Default)]
pub struct Suite {
    groups: Vec<(String, Group)>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, name: impl Into<String>, group: Group) -> Self {
        self.groups.push((name.into(), group));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Run the selected groups (all of them when `only` is empty) in suite
    /// order against one registry.
    pub fn build<S: AsRef<str>>(&self, config: SiteConfig, only: &[S]) -> Result<TestRegistry> {
        let unknown: Vec<&str> = only
            .iter()
            .map(|o| o.as_ref())
            .filter(|name| !self.groups.iter().any(|(g, _)| g.as_str() == *name))
            .collect();
        if !unknown.is_empty() {
            return Err(Error::Config(format!("unknown test group: {}", unknown.join(", "))));
        }

        let mut registry = TestRegistry::new(config);
        for (name, group) in &self.groups {
            if only.is_empty() || only.iter().any(|o| o.as_ref() == name.as_str()) {
                log::debug!("building group {}", name);
                group(&mut registry);
            }
        }
        Ok(registry)
    }
}
