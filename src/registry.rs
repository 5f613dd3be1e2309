//! Test registration
//!
//! [`TestRegistry`] runs one registration at a time. Each registration gets a
//! fresh [`TestContext`] (the test being built), fills in metadata from its
//! [`TestSettings`] and the [`SiteConfig`], runs the registration closure
//! against the context, then validates and normalizes the collected steps.
//!
//! A failing registration never stops the run: the failure is logged and kept
//! in [`TestRegistry::failures`], the partial test is dropped, and the next
//! registration proceeds. Ids and titles stay reserved once their checks pass,
//! even if the test fails later.

use std::collections::HashSet;

use log::{debug, error};
use serde::Serialize;

use crate::browser::resolve_browsers;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::settings::TestSettings;
use crate::step::{Step, StepBuilder};
use crate::text::{format_step, space_quoted_question};

/// Title used when a test doesn't declare one
pub const DEFAULT_TITLE: &str = "unnamed test";
/// Start path used when a test doesn't declare one
pub const DEFAULT_PATH: &str = "/";

/// A registered test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Test {
    pub id: String,
    pub title: String,
    pub site_id: Option<String>,
    pub path: String,
    pub tags: Vec<String>,
    /// Resolved platform browser identifiers
    pub browsers: Vec<String>,
    pub disabled: bool,
    pub steps: Vec<Step>,
}

impl Test {
    /// Render this test in RFML
    pub fn to_rfml(&self) -> String {
        crate::serializer::render(self)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Substring match against the space-joined browser list, so `ie` or
    /// `1440_900` match several browsers.
    pub fn has_browser(&self, fragment: &str) -> bool {
        self.browsers.join(" ").contains(fragment)
    }
}

/// The test currently being registered.
///
/// Registration closures receive this and declare steps through it. Helpers
/// shared between tests are plain functions taking `&mut TestContext`.
#[derive(Debug)]
pub struct TestContext {
    test: Test,
    steps: StepBuilder,
}

impl TestContext {
    fn new(test: Test) -> Self {
        Self {
            test,
            steps: StepBuilder::new(),
        }
    }

    /// Add a complete step; see [`StepBuilder::step`]
    pub fn step(&mut self, text: &str) {
        self.steps.step(text);
    }

    /// Start or extend a split-form step; see [`StepBuilder::instruction`]
    pub fn instruction(&mut self, text: &str) {
        self.steps.instruction(text);
    }

    /// Finish a split-form step; see [`StepBuilder::question`]
    pub fn question(&mut self, text: &str) -> Result<()> {
        Ok(self.steps.question(text)?)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.test.has_tag(tag)
    }

    pub fn has_browser(&self, fragment: &str) -> bool {
        self.test.has_browser(fragment)
    }

    /// Metadata of the test being built (steps are not filled in yet)
    pub fn test(&self) -> &Test {
        &self.test
    }

    /// Steps declared so far, not yet normalized
    pub fn steps(&self) -> &[Step] {
        self.steps.steps()
    }

    fn finish(self) -> Result<Test> {
        let mut test = self.test;
        test.steps = self
            .steps
            .into_steps()
            .into_iter()
            .map(normalize_step)
            .collect::<Result<_>>()?;
        Ok(test)
    }
}

fn normalize_step(step: Step) -> Result<Step> {
    let question = space_quoted_question(&format_step(&step.question));
    if !question.ends_with('?') {
        return Err(Error::MalformedQuestion(question));
    }
    Ok(Step {
        instruction: format_step(&step.instruction),
        question,
    })
}

/// A registration that did not produce a test
#[derive(Debug)]
pub struct Failure {
    pub id: String,
    pub error: Error,
}

/// Registered tests for one build
#[derive(Debug, Default)]
pub struct TestRegistry {
    config: SiteConfig,
    tests: Vec<Test>,
    ids: HashSet<String>,
    titles: HashSet<String>,
    failures: Vec<Failure>,
}

impl TestRegistry {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Register one test.
    ///
    /// `settings` is either a [`TestSettings`] value or comment text
    /// (`"// title: ...\n// tags: ..."`). Returns the committed test, or
    /// `None` when the registration failed; failures are recorded rather than
    /// returned so a suite keeps going.
    pub fn register<S, F>(&mut self, id: &str, settings: S, f: F) -> Option<&Test>
    where
        S: Into<TestSettings>,
        F: FnOnce(&mut TestContext) -> Result<()>,
    {
        match self.try_register(id, settings.into(), f) {
            Ok(test) => {
                debug!("{}: committed \"{}\" ({} steps)", test.id, test.title, test.steps.len());
                self.tests.push(test);
                self.tests.last()
            }
            Err(err) => {
                error!("{}: {}", id, err);
                self.failures.push(Failure {
                    id: id.to_string(),
                    error: err,
                });
                None
            }
        }
    }

    fn try_register<F>(&mut self, id: &str, settings: TestSettings, f: F) -> Result<Test>
    where
        F: FnOnce(&mut TestContext) -> Result<()>,
    {
        if id.trim().is_empty() {
            return Err(Error::MissingIdentifier);
        }
        if !self.ids.insert(id.to_string()) {
            return Err(Error::DuplicateIdentifier(id.to_string()));
        }

        let mut test = self.prepare(id, settings);

        if !self.titles.insert(test.title.clone()) {
            return Err(Error::DuplicateTitle(test.title));
        }

        if test.site_id.is_none() {
            test.site_id = self.config.site_for_tags(&test.tags).map(String::from);
        }

        for tag in &self.config.add_tags {
            if !test.has_tag(tag) {
                test.tags.push(tag.clone());
            }
        }

        let mut ctx = TestContext::new(test);
        f(&mut ctx)?;
        ctx.finish()
    }

    // Metadata straight from the settings plus config defaults.
    fn prepare(&self, id: &str, settings: TestSettings) -> Test {
        let browsers = match settings.browsers {
            Some(b) if !b.is_empty() => resolve_browsers(&b),
            _ if !self.config.default_browsers.is_empty() => {
                resolve_browsers(&self.config.default_browsers)
            }
            _ => resolve_browsers(&["chrome"]),
        };

        let mut title = settings
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let suffix: Vec<&str> = settings
            .tags
            .iter()
            .filter(|t| self.config.tags_as_suffix.contains(*t))
            .map(String::as_str)
            .collect();
        if !suffix.is_empty() {
            title = format!("{} ({})", title, suffix.join("/"));
        }

        Test {
            id: id.to_string(),
            title,
            site_id: settings.site_id,
            path: settings
                .path
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PATH.to_string()),
            tags: settings.tags,
            browsers,
            disabled: settings.disabled,
            steps: Vec::new(),
        }
    }

    /// Committed tests in registration order
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn into_tests(self) -> Vec<Test> {
        self.tests
    }

    /// Failed registrations in the order they happened
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// `true` while no registration has failed
    pub fn is_successful(&self) -> bool {
        self.failures.is_empty()
    }
}
