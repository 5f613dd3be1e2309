//! RFML test compiler
//!
//! Tests are written as Rust functions that declare steps, one instruction
//! and one yes/no question at a time. The compiler runs those functions,
//! fills in metadata from settings and the site configuration, validates the
//! steps and renders each test in the RFML format used by the test platform.
//!
//! # Example
//!
//! ```
//! use rfml::{SiteConfig, TestRegistry};
//!
//! let mut registry = TestRegistry::new(SiteConfig::default());
//! registry.register(
//!     "5c3d1f0e-login",
//!     "
//!     // title: Login test
//!     // tags: login
//!     ",
//!     |t| {
//!         t.step("Click login.\nDo you see a form?");
//!         Ok(())
//!     },
//! );
//!
//! assert!(registry.is_successful());
//! let rfml = registry.tests()[0].to_rfml();
//! assert!(rfml.starts_with("#! 5c3d1f0e-login\n# title: Login test\n"));
//! ```

pub mod error;
pub use error::{Error, IncompleteStep, Result};

pub mod browser;
pub mod config;
pub mod settings;
pub mod step;
pub mod text;

pub mod registry;
pub mod serializer;
pub mod suite;

pub mod output;

// Command-line surface (build/new)
pub mod cli;

// Bundled demonstration tests
pub mod demo;

pub use config::{SiteConfig, SiteRule};
pub use registry::{Failure, Test, TestContext, TestRegistry};
pub use serializer::render;
pub use settings::{SettingValue, TestSettings};
pub use step::Step;
pub use suite::Suite;
