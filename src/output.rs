//! Writing RFML files and generating stubs for new tests

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use uuid::Uuid;

use crate::registry::Test;
use crate::Result;

/// Directory tests are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name for a test: `<id>.rfml`
pub fn file_name(test: &Test) -> String {
    format!("{}.rfml", test.id)
}

/// Write every test to `<dir>/<id>.rfml`, creating `dir` if needed.
///
/// Returns the written paths in test order.
pub fn save_tests(tests: &[Test], dir: &Path) -> Result<Vec<PathBuf>> {
    if !tests.is_empty() {
        fs::create_dir_all(dir)?;
    }
    let mut written = Vec::with_capacity(tests.len());
    for test in tests {
        let path = dir.join(file_name(test));
        fs::write(&path, test.to_rfml())?;
        debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Source skeleton for a new test registration
pub fn stub(id: &str, number: usize, tag: &str) -> String {
    format!(
        r#"
registry.register("{id}", "
    // title: new test {number}
    // tags: {tag}
", |t| {{
    Ok(())
}});"#
    )
}

/// `count` stubs, each with a fresh random id
pub fn new_stubs(count: usize, tag: &str) -> Vec<String> {
    (1..=count)
        .map(|n| stub(&Uuid::new_v4().to_string(), n, tag))
        .collect()
}
