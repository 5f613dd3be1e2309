//! RFML serialization
//!
//! One test per file: a `#`-prefixed header, a bare `#` separator, a blank
//! line, then each step as an instruction line, a question line and a blank
//! line. The platform parses this format strictly, so labels, order and
//! spacing must not change.

use crate::registry::Test;

/// Render a committed test as RFML text
pub fn render(test: &Test) -> String {
    let mut lines: Vec<String> = vec![
        format!("#! {}", test.id),
        format!("# title: {}", test.title),
        format!("# site_id: {}", test.site_id.as_deref().unwrap_or_default()),
        format!("# start_uri: {}", test.path),
        format!("# tags: {}", test.tags.join(", ")),
        format!("# browsers: {}", test.browsers.join(" ")),
    ];
    if test.disabled {
        lines.push("# state: disabled".to_string());
    }
    lines.push("#".to_string());
    lines.push(String::new());

    for step in &test.steps {
        lines.push(step.instruction.clone());
        lines.push(step.question.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}
