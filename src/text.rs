//! Step text normalization
//!
//! Instruction and question text is written across several source lines and
//! may embed file references. Everything here is pure and idempotent.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([^}]+)\}\}").expect("valid reference regex"))
}

fn image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(png|gif|jpg|jpeg)$").expect("valid image regex"))
}

const SCREENSHOT_PREFIX: &str = "file.screenshot(";
const DOWNLOAD_PREFIX: &str = "file.download(";

/// Rewrite `{{dir/file.ext}}` references into platform embed directives.
///
/// Images become `{{file.screenshot(../dir/file.png)}}`, anything else
/// `{{file.download(../dir/file.ext)}}`. References without a `/` are the
/// platform's own placeholders (e.g. `{{random.email}}`) and are kept as-is,
/// as are directives that were already rewritten.
pub fn fix_files(text: &str) -> String {
    reference_re()
        .replace_all(text, |caps: &Captures| {
            let reference = &caps[1];
            if !reference.contains('/')
                || reference.starts_with(SCREENSHOT_PREFIX)
                || reference.starts_with(DOWNLOAD_PREFIX)
            {
                return caps[0].to_string();
            }
            let directive = if image_re().is_match(reference) {
                SCREENSHOT_PREFIX
            } else {
                DOWNLOAD_PREFIX
            };
            format!("{{{{{}../{})}}}}", directive, reference)
        })
        .into_owned()
}

/// Rewrite file references, collapse whitespace runs to one space and trim.
pub fn format_step(text: &str) -> String {
    fix_files(text).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join fragments with a single space, then [`format_step`] the result.
pub fn format_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    let joined = fragments
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    format_step(&joined)
}

/// Separate a trailing quoted term from the question mark.
///
/// `Do you see "DELETE"?` becomes `Do you see "DELETE" ?`.
pub fn space_quoted_question(question: &str) -> String {
    match question.strip_suffix("\"?") {
        Some(head) => format!("{}\" ?", head),
        None => question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_references_are_untouched() {
        assert_eq!(fix_files("{{shot.png}}"), "{{shot.png}}");
        assert_eq!(
            fix_files("Enter {{random.email}} here"),
            "Enter {{random.email}} here"
        );
    }

    #[test]
    fn images_become_screenshots() {
        assert_eq!(
            fix_files("{{images/shot.png}}"),
            "{{file.screenshot(../images/shot.png)}}"
        );
        assert_eq!(
            fix_files("see {{a/b/LOGO.JPEG}} now"),
            "see {{file.screenshot(../a/b/LOGO.JPEG)}} now"
        );
    }

    #[test]
    fn other_files_become_downloads() {
        assert_eq!(
            fix_files("{{docs/spec.pdf}}"),
            "{{file.download(../docs/spec.pdf)}}"
        );
    }

    #[test]
    fn rewritten_directives_are_stable() {
        let once = fix_files("{{images/shot.png}} and {{docs/spec.pdf}}");
        assert_eq!(fix_files(&once), once);
    }

    #[test]
    fn format_collapses_and_trims() {
        assert_eq!(
            format_step("  Click on\n        the   \"login\" button.  "),
            "Click on the \"login\" button."
        );
        assert_eq!(format_step(""), "");
    }

    #[test]
    fn format_is_idempotent() {
        let samples = [
            " Type \"x\".\n\t Then {{img/a.gif}} ",
            "Q: is it {{a}}?",
            "   ",
            "{{docs/readme.txt}}   done",
        ];
        for s in samples {
            let once = format_step(s);
            assert_eq!(format_step(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn fragments_join_with_space() {
        assert_eq!(format_fragments(&["Type X.", "  Then Y. "]), "Type X. Then Y.");
    }

    #[test]
    fn quoted_question_gets_a_space() {
        assert_eq!(
            space_quoted_question("Do you see \"DELETE\"?"),
            "Do you see \"DELETE\" ?"
        );
        assert_eq!(space_quoted_question("Do you see it?"), "Do you see it?");
        let spaced = space_quoted_question("Do you see \"DELETE\"?");
        assert_eq!(space_quoted_question(&spaced), spaced);
    }
}
