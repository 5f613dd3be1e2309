//! Demonstration suite
//!
//! Shows the three ways to write tests: plain combined steps, shared helper
//! functions reused across tests, and split instruction/question calls that
//! branch one instruction into different questions.

use crate::registry::{TestContext, TestRegistry};
use crate::suite::Suite;
use crate::Result;

/// All demonstration groups
pub fn suite() -> Suite {
    Suite::new()
        .group("basic-test", basic_test)
        .group("using-stubs", using_stubs)
        .group(
            "separating-instructions-and-questions",
            separating_instructions_and_questions,
        )
}

/// Sign in with generated credentials; shared by several tests
pub fn sign_in(t: &mut TestContext) {
    t.step(
        r#"Click on the "login" button.
           Enter "{{random.email}}" as the username and "{{random.password}}" as the password.
           Q: Are you signed in?"#,
    );
}

fn basic_test(registry: &mut TestRegistry) {
    registry.register(
        "basic-test",
        "
        // title: basic test case with no stubs
        // tags: login
        ",
        |t| {
            t.step(
                r#"Click on the "login" button.
                   Do you see input fields for username and password?"#,
            );
            t.step(
                r#"Enter "{{random.email}}" as the username and "{{random.password}}" as the password and click Submit.
                   Do you see a banner that says "Welcome"?"#,
            );
            Ok(())
        },
    );
}

fn open_news_feed(t: &mut TestContext) {
    t.step(
        r#"Click on the tab that says "News Feed".
           Do you see a box labelled "Test News Item"?"#,
    );
}

fn using_stubs(registry: &mut TestRegistry) {
    registry.register(
        "stubs-example-1",
        "
        // title: simple test with one stub
        // tags: login, news-feed
        ",
        |t| {
            sign_in(t);
            t.step(
                r#"Click on the tab that says "News Feed".
                   Do you see a box labelled "Test News Item"?"#,
            );
            Ok(())
        },
    );

    registry.register(
        "stubs-example-2",
        "
        // title: simple test with multiple stubs
        // tags: login, news-feed
        ",
        |t| {
            sign_in(t);
            open_news_feed(t);
            Ok(())
        },
    );
}

/// What a search should find
pub enum Expect<'a> {
    Count(usize),
    Titled(&'a str),
}

/// Search, then ask a question that depends on what's expected
pub fn search(t: &mut TestContext, term: &str, expect: Expect<'_>) -> Result<()> {
    t.instruction(&format!(r#"Type "{}" in the search bar and press Enter."#, term));
    match expect {
        Expect::Count(n) => t.question(&format!("Do you see exactly {} search results?", n)),
        Expect::Titled(title) => {
            t.question(&format!(r#"Do you see a search result labelled "{}"?"#, title))
        }
    }
}

fn separating_instructions_and_questions(registry: &mut TestRegistry) {
    registry.register(
        "search-example-1",
        "
        // title: search and open something
        // tags: search, view-content
        ",
        |t| {
            sign_in(t);
            search(t, "started", Expect::Titled("Getting Started"))?;
            t.step(
                r#"Click on the box that says "Getting Started".
                   Do you see a popup that shows the Getting Started article?"#,
            );
            Ok(())
        },
    );

    registry.register(
        "search-example-2",
        "
        // title: search and delete something
        // tags: search, delete-content
        ",
        |t| {
            sign_in(t);
            search(t, "data", Expect::Count(3))?;
            t.step(
                "Click on the delete icon next to one of the search results.
                 Did the result disappear?",
            );
            Ok(())
        },
    );
}
