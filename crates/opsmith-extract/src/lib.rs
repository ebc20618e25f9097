//! Turns a free-text requirement into an ordered list of configuration
//! tasks using a fixed-priority rule table.

mod fragment;
mod rules;

pub use fragment::Fragment;
pub use rules::{Rule, RULES};

use opsmith_core::ParsedTask;

/// Extract tasks from a requirement description.
///
/// The description is split into sentence-like fragments on `.`, `!` and
/// `?`. Each fragment is run through every rule in [`RULES`] in priority
/// order and all matches apply, so one fragment can yield several tasks.
/// A fragment that matched nothing but still contains an action keyword
/// becomes a single raw-command task. An empty description is an empty
/// list, not an error.
pub fn extract_tasks(description: &str) -> Vec<ParsedTask> {
    let mut tasks = Vec::new();

    for piece in description.split(['.', '!', '?']) {
        if piece.trim().is_empty() {
            continue;
        }
        let frag = Fragment::new(piece);

        let before = tasks.len();
        for rule in RULES {
            tasks.extend((rule.apply)(&frag));
        }
        if tasks.len() == before {
            tasks.extend(rules::fallback_rule(&frag));
        }
    }

    tasks
}
