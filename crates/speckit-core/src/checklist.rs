//! Line-oriented checklist parsing shared by the validator and classifier.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static CHECKBOX_RE: OnceLock<Regex> = OnceLock::new();

/// A checklist item is `- [ ]` or `- [x]`/`- [X]` at line start,
/// optionally indented.
fn checkbox_re() -> &'static Regex {
    CHECKBOX_RE.get_or_init(|| Regex::new(r"^\s*- \[( |x|X)\]").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistCount {
    pub total: usize,
    pub completed: usize,
}

impl ChecklistCount {
    /// Completion as a whole percentage, rounded down. Zero items is 0%,
    /// not a division error.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.completed * 100 / self.total) as u8
    }
}

/// Count checklist items in markdown content.
pub fn count(content: &str) -> ChecklistCount {
    let mut total = 0;
    let mut completed = 0;
    for line in content.lines() {
        if let Some(caps) = checkbox_re().captures(line) {
            total += 1;
            if matches!(&caps[1], "x" | "X") {
                completed += 1;
            }
        }
    }
    ChecklistCount { total, completed }
}
