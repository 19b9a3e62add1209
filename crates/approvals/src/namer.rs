//! Turns free-text test descriptions into stable, filesystem-safe names.

use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Normalize a description into a lowercase, underscore-delimited token.
///
/// Case is folded by uppercasing then lowercasing, so letters such as `ß` or
/// `ﬁ` that only turn into ASCII when uppercased fold the same way in every
/// casing. Every maximal run of characters outside `[a-z0-9]` then becomes a
/// single `_`, and leading/trailing underscores are stripped.
///
/// ```rust
/// assert_eq!(approvals::normalize("The::Class  name"), "the_class_name");
/// assert_eq!(approvals::normalize("a 2009 party"), "a_2009_party");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_uppercase().to_lowercase();
    UNSAFE_RUN
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

/// Anything that can name the currently executing test case.
pub trait TestContext {
    /// The full, human-readable description of the test, if it has one.
    fn full_description(&self) -> Option<String>;
}

impl TestContext for str {
    fn full_description(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl TestContext for String {
    fn full_description(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: TestContext + ?Sized> TestContext for &T {
    fn full_description(&self) -> Option<String> {
        (**self).full_description()
    }
}

/// A test description assembled from nested group names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    parts: Vec<String>,
}

impl Description {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            parts: vec![name.into()],
        }
    }

    /// Nest a group or test name under this description.
    pub fn child(mut self, name: impl Into<String>) -> Self {
        self.parts.push(name.into());
        self
    }
}

impl TestContext for Description {
    fn full_description(&self) -> Option<String> {
        if self.parts.is_empty() {
            None
        } else {
            Some(self.parts.join(" "))
        }
    }
}
