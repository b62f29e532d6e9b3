//! Conditional class-list composition for components.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// Join non-empty class fragments with single spaces.
#[must_use]
pub fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
