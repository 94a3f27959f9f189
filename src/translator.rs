//! Data shapes consumed by the condition translator.
//!
//! The translator itself lives elsewhere; these types fix how it combines
//! propositions and what a precondition carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How two propositions are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conjunction {
    And,
    Or,
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunction::And => f.write_str(" && "),
            Conjunction::Or => f.write_str(" || "),
        }
    }
}

/// A boolean condition with the comment text it was translated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guard {
    pub description: String,
    pub condition: String,
}

impl Guard {
    pub fn new(description: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            condition: condition.into(),
        }
    }

    /// Join guard conditions; `None` for an empty list.
    pub fn join<'g>(guards: impl IntoIterator<Item = &'g Guard>, conjunction: Conjunction) -> Option<String> {
        let parts: Vec<&str> = guards.into_iter().map(|g| g.condition.as_str()).collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join(&conjunction.to_string()))
    }
}

/// A condition that must hold before a member is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precondition {
    guard: Guard,
}

impl Precondition {
    pub fn new(guard: Guard) -> Self {
        Self { guard }
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.guard.description, self.guard.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_symbols() {
        assert_eq!(Conjunction::And.to_string(), " && ");
        assert_eq!(Conjunction::Or.to_string(), " || ");
    }

    #[test]
    fn join_guards() {
        let guards = [
            Guard::new("if x is null", "args[0] == null"),
            Guard::new("if y is negative", "args[1] < 0"),
        ];
        assert_eq!(
            Guard::join(&guards, Conjunction::Or).as_deref(),
            Some("args[0] == null || args[1] < 0")
        );
        let none: [Guard; 0] = [];
        assert_eq!(Guard::join(&none, Conjunction::And), None);
    }

    #[test]
    fn precondition_display() {
        let pre = Precondition::new(Guard::new("if size is negative", "args[0] < 0"));
        assert_eq!(pre.to_string(), "if size is negative -> args[0] < 0");
        assert_eq!(pre.guard().condition, "args[0] < 0");
    }
}
