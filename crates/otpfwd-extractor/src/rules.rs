//! Ordered first-match rule driver
//!
//! A [`RuleSet`] is a priority-ordered list of `(id, pattern, accept)` rules.
//! Each rule contributes at most its leftmost match; `accept` turns the
//! captures into a value or vetoes the match, in which case evaluation moves
//! on to the next rule. The first accepted value wins.

use regex::{Captures, Regex};
use tracing::debug;

/// Validator/converter invoked on a rule's leftmost match
pub type Accept<C, T> = Box<dyn Fn(&Captures<'_>, &C) -> Option<T> + Send + Sync>;

/// One prioritized pattern
pub struct Rule<C: ?Sized, T> {
    id: &'static str,
    pattern: Regex,
    accept: Accept<C, T>,
}

impl<C: ?Sized, T> Rule<C, T> {
    /// Build a rule from a pattern known to be valid at compile time
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub fn new<F>(id: &'static str, pattern: &str, accept: F) -> Self
    where
        F: Fn(&Captures<'_>, &C) -> Option<T> + Send + Sync + 'static,
    {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid pattern for rule '{}': {}", id, e));
        Self {
            id,
            pattern,
            accept: Box::new(accept),
        }
    }

    /// Rule identifier
    pub fn id(&self) -> &'static str {
        self.id
    }
}

impl<C: ?Sized, T> std::fmt::Debug for Rule<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// A value produced by the first accepting rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<T> {
    /// Identifier of the rule that produced the value
    pub id: &'static str,
    /// The accepted value
    pub value: T,
}

/// Priority-ordered rules sharing one context type
pub struct RuleSet<C: ?Sized, T> {
    rules: Vec<Rule<C, T>>,
}

impl<C: ?Sized, T> RuleSet<C, T> {
    /// Create a rule set; earlier rules take priority
    pub fn new(rules: Vec<Rule<C, T>>) -> Self {
        Self { rules }
    }

    /// Evaluate rules in priority order and return the first accepted value
    pub fn first_match(&self, text: &str, ctx: &C) -> Option<RuleMatch<T>> {
        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(text) else {
                continue;
            };
            match (rule.accept)(&caps, ctx) {
                Some(value) => {
                    debug!("Rule '{}' accepted", rule.id);
                    return Some(RuleMatch { id: rule.id, value });
                }
                None => debug!("Rule '{}' matched but was vetoed", rule.id),
            }
        }
        None
    }

    /// Rule identifiers in priority order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::id)
    }
}

impl<C: ?Sized, T> std::fmt::Debug for RuleSet<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> RuleSet<usize, String> {
        RuleSet::new(vec![
            Rule::new("long", r"(\d{6,})", |caps, min: &usize| {
                let m = caps.get(1)?.as_str();
                (m.len() >= *min).then(|| m.to_string())
            }),
            Rule::new("short", r"(\d{2})", |caps, _: &usize| {
                Some(caps.get(1)?.as_str().to_string())
            }),
        ])
    }

    #[test]
    fn test_priority_beats_position() {
        let rules = digits();
        let found = rules.first_match("12 then 345678", &0).unwrap();
        assert_eq!(found.id, "long");
        assert_eq!(found.value, "345678");
    }

    #[test]
    fn test_veto_falls_through_to_next_rule() {
        let rules = digits();
        let found = rules.first_match("12 then 345678", &10).unwrap();
        assert_eq!(found.id, "short");
        assert_eq!(found.value, "12");
    }

    #[test]
    fn test_no_match() {
        let rules = digits();
        assert!(rules.first_match("no digits here", &0).is_none());
        assert_eq!(rules.ids().collect::<Vec<_>>(), vec!["long", "short"]);
    }
}
