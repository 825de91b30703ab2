//! Persistent variable assignment: caller evidence plus per-branch bindings.
//!
//! Each recursive branch binds one more variable on top of its parent's
//! assignment without copying it. The caller's evidence is never mutated.

use bayes_core::Evidence;

#[derive(Debug, Clone, Copy)]
pub enum Assignment<'a> {
    /// The observed evidence a query started from.
    Base(&'a Evidence),
    /// One binding layered over an outer assignment.
    Bound {
        node: &'a str,
        value: &'a str,
        rest: &'a Assignment<'a>,
    },
}

impl<'a> Assignment<'a> {
    pub fn new(evidence: &'a Evidence) -> Self {
        Self::Base(evidence)
    }

    /// The value assigned to `node`, innermost binding first.
    pub fn get(&self, node: &str) -> Option<&'a str> {
        let mut current = *self;
        loop {
            match current {
                Self::Base(evidence) => return evidence.get(node),
                Self::Bound {
                    node: bound,
                    value,
                    rest,
                } => {
                    if bound == node {
                        return Some(value);
                    }
                    current = *rest;
                }
            }
        }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.get(node).is_some()
    }

    /// A new assignment with `node = value` layered on top of this one.
    pub fn bind<'b>(&'b self, node: &'b str, value: &'b str) -> Assignment<'b> {
        Assignment::Bound {
            node,
            value,
            rest: self,
        }
    }
}
