//! Builder API for creating validation schemas.

use crate::validation::errors::Field;
use crate::validation::rules::{Rule, ValidationSchema};

/// Builder for creating validation schemas.
///
/// Fields are evaluated in the order they are first given a rule, and
/// rules for a field in the order they are added.
pub struct SchemaBuilder {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a rule to `field`.
    pub fn rule(mut self, field: Field, rule: Rule) -> Self {
        match self.fields.iter_mut().find(|(candidate, _)| *candidate == field) {
            Some((_, rules)) => rules.push(rule),
            None => self.fields.push((field, vec![rule])),
        }
        self
    }

    /// Append several rules to `field`.
    pub fn rules(self, field: Field, rules: impl IntoIterator<Item = Rule>) -> Self {
        rules
            .into_iter()
            .fold(self, |builder, rule| builder.rule(field, rule))
    }

    /// Build the schema
    pub fn build(self) -> ValidationSchema {
        ValidationSchema {
            fields: self.fields,
        }
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
