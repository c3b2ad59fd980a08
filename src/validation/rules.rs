//! Field rules and the schema that evaluates them.

use crate::core::Contact;
use crate::validation::errors::{Field, FieldError, FieldErrors};
use crate::validation::patterns;
use regex::Regex;
use std::sync::OnceLock;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const EMPTY_MESSAGE: &str = "This field cannot be empty.";
pub const PHONE_MESSAGE: &str = "This field must be a correct phone number.";
pub const EMAIL_MESSAGE: &str = "This must be a correct email address.";

/// A pattern the field value must match, and the message shown when it
/// does not.
#[derive(Clone, Debug)]
pub struct Rule {
    pub pattern: Regex,
    pub message: String,
}

impl Rule {
    /// Compile a rule from a pattern string.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?, message))
    }

    pub fn from_regex(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            pattern,
            message: message.into(),
        }
    }

    /// Check a value against the rule (pure).
    pub fn accepts(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

/// Ordered rules per field.
///
/// Rules within a field are evaluated in order and the first one that
/// fails decides the field's message, so cheap presence checks go before
/// format checks. Fields are independent of each other.
#[derive(Clone, Debug, Default)]
pub struct ValidationSchema {
    pub(crate) fields: Vec<(Field, Vec<Rule>)>,
}

impl ValidationSchema {
    /// The schema applied to contacts before they are committed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use address_book::core::{Contact, ContactStatus};
    /// use address_book::validation::{Field, ValidationSchema};
    ///
    /// let mut contact = Contact::blank(2, ContactStatus::Work);
    /// contact.email = "a@b.com".to_string();
    /// contact.phone = "123".to_string();
    ///
    /// let errors = ValidationSchema::contact().validate(&contact);
    /// assert_eq!(errors.get(Field::Name), Some("This field cannot be empty."));
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn contact() -> &'static ValidationSchema {
        static SCHEMA: OnceLock<ValidationSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| ValidationSchema {
            fields: vec![
                (
                    Field::Name,
                    vec![Rule::from_regex(patterns::not_empty().clone(), EMPTY_MESSAGE)],
                ),
                (
                    Field::Phone,
                    vec![
                        Rule::from_regex(patterns::not_empty().clone(), EMPTY_MESSAGE),
                        Rule::from_regex(patterns::phone().clone(), PHONE_MESSAGE),
                    ],
                ),
                (
                    Field::Email,
                    vec![
                        Rule::from_regex(patterns::not_empty().clone(), EMPTY_MESSAGE),
                        Rule::from_regex(patterns::email().clone(), EMAIL_MESSAGE),
                    ],
                ),
            ],
        })
    }

    /// Rules registered for `field`, empty when the field is unchecked.
    pub fn rules(&self, field: Field) -> &[Rule] {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Check every field, accumulating ALL failing fields.
    ///
    /// Each failing field contributes exactly one error: the first rule it
    /// did not satisfy.
    pub fn check(&self, contact: &Contact) -> Validation<(), NonEmptyVec<FieldError>> {
        let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = self
            .fields
            .iter()
            .map(|(field, rules)| {
                let value = contact.field(*field);
                match rules.iter().find(|rule| !rule.accepts(value)) {
                    Some(rule) => Validation::fail(FieldError {
                        field: *field,
                        message: rule.message.clone(),
                    }),
                    None => Validation::success(()),
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate a contact into a field to message mapping.
    ///
    /// An empty result means the contact may be committed.
    pub fn validate(&self, contact: &Contact) -> FieldErrors {
        match self.check(contact) {
            Validation::Success(_) => FieldErrors::new(),
            Validation::Failure(errors) => errors.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContactStatus;
    use crate::validation::SchemaBuilder;

    fn contact(name: &str, email: &str, phone: &str) -> Contact {
        Contact {
            id: 2,
            status: ContactStatus::Work,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn valid_contact_has_no_errors() {
        let schema = ValidationSchema::contact();
        let candidate = contact("Jo", "jo@example.com", "+31623121345");

        assert!(schema.check(&candidate).is_success());
        assert!(schema.validate(&candidate).is_empty());
    }

    #[test]
    fn empty_name_is_the_only_error() {
        let errors = ValidationSchema::contact().validate(&contact("", "a@b.com", "123"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn format_errors_accumulate_across_fields() {
        let errors =
            ValidationSchema::contact().validate(&contact("Jo", "not-an-email", "abc"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_MESSAGE));
        assert_eq!(errors.get(Field::Phone), Some(PHONE_MESSAGE));
        assert!(errors.get(Field::Name).is_none());
    }

    #[test]
    fn presence_check_wins_over_format_check() {
        let errors = ValidationSchema::contact().validate(&contact("Jo", "   ", ""));

        assert_eq!(errors.get(Field::Email), Some(EMPTY_MESSAGE));
        assert_eq!(errors.get(Field::Phone), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn blank_contact_fails_every_field() {
        let schema = ValidationSchema::contact();
        let blank = Contact::blank(5, ContactStatus::Private);

        match schema.check(&blank) {
            Validation::Failure(errors) => assert_eq!(errors.len(), 3),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn rules_lookup_returns_field_rules_in_order() {
        let schema = ValidationSchema::contact();

        let messages: Vec<&str> = schema
            .rules(Field::Email)
            .iter()
            .map(|rule| rule.message.as_str())
            .collect();
        assert_eq!(messages, vec![EMPTY_MESSAGE, EMAIL_MESSAGE]);
    }

    #[test]
    fn unchecked_fields_are_ignored() {
        let schema = SchemaBuilder::new()
            .rule(Field::Name, Rule::new("^J", "Must start with J").unwrap())
            .build();

        assert!(schema.rules(Field::Phone).is_empty());
        assert!(schema.validate(&contact("Jo", "", "")).is_empty());

        let errors = schema.validate(&contact("Amy", "", ""));
        assert_eq!(errors.get(Field::Name), Some("Must start with J"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(Rule::new("(unclosed", "never").is_err());
    }
}
