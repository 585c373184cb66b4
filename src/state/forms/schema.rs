//! Lead validation schema
//!
//! Each field maps to one pure check plus the message shown when the check
//! fails. Rules are evaluated independently and collected into a
//! [`ValidationResult`]; a lead is valid only when every rule passes.

use super::field::FieldId;
use super::variant::FormVariant;
use crate::state::lead::{FieldRef, LeadInput};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$").expect("valid phone pattern"));

// Consecutive and leading dots are rejected separately (no look-around in `regex`)
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("valid email pattern")
});

/// Predicate applied to a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// At least this many characters, counted as Unicode scalar values so
    /// an emoji is one character like any other letter
    MinChars(usize),
    /// `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`
    Phone,
    Email,
    /// Exactly one of the listed values
    OneOf(&'static [&'static str]),
    /// Checkbox must be ticked
    Accepted,
}

impl Check {
    pub fn passes(&self, value: FieldRef<'_>) -> bool {
        match (self, value) {
            (Check::MinChars(min), FieldRef::Text(s)) => s.chars().count() >= *min,
            (Check::Phone, FieldRef::Text(s)) => PHONE_PATTERN.is_match(s),
            (Check::Email, FieldRef::Text(s)) => is_valid_email(s),
            (Check::OneOf(options), FieldRef::Text(s)) => options.iter().any(|o| *o == s),
            (Check::Accepted, FieldRef::Flag(accepted)) => accepted,
            _ => false,
        }
    }
}

/// One schema entry
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: FieldId,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    const fn new(field: FieldId, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// Rules for a page, in field order
pub fn rules(variant: FormVariant) -> Vec<Rule> {
    variant
        .fields()
        .iter()
        .map(|&field| rule_for(variant, field))
        .collect()
}

fn rule_for(variant: FormVariant, field: FieldId) -> Rule {
    let one_of = || Check::OneOf(variant.options(field).unwrap_or(&[]));
    match field {
        FieldId::Name => Rule::new(
            field,
            Check::MinChars(2),
            "Nome deve ter pelo menos 2 caracteres",
        ),
        FieldId::Phone => Rule::new(
            field,
            Check::Phone,
            "Telefone deve estar no formato (99) 99999-9999",
        ),
        FieldId::Email => Rule::new(field, Check::Email, "E-mail inválido"),
        FieldId::Company => Rule::new(field, Check::MinChars(2), "Nome da empresa é obrigatório"),
        FieldId::Location => Rule::new(field, Check::MinChars(2), "Cidade/Estado é obrigatório"),
        FieldId::Equipment => Rule::new(field, one_of(), "Selecione um equipamento"),
        FieldId::MonthlyRevenue => Rule::new(field, one_of(), "Selecione o faturamento mensal"),
        FieldId::MainChallenge => Rule::new(field, one_of(), "Selecione o principal desafio"),
        FieldId::Consent => Rule::new(
            field,
            Check::Accepted,
            "É necessário aceitar os termos LGPD",
        ),
    }
}

/// Field errors from one validation pass.
///
/// A field is present only while its current value fails its rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldId, &'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Run every rule of the input's page against it
pub fn validate(input: &LeadInput) -> ValidationResult {
    let errors = rules(input.variant())
        .into_iter()
        .filter(|rule| {
            input
                .value(rule.field)
                .is_none_or(|value| !rule.check.passes(value))
        })
        .map(|rule| (rule.field, rule.message))
        .collect();

    ValidationResult { errors }
}

/// Conventional web-form email syntax check
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}
