//! Lead form state

use super::field::{FieldId, FormField};
use super::variant::FormVariant;
use crate::state::lead::{LeadDetails, LeadInput};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Field state for one embedded lead form.
///
/// Focus runs over every field of the page and then the submit button row,
/// which sits at index `fields.len()`.
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub variant: FormVariant,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl LeadForm {
    pub fn new(variant: FormVariant) -> Self {
        let fields = variant
            .fields()
            .iter()
            .map(|&id| match id {
                FieldId::Phone => FormField::phone(id),
                FieldId::Consent => FormField::checkbox(id),
                _ => match variant.options(id) {
                    Some(options) => FormField::choice(id, options),
                    None => FormField::text(id),
                },
            })
            .collect();

        Self {
            variant,
            fields,
            active_field_index: 0,
        }
    }

    /// Index of the submit button row
    pub fn button_row(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == self.button_row()
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Move focus to a field
    pub fn focus(&mut self, id: FieldId) {
        if let Some(index) = self.fields.iter().position(|f| f.id == id) {
            self.active_field_index = index;
        }
    }

    fn text_of(&self, id: FieldId) -> String {
        self.field(id)
            .map(|f| f.as_text().to_string())
            .unwrap_or_default()
    }

    /// Snapshot the current field values as a lead record
    pub fn input(&self) -> LeadInput {
        let details = match self.variant {
            FormVariant::Equipment => LeadDetails::Equipment {
                equipment: self.text_of(FieldId::Equipment),
            },
            FormVariant::Growth => LeadDetails::Growth {
                monthly_revenue: self.text_of(FieldId::MonthlyRevenue),
                main_challenge: self.text_of(FieldId::MainChallenge),
            },
        };

        LeadInput {
            name: self.text_of(FieldId::Name),
            phone: self.text_of(FieldId::Phone),
            email: self.text_of(FieldId::Email),
            company: self.text_of(FieldId::Company),
            location: self.text_of(FieldId::Location),
            details,
            consent_given: self.field(FieldId::Consent).is_some_and(|f| f.is_checked()),
        }
    }

    /// Clear every field and return focus to the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + button row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.button_row());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        // None on the button row
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
