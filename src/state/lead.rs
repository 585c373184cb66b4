//! Lead records handed to the CRM

use super::forms::{FieldId, FormVariant};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Page-specific part of a lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LeadDetails {
    Equipment {
        equipment: String,
    },
    #[serde(rename_all = "camelCase")]
    Growth {
        monthly_revenue: String,
        main_challenge: String,
    },
}

impl LeadDetails {
    /// Empty details for the given page
    pub fn empty(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Equipment => Self::Equipment {
                equipment: String::new(),
            },
            FormVariant::Growth => Self::Growth {
                monthly_revenue: String::new(),
                main_challenge: String::new(),
            },
        }
    }
}

/// Value of a single lead field, borrowed from a [`LeadInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Text(&'a str),
    Flag(bool),
}

/// Contact data collected by one form submission cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub location: String,
    #[serde(flatten)]
    pub details: LeadDetails,
    pub consent_given: bool,
}

impl LeadInput {
    /// All-empty input for the given page
    pub fn empty(variant: FormVariant) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            company: String::new(),
            location: String::new(),
            details: LeadDetails::empty(variant),
            consent_given: false,
        }
    }

    /// Page this input belongs to
    pub fn variant(&self) -> FormVariant {
        match self.details {
            LeadDetails::Equipment { .. } => FormVariant::Equipment,
            LeadDetails::Growth { .. } => FormVariant::Growth,
        }
    }

    /// Look up a field; `None` when the field is not part of this page
    pub fn value(&self, field: FieldId) -> Option<FieldRef<'_>> {
        let text = match (field, &self.details) {
            (FieldId::Name, _) => &self.name,
            (FieldId::Phone, _) => &self.phone,
            (FieldId::Email, _) => &self.email,
            (FieldId::Company, _) => &self.company,
            (FieldId::Location, _) => &self.location,
            (FieldId::Consent, _) => return Some(FieldRef::Flag(self.consent_given)),
            (FieldId::Equipment, LeadDetails::Equipment { equipment }) => equipment,
            (
                FieldId::MonthlyRevenue,
                LeadDetails::Growth {
                    monthly_revenue, ..
                },
            ) => monthly_revenue,
            (FieldId::MainChallenge, LeadDetails::Growth { main_challenge, .. }) => main_challenge,
            _ => return None,
        };
        Some(FieldRef::Text(text))
    }
}

/// A validated lead as sent to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    /// Idempotency key for the receiving CRM
    pub lead_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub page: FormVariant,
    #[serde(flatten)]
    pub input: LeadInput,
}

impl LeadSubmission {
    pub fn new(input: LeadInput) -> Self {
        Self {
            lead_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            page: input.variant(),
            input,
        }
    }
}
