//! Landing page variants and their field sets

use super::field::FieldId;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Equipment a rental company can ask a quote for
pub const EQUIPMENT_OPTIONS: &[&str] = &[
    "Andaime",
    "Escora Metálica",
    "Betoneira",
    "Compactador",
    "Outros",
];

/// Monthly revenue brackets offered on the acceleration page
pub const REVENUE_OPTIONS: &[&str] = &[
    "Até R$ 50 mil",
    "R$ 50 mil a R$ 100 mil",
    "R$ 100 mil a R$ 300 mil",
    "R$ 300 mil a R$ 1 milhão",
    "Acima de R$ 1 milhão",
];

/// Main business challenge offered on the acceleration page
pub const CHALLENGE_OPTIONS: &[&str] = &[
    "Gerar mais clientes",
    "Aparecer no Google",
    "Converter orçamentos em contratos",
    "Aumentar o giro do estoque",
    "Outros",
];

const EQUIPMENT_FIELDS: &[FieldId] = &[
    FieldId::Name,
    FieldId::Phone,
    FieldId::Email,
    FieldId::Company,
    FieldId::Location,
    FieldId::Equipment,
    FieldId::Consent,
];

const GROWTH_FIELDS: &[FieldId] = &[
    FieldId::Name,
    FieldId::Phone,
    FieldId::Email,
    FieldId::Company,
    FieldId::Location,
    FieldId::MonthlyRevenue,
    FieldId::MainChallenge,
    FieldId::Consent,
];

/// Which landing page the form is embedded in.
///
/// Both pages share one form implementation; the variant only decides the
/// field set, the option lists and the surrounding copy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Equipment quote page
    #[default]
    Equipment,
    /// Marketing acceleration page
    Growth,
}

impl FormVariant {
    /// Stable identifier used in config files and lead payloads
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Growth => "growth",
        }
    }

    /// Fields shown on this page, in focus order
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Self::Equipment => EQUIPMENT_FIELDS,
            Self::Growth => GROWTH_FIELDS,
        }
    }

    pub fn has_field(&self, field: FieldId) -> bool {
        self.fields().contains(&field)
    }

    /// Allowed values for a selection field, `None` for free-form fields
    pub fn options(&self, field: FieldId) -> Option<&'static [&'static str]> {
        if !self.has_field(field) {
            return None;
        }
        match field {
            FieldId::Equipment => Some(EQUIPMENT_OPTIONS),
            FieldId::MonthlyRevenue => Some(REVENUE_OPTIONS),
            FieldId::MainChallenge => Some(CHALLENGE_OPTIONS),
            _ => None,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Equipment => "Solicite sua Proposta",
            Self::Growth => "Acelere sua locadora com o método ODuo",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Equipment => "Preencha os dados e receba uma cotação personalizada",
            Self::Growth => "Aumente em até 3x a quantidade de clientes da sua locadora",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Equipment => "Quero receber uma proposta agora",
            Self::Growth => "Quero acelerar minha locadora",
        }
    }
}

impl std::fmt::Display for FormVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
