//! Form field value objects

use super::phone::{format_phone, phone_digits};
use serde::Serialize;

/// Identifies a lead field across the form, the schema and the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Phone,
    Email,
    Company,
    Location,
    Equipment,
    MonthlyRevenue,
    MainChallenge,
    #[serde(rename = "consentGiven")]
    Consent,
}

impl FieldId {
    /// Key used for this field in lead payloads
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Company => "company",
            Self::Location => "location",
            Self::Equipment => "equipment",
            Self::MonthlyRevenue => "monthlyRevenue",
            Self::MainChallenge => "mainChallenge",
            Self::Consent => "consentGiven",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome Completo *",
            Self::Phone => "WhatsApp *",
            Self::Email => "E-mail *",
            Self::Company => "Empresa *",
            Self::Location => "Cidade/Estado *",
            Self::Equipment => "Equipamento de Interesse *",
            Self::MonthlyRevenue => "Faturamento Mensal *",
            Self::MainChallenge => "Principal Desafio *",
            Self::Consent => "Autorizo o uso dos meus dados para contato comercial. *",
        }
    }

    /// Hint rendered while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Seu nome completo",
            Self::Phone => "(99) 99999-9999",
            Self::Email => "seu@email.com",
            Self::Company => "Nome da sua empresa",
            Self::Location => "Cidade, Estado",
            Self::Equipment => "Selecione o equipamento",
            Self::MonthlyRevenue => "Selecione o faturamento",
            Self::MainChallenge => "Selecione o desafio",
            Self::Consent => "",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Always holds formatter output (or is empty)
    Phone(String),
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new phone field
    pub fn phone(id: FieldId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Phone(String::new()),
        }
    }

    /// Create a new selection field over a fixed option list
    pub fn choice(id: FieldId, options: &'static [&'static str]) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
        }
    }

    /// Create a new unchecked checkbox
    pub fn checkbox(id: FieldId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Checkbox(false),
        }
    }

    /// Get the text value (selected option for choices, empty for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Phone(s) => s,
            FieldValue::Choice { options, selected } => {
                selected.and_then(|i| options.get(i).copied()).unwrap_or("")
            }
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checkbox state (false for every other kind)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(_))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Phone(s) => {
                s.push(c);
                *s = format_phone(s);
            }
            FieldValue::Choice { .. } | FieldValue::Checkbox(_) => {}
        }
    }

    /// Remove the last character from the field value.
    ///
    /// Phone fields drop their last digit instead, and become empty once no
    /// digit is left so the opening parenthesis does not get stuck.
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Phone(s) => {
                let mut digits = phone_digits(s);
                digits.pop();
                *s = if digits.is_empty() {
                    String::new()
                } else {
                    format_phone(&digits)
                };
            }
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Checkbox(_) => {}
        }
    }

    /// Replace the whole value of a text or phone field
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value.to_string(),
            FieldValue::Phone(s) => *s = format_phone(value),
            FieldValue::Choice { .. } | FieldValue::Checkbox(_) => {}
        }
    }

    /// Select the option equal to `value`; unknown values clear the selection
    pub fn select(&mut self, value: &str) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = options.iter().position(|o| *o == value);
        }
    }

    /// Move the selection to the next option (wraps around)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                None => 0,
                Some(i) => (i + 1) % options.len(),
            });
        }
    }

    /// Move the selection to the previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                None | Some(0) => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let FieldValue::Checkbox(value) = &mut self.value {
            *value = checked;
        }
    }

    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(value) = &mut self.value {
            *value = !*value;
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Phone(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Checkbox(value) => *value = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Phone(s) => s.clone(),
            FieldValue::Choice { .. } => match self.as_text() {
                "" => String::new(),
                option => format!("◀ {option} ▶"),
            },
            FieldValue::Checkbox(true) => "[x]".to_string(),
            FieldValue::Checkbox(false) => "[ ]".to_string(),
        }
    }
}
