use crate::error::FailureKind;
use crate::types::MealSlot;
use serde::{Deserialize, Serialize};

/// Source of every string the form shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

impl Locale {
    /// Accepts `en`/`pt` style codes as well as the full names.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Some(Self::English),
            "pt" | "pt-br" | "pt-pt" | "portuguese" => Some(Self::Portuguese),
            _ => None,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::English => "Generate menu",
            Self::Portuguese => "Gerar cardápio",
        }
    }

    pub fn loading_label(self) -> &'static str {
        match self {
            Self::English => "Generating…",
            Self::Portuguese => "Gerando…",
        }
    }

    pub fn slot_label(self, slot: MealSlot) -> &'static str {
        match (self, slot) {
            (Self::English, MealSlot::Midday) => "Lunch",
            (Self::English, MealSlot::Evening) => "Dinner",
            (Self::Portuguese, MealSlot::Midday) => "Almoço",
            (Self::Portuguese, MealSlot::Evening) => "Jantar",
        }
    }

    /// Fixed banner text for a failed submit. Never includes error detail.
    pub fn failure_message(self, kind: FailureKind) -> &'static str {
        match (self, kind) {
            (Self::English, FailureKind::Timeout) => {
                "The meal planner took too long to answer. Please try again."
            }
            (Self::English, _) => {
                "Could not generate the menu. Check that the server is running and try again."
            }
            (Self::Portuguese, FailureKind::Timeout) => {
                "O gerador de cardápio demorou demais para responder. Tente novamente."
            }
            (Self::Portuguese, _) => {
                "Erro ao gerar o cardápio. Verifique se o servidor está rodando."
            }
        }
    }
}
