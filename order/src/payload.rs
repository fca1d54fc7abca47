use serde::{Deserialize, Serialize};

use menu::{Id, Shift, TimeOfDay};

use crate::config::SandwichConfig;

/// One sandwich line of the normalized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SandwichEntry {
    #[serde(rename = "SPECIAL")]
    Special { id: Id, quantity: u8 },
    #[serde(rename = "CUSTOM")]
    Custom {
        #[serde(rename = "ingredientIds")]
        ingredient_ids: Vec<Id>,
        quantity: u8,
    },
}

impl SandwichEntry {
    pub fn quantity(&self) -> u8 {
        match self {
            SandwichEntry::Special { quantity, .. } | SandwichEntry::Custom { quantity, .. } => {
                *quantity
            }
        }
    }
}

/// Validated, normalized order as handed to the backend. Produced only by
/// [`crate::validate::validate`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub first_name: String,
    pub last_name: String,
    pub department_id: Id,
    pub wing_id: Id,
    pub pickup_time: TimeOfDay,
    /// Advisory DAY/NIGHT label, never an eligibility gate.
    pub shift: Shift,
    pub has_allergies: bool,
    pub allergies_text: Option<String>,
    pub sandwiches: Vec<SandwichEntry>,
    pub extra_ids: Vec<Id>,
    pub notes: String,
}

/// One entry per sandwich line: a doubled configuration is one quantity-2
/// entry, MIXED is two separate quantity-1 entries (SPECIAL first).
pub(crate) fn build_sandwiches(
    config: SandwichConfig,
    special_id: &str,
    ingredient_ids: Vec<Id>,
) -> Vec<SandwichEntry> {
    match config {
        SandwichConfig::Special | SandwichConfig::DoubleSpecial => vec![SandwichEntry::Special {
            id: special_id.to_string(),
            quantity: if config == SandwichConfig::DoubleSpecial {
                2
            } else {
                1
            },
        }],
        SandwichConfig::Custom | SandwichConfig::DoubleCustom => vec![SandwichEntry::Custom {
            ingredient_ids,
            quantity: if config == SandwichConfig::DoubleCustom {
                2
            } else {
                1
            },
        }],
        SandwichConfig::Mixed => vec![
            SandwichEntry::Special {
                id: special_id.to_string(),
                quantity: 1,
            },
            SandwichEntry::Custom {
                ingredient_ids,
                quantity: 1,
            },
        ],
    }
}
