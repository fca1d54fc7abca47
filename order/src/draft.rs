use serde::{Deserialize, Serialize};

use menu::Id;

use crate::config::SandwichConfig;

/// The order form as submitted, before validation. Field names mirror the
/// form exactly; the pickup time stays a raw string until the validator
/// parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub first_name: String,
    pub last_name: String,
    pub department_id: Id,
    pub wing_id: Id,
    pub pickup_time: String,
    #[serde(default)]
    pub has_allergies: bool,
    #[serde(default)]
    pub allergies_text: String,
    pub sandwich_config: SandwichConfig,
    #[serde(default)]
    pub selected_special_id: Id,
    #[serde(default)]
    pub selected_ingredient_ids: Vec<Id>,
    #[serde(default)]
    pub selected_extra_ids: Vec<Id>,
    #[serde(default)]
    pub notes: String,
}
