//! Admin-side types: staff roles and accounts, operating-hour settings,
//! maintenance mode, public service status.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Staff role. Access to admin resources is decided by the server's policy
/// module, never by ad hoc role lists in handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Chef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at_iso: String,
}

/// Operating hours, all minute-granularity. The night shift may wrap past
/// midnight (e.g. 17:00 to 02:00); only the order window and day shift are
/// consulted by validation, the rest is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSettings {
    pub order_window_from: TimeOfDay,
    pub order_window_to: TimeOfDay,
    pub day_shift_from: TimeOfDay,
    pub day_shift_to: TimeOfDay,
    pub night_shift_from: TimeOfDay,
    pub night_shift_to: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSettings {
    pub is_enabled: bool,
    pub message: Option<String>,
    pub until_iso: Option<String>,
}

/// Public service banner: closed (with a message) while maintenance mode is
/// enabled, open otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub is_open: bool,
    pub message: Option<String>,
}
