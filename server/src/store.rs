//! # In-Memory Store
//!
//! The single repository behind every handler.
//!
//! Earlier iterations of this system kept the mock collections as
//! module-level arrays mutated in place, which leaked state across tests.
//! Here the store is owned by the app state and constructed per instance:
//! [`Store::seeded`] for the running service, [`Store::empty`] plus explicit
//! inserts for tests that want isolation.
//!
//! - Collections sit behind `RwLock`s; handlers take short lock scopes and
//!   never hold a lock across an await point.
//! - Order ids are deterministic counter-suffixed, so a test can predict the
//!   id of the nth order.
//! - The simulated print pipeline flips an order to PRINTED on its third
//!   status poll; the merge through [`OrderStatus::merge`] keeps it sticky.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use menu::{
    AdminUser, Extra, Id, Ingredient, MaintenanceSettings, OrderStatus, OrderWindows,
    ReferenceItem, SpecialSandwich, TimeRange, TimeSettings,
};
use order::OrderPayload;

use crate::seed;

/// Polls it takes the simulated printer to confirm an order.
const POLLS_UNTIL_PRINTED: u32 = 3;

pub struct StoredUser {
    pub user: AdminUser,
    pub password: String,
}

pub struct OrderRecord {
    pub payload: OrderPayload,
    pub status: OrderStatus,
    pub polls: u32,
}

pub struct Store {
    pub departments: Vec<ReferenceItem>,
    pub wings: Vec<ReferenceItem>,
    users: RwLock<Vec<StoredUser>>,
    specials: RwLock<Vec<SpecialSandwich>>,
    ingredients: RwLock<Vec<Ingredient>>,
    extras: RwLock<Vec<Extra>>,
    time: RwLock<TimeSettings>,
    maintenance: RwLock<MaintenanceSettings>,
    orders: RwLock<HashMap<Id, OrderRecord>>,
    order_counter: AtomicU64,
    item_counter: AtomicU64,
}

impl Store {
    pub fn empty() -> Self {
        Self {
            departments: Vec::new(),
            wings: Vec::new(),
            users: RwLock::new(Vec::new()),
            specials: RwLock::new(Vec::new()),
            ingredients: RwLock::new(Vec::new()),
            extras: RwLock::new(Vec::new()),
            time: RwLock::new(seed::default_time_settings()),
            maintenance: RwLock::new(MaintenanceSettings::default()),
            orders: RwLock::new(HashMap::new()),
            order_counter: AtomicU64::new(0),
            item_counter: AtomicU64::new(0),
        }
    }

    pub fn seeded() -> Self {
        Self {
            departments: seed::departments(),
            wings: seed::wings(),
            users: RwLock::new(seed::users()),
            specials: RwLock::new(seed::specials()),
            ingredients: RwLock::new(seed::ingredients()),
            extras: RwLock::new(seed::extras()),
            ..Self::empty()
        }
    }

    // --- catalog ---

    pub fn active_specials(&self) -> Vec<SpecialSandwich> {
        self.specials
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect()
    }

    pub fn active_ingredients(&self) -> Vec<Ingredient> {
        self.ingredients
            .read()
            .unwrap()
            .iter()
            .filter(|i| i.is_active)
            .cloned()
            .collect()
    }

    pub fn active_extras(&self) -> Vec<Extra> {
        self.extras
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.is_active)
            .cloned()
            .collect()
    }

    pub fn all_specials(&self) -> Vec<SpecialSandwich> {
        self.specials.read().unwrap().clone()
    }

    pub fn all_ingredients(&self) -> Vec<Ingredient> {
        self.ingredients.read().unwrap().clone()
    }

    pub fn all_extras(&self) -> Vec<Extra> {
        self.extras.read().unwrap().clone()
    }

    pub fn insert_special(&self, mut item: SpecialSandwich) -> SpecialSandwich {
        item.id = self.next_item_id("spec");
        self.specials.write().unwrap().push(item.clone());
        item
    }

    pub fn insert_ingredient(&self, mut item: Ingredient) -> Ingredient {
        item.id = self.next_item_id("ing");
        self.ingredients.write().unwrap().push(item.clone());
        item
    }

    pub fn insert_extra(&self, mut item: Extra) -> Extra {
        item.id = self.next_item_id("ext");
        self.extras.write().unwrap().push(item.clone());
        item
    }

    pub fn update_special<F>(&self, id: &str, apply: F) -> Option<SpecialSandwich>
    where
        F: FnOnce(&mut SpecialSandwich),
    {
        let mut specials = self.specials.write().unwrap();
        let item = specials.iter_mut().find(|s| s.id == id)?;
        apply(item);
        Some(item.clone())
    }

    pub fn update_ingredient<F>(&self, id: &str, apply: F) -> Option<Ingredient>
    where
        F: FnOnce(&mut Ingredient),
    {
        let mut ingredients = self.ingredients.write().unwrap();
        let item = ingredients.iter_mut().find(|i| i.id == id)?;
        apply(item);
        Some(item.clone())
    }

    pub fn update_extra<F>(&self, id: &str, apply: F) -> Option<Extra>
    where
        F: FnOnce(&mut Extra),
    {
        let mut extras = self.extras.write().unwrap();
        let item = extras.iter_mut().find(|e| e.id == id)?;
        apply(item);
        Some(item.clone())
    }

    pub fn delete_special(&self, id: &str) {
        self.specials.write().unwrap().retain(|s| s.id != id);
    }

    pub fn delete_ingredient(&self, id: &str) {
        self.ingredients.write().unwrap().retain(|i| i.id != id);
    }

    pub fn delete_extra(&self, id: &str) {
        self.extras.write().unwrap().retain(|e| e.id != id);
    }

    // --- users ---

    pub fn insert_user(&self, user: AdminUser, password: String) {
        self.users.write().unwrap().push(StoredUser { user, password });
    }

    pub fn users(&self) -> Vec<AdminUser> {
        self.users.read().unwrap().iter().map(|u| u.user.clone()).collect()
    }

    pub fn user_by_id(&self, id: &str) -> Option<AdminUser> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone())
    }

    pub fn user_by_credentials(&self, email: &str, password: &str) -> Option<AdminUser> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.user.email == email && u.password == password)
            .map(|u| u.user.clone())
    }

    pub fn next_user_id(&self) -> Id {
        format!("user-{:03}", self.item_counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    // --- settings ---

    pub fn time_settings(&self) -> TimeSettings {
        *self.time.read().unwrap()
    }

    pub fn set_time_settings(&self, settings: TimeSettings) {
        *self.time.write().unwrap() = settings;
    }

    pub fn maintenance(&self) -> MaintenanceSettings {
        self.maintenance.read().unwrap().clone()
    }

    pub fn set_maintenance(&self, settings: MaintenanceSettings) {
        *self.maintenance.write().unwrap() = settings;
    }

    /// Window config as served publicly, derived from the time settings.
    pub fn order_windows(&self) -> OrderWindows {
        let time = self.time_settings();
        OrderWindows {
            order_window: TimeRange {
                from: time.order_window_from,
                to: time.order_window_to,
            },
            day_shift: TimeRange {
                from: time.day_shift_from,
                to: time.day_shift_to,
            },
        }
    }

    // --- orders ---

    pub fn create_order(&self, payload: OrderPayload) -> Id {
        let id = format!(
            "99999999-0000-0000-0000-{:012}",
            self.order_counter.fetch_add(1, Ordering::Relaxed) + 1
        );
        self.orders.write().unwrap().insert(
            id.clone(),
            OrderRecord {
                payload,
                status: OrderStatus::SentToPrint,
                polls: 0,
            },
        );
        id
    }

    /// One status poll: advances the simulated print pipeline and reports
    /// the (monotonic) status. None for unknown ids.
    pub fn poll_status(&self, id: &str) -> Option<OrderStatus> {
        let mut orders = self.orders.write().unwrap();
        let record = orders.get_mut(id)?;
        record.polls += 1;

        let reported = if record.polls >= POLLS_UNTIL_PRINTED {
            OrderStatus::Printed
        } else {
            OrderStatus::SentToPrint
        };
        record.status = record.status.merge(reported);
        Some(record.status)
    }

    fn next_item_id(&self, prefix: &str) -> Id {
        format!("{prefix}-{:03}", self.item_counter.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu::IngredientCategory;

    #[test]
    fn stores_do_not_share_state() {
        let a = Store::empty();
        let b = Store::empty();
        a.insert_extra(Extra {
            id: String::new(),
            name: "Apple".into(),
            is_active: true,
        });
        assert_eq!(a.all_extras().len(), 1);
        assert!(b.all_extras().is_empty());
    }

    #[test]
    fn order_ids_are_deterministic() {
        let store = Store::empty();
        let payload = sample_payload();
        assert_eq!(
            store.create_order(payload.clone()),
            "99999999-0000-0000-0000-000000000001"
        );
        assert_eq!(
            store.create_order(payload),
            "99999999-0000-0000-0000-000000000002"
        );
    }

    #[test]
    fn status_flips_on_third_poll_and_stays_printed() {
        let store = Store::empty();
        let id = store.create_order(sample_payload());

        assert_eq!(store.poll_status(&id), Some(OrderStatus::SentToPrint));
        assert_eq!(store.poll_status(&id), Some(OrderStatus::SentToPrint));
        assert_eq!(store.poll_status(&id), Some(OrderStatus::Printed));
        assert_eq!(store.poll_status(&id), Some(OrderStatus::Printed));

        assert_eq!(store.poll_status("unknown"), None);
    }

    #[test]
    fn active_filters_drop_inactive_items() {
        let store = Store::empty();
        store.insert_ingredient(Ingredient {
            id: String::new(),
            name: "Chicken".into(),
            category: IngredientCategory::Meat,
            is_active: true,
        });
        store.insert_ingredient(Ingredient {
            id: String::new(),
            name: "Spicy Sauce".into(),
            category: IngredientCategory::Sauce,
            is_active: false,
        });

        assert_eq!(store.all_ingredients().len(), 2);
        let active = store.active_ingredients();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Chicken");
    }

    fn sample_payload() -> OrderPayload {
        use order::SandwichEntry;

        OrderPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            department_id: "dep-1".into(),
            wing_id: "wing-1".into(),
            pickup_time: "12:00".parse().unwrap(),
            shift: menu::Shift::Day,
            has_allergies: false,
            allergies_text: None,
            sandwiches: vec![SandwichEntry::Special {
                id: "spec-1".into(),
                quantity: 1,
            }],
            extra_ids: vec![],
            notes: String::new(),
        }
    }
}
