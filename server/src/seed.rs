//! Seed dataset for a running service. Ids are fixed so clients and tests
//! can refer to known rows; Tuna Mayo, Spicy Sauce, and Seasonal Cookie are
//! seeded inactive to exercise the public active-only filter.

use menu::{
    AdminUser, Extra, Ingredient, IngredientCategory, ReferenceItem, Role, SpecialSandwich,
    TimeOfDay, TimeSettings,
};

use crate::store::StoredUser;

pub fn default_time_settings() -> TimeSettings {
    TimeSettings {
        order_window_from: time(6, 0),
        order_window_to: time(22, 0),
        day_shift_from: time(9, 0),
        day_shift_to: time(17, 0),
        night_shift_from: time(17, 0),
        night_shift_to: time(2, 0),
    }
}

pub fn users() -> Vec<StoredUser> {
    [
        ("user-admin-001", "Super Admin", "admin@goose.lake", Role::Admin),
        ("user-manager-001", "Office Manager", "manager@goose.lake", Role::Manager),
        ("user-chef-001", "Head Chef", "chef@goose.lake", Role::Chef),
    ]
    .into_iter()
    .map(|(id, name, email, role)| StoredUser {
        user: AdminUser {
            id: id.into(),
            full_name: name.into(),
            email: email.into(),
            role,
            is_active: true,
            created_at_iso: "2024-01-01T10:00:00Z".into(),
        },
        password: "password".into(),
    })
    .collect()
}

pub fn departments() -> Vec<ReferenceItem> {
    reference("11111111-1111-1111-1111-11111111111", &[
        "Operations",
        "Maintenance",
        "Administration",
        "Security",
        "Geology",
    ])
}

pub fn wings() -> Vec<ReferenceItem> {
    reference("22222222-2222-2222-2222-22222222222", &[
        "Wing A", "Wing B", "Wing C", "Wing D", "Wing E",
    ])
}

pub fn specials() -> Vec<SpecialSandwich> {
    [
        ("Chicken Classic", "Grilled chicken with lettuce and mayo", true),
        ("Turkey & Cheese", "Fresh turkey with swiss cheese", true),
        ("Tuna Mayo", "Tuna mix with sweet corn", false),
        ("Veggie Delight", "", true),
        ("Beef BBQ", "", true),
        ("Ham & Swiss", "", true),
        ("Spicy Chicken", "", true),
        ("Egg Salad", "", true),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (name, description, is_active))| SpecialSandwich {
        id: format!("33333333-3333-3333-3333-33333333333{}", n + 1),
        name: name.into(),
        description: description.into(),
        is_active,
    })
    .collect()
}

pub fn ingredients() -> Vec<Ingredient> {
    [
        ("White Bread", IngredientCategory::Bread, true),
        ("Whole Grain Bread", IngredientCategory::Bread, true),
        ("Chicken", IngredientCategory::Meat, true),
        ("Turkey", IngredientCategory::Meat, true),
        ("Tuna", IngredientCategory::Meat, true),
        ("Egg", IngredientCategory::Meat, true),
        ("Beef", IngredientCategory::Meat, true),
        ("Lettuce", IngredientCategory::Veggies, true),
        ("Tomato", IngredientCategory::Veggies, true),
        ("Cucumber", IngredientCategory::Veggies, true),
        ("Onion", IngredientCategory::Veggies, true),
        ("Pickles", IngredientCategory::Veggies, true),
        ("Mayo", IngredientCategory::Sauce, true),
        ("Mustard", IngredientCategory::Sauce, true),
        ("BBQ Sauce", IngredientCategory::Sauce, true),
        ("Spicy Sauce", IngredientCategory::Sauce, false),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (name, category, is_active))| Ingredient {
        id: format!("44444444-4444-4444-4444-4444444444{:02}", n + 41),
        name: name.into(),
        category,
        is_active,
    })
    .collect()
}

pub fn extras() -> Vec<Extra> {
    [
        ("Apple", true),
        ("Banana", true),
        ("Cookie", true),
        ("Yogurt", true),
        ("Water", true),
        ("Juice", true),
        ("Chips", true),
        ("Salad Cup", true),
        ("Protein Bar", true),
        ("Nuts Pack", true),
        ("Seasonal Cookie", false),
    ]
    .into_iter()
    .enumerate()
    .map(|(n, (name, is_active))| Extra {
        id: format!("55555555-5555-5555-5555-5555555555{:02}", n + 51),
        name: name.into(),
        is_active,
    })
    .collect()
}

fn reference(id_stem: &str, names: &[&str]) -> Vec<ReferenceItem> {
    names
        .iter()
        .enumerate()
        .map(|(n, name)| ReferenceItem {
            id: format!("{id_stem}{}", n + 1),
            name: (*name).into(),
        })
        .collect()
}

fn time(h: u16, m: u16) -> TimeOfDay {
    TimeOfDay::new(h, m).expect("static time")
}
