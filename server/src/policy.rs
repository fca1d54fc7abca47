//! Access policy for the admin surface. One table, consulted by every
//! handler, never a per-route role list.
//!
//! | resource | ADMIN | MANAGER | CHEF |
//! |----------|-------|---------|------|
//! | Users    | yes   | yes     | no   |
//! | Catalog  | yes   | no      | yes  |
//! | Settings | yes   | yes     | no   |
//! | Qr       | yes   | yes     | no   |
//!
//! On top of the table, a manager may only create or reset CHEF accounts.

use menu::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Catalog,
    Settings,
    Qr,
}

pub fn can_access(role: Role, resource: Resource) -> bool {
    match resource {
        Resource::Users | Resource::Settings | Resource::Qr => {
            matches!(role, Role::Admin | Role::Manager)
        }
        Resource::Catalog => matches!(role, Role::Admin | Role::Chef),
    }
}

/// Whether `actor` may create/reset an account with role `target`.
pub fn can_manage_user(actor: Role, target: Role) -> bool {
    match actor {
        Role::Admin => true,
        Role::Manager => target == Role::Chef,
        Role::Chef => false,
    }
}
