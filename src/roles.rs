//!
//! Role algebra for CondoGest.
//! Defines the bit flag of each role and the membership checks every
//! authorization decision ultimately reduces to.

use crate::types::{Role, RoleMask};

/// Role bit flags (bits 0-2 defined, 3-7 undefined).
pub mod bits {
    use super::{Role, RoleMask};

    /// Building administration.
    pub const ADMIN: RoleMask = Role::Admin.bit(); // 0b001
    /// Staff working the front desk and the building.
    pub const EMPLOYEE: RoleMask = Role::Employee.bit(); // 0b010
    /// Unit owners and tenants.
    pub const RESIDENT: RoleMask = Role::Resident.bit(); // 0b100

    /// Every defined role.
    pub const ALL: RoleMask = ADMIN | EMPLOYEE | RESIDENT;
}

/// Clears every bit that does not correspond to a defined role.
#[inline]
pub fn canonicalise(mask: RoleMask) -> RoleMask {
    mask & bits::ALL
}

/// Checks whether `role` is a member of the `allowed` mask.
///
/// Roles are flat: no role implies another, so an admin is not automatically
/// allowed where only residents are. Undefined bits in `allowed` never grant
/// anything.
#[inline]
pub fn permits(allowed: RoleMask, role: Role) -> bool {
    (canonicalise(allowed) & role.bit()) != 0
}
