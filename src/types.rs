//!
//! Shared data types used across the access and table modules.
//!
//! `Role` is the closed set of actor categories, `RoleSet` a compact set of
//! them (backed by a `RoleMask`), and `Actor` the user a session is opened for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roles;

/// Bit-set of roles, one bit per `Role` discriminant.
/// - Bit 0: admin
/// - Bit 1: employee
/// - Bit 2: resident
/// - Bits 3-7: undefined, always cleared by `roles::canonicalise`.
pub type RoleMask = u8;

/// Category of actor. Governs which navigation entries and screens are visible.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Building administration (síndico / management company).
    Admin = 0,
    /// Staff: doormen, cleaners, maintenance, security.
    Employee = 1,
    /// Owner or tenant of a unit.
    Resident = 2,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Employee, Role::Resident];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::Resident => "resident",
        }
    }

    /// Human-facing label shown next to demo accounts on the login screen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Employee => "Porteiro",
            Self::Resident => "Morador",
        }
    }

    /// The single bit this role occupies in a `RoleMask`.
    #[inline]
    pub const fn bit(self) -> RoleMask {
        1 << (self as u8)
    }
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::Admin),
            1 => Ok(Role::Employee),
            2 => Ok(Role::Resident),
            _ => Err(format!("Invalid role tag: {}", value)),
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            "resident" => Ok(Role::Resident),
            other => Err(format!("Invalid role name: {:?}", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of roles, e.g. the roles allowed to see one navigation entry.
///
/// Serializes as a list of role names so static tables stay readable in JSON.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Role>", from = "Vec<Role>")]
pub struct RoleSet(RoleMask);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);
    pub const ALL: RoleSet = RoleSet(roles::bits::ALL);

    /// Builds a set from a slice of roles. Usable in `const` tables.
    pub const fn of(list: &[Role]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < list.len() {
            mask |= list[i].bit();
            i += 1;
        }
        RoleSet(mask)
    }

    /// Builds a set from a raw mask, dropping undefined bits.
    pub fn from_mask(mask: RoleMask) -> Self {
        RoleSet(roles::canonicalise(mask))
    }

    pub fn mask(&self) -> RoleMask {
        self.0
    }

    #[inline]
    pub fn contains(&self, role: Role) -> bool {
        roles::permits(self.0, role)
    }

    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    pub fn union(self, other: RoleSet) -> RoleSet {
        RoleSet(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in declaration order (admin, employee, resident).
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(move |r| self.contains(*r))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = RoleSet::EMPTY;
        for role in iter {
            set.insert(role);
        }
        set
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        RoleSet(role.bit())
    }
}

impl From<Vec<Role>> for RoleSet {
    fn from(list: Vec<Role>) -> Self {
        list.into_iter().collect()
    }
}

impl From<RoleSet> for Vec<Role> {
    fn from(set: RoleSet) -> Self {
        set.iter().collect()
    }
}

/// Opaque actor identifier as issued by the directory ("1", "res-3", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated user. Only `role` takes part in authorization; the
/// remaining fields are profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Unit the actor lives in; set for residents only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Actor {
            id: ActorId(id.into()),
            name: name.into(),
            email: email.into(),
            role,
            phone: None,
            unit_id: None,
            created_at: String::new(),
        }
    }

    /// First letter of the name, used for avatar placeholders.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
