//! Navigation capabilities: which roles may see which entry, and which screen.
//!
//! The tables are static and never mutated. Visibility is always answered by
//! `Authorizer::has_permission` against an entry's `roles`.

use serde::Serialize;

use crate::access::context::Authorizer;
use crate::error::AuthError;
use crate::types::{Actor, Role, RoleSet};

const ALL: RoleSet = RoleSet::ALL;
const ADMIN: RoleSet = RoleSet::of(&[Role::Admin]);
const STAFF: RoleSet = RoleSet::of(&[Role::Admin, Role::Employee]);
const RESIDENT: RoleSet = RoleSet::of(&[Role::Resident]);
const BILLING: RoleSet = RoleSet::of(&[Role::Admin, Role::Resident]);

/// Sidebar group an entry is drawn under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Main,
    Administration,
    Doorman,
    Resident,
    Finance,
}

impl NavSection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Main => "Principal",
            Self::Administration => "Administracao",
            Self::Doorman => "Portaria",
            Self::Resident => "Morador",
            Self::Finance => "Financeiro",
        }
    }
}

/// One navigation entry and the roles permitted to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavCapability {
    pub title: &'static str,
    pub href: &'static str,
    pub section: NavSection,
    pub roles: RoleSet,
}

impl NavCapability {
    const fn new(title: &'static str, href: &'static str, section: NavSection, roles: RoleSet) -> Self {
        NavCapability { title, href, section, roles }
    }

    /// True when `path` is this entry's page or one of its sub-pages.
    pub fn is_active(&self, path: &str) -> bool {
        match path.strip_prefix(self.href) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Sidebar entries, in display order.
pub static NAVIGATION: &[NavCapability] = &[
    NavCapability::new("Dashboard", "/dashboard", NavSection::Main, ALL),
    NavCapability::new("Unidades", "/admin/units", NavSection::Administration, ADMIN),
    NavCapability::new("Moradores", "/admin/residents", NavSection::Administration, ADMIN),
    NavCapability::new("Funcionarios", "/admin/employees", NavSection::Administration, ADMIN),
    NavCapability::new("Comunicados", "/admin/announcements", NavSection::Administration, ADMIN),
    NavCapability::new("Auditoria", "/admin/audit", NavSection::Administration, ADMIN),
    NavCapability::new("Portaria", "/doorman", NavSection::Doorman, STAFF),
    NavCapability::new("Visitantes", "/doorman/visitors", NavSection::Doorman, STAFF),
    NavCapability::new("Ocorrencias", "/doorman/occurrences", NavSection::Doorman, STAFF),
    NavCapability::new("Minha Unidade", "/resident/unit", NavSection::Resident, RESIDENT),
    NavCapability::new("Pre-cadastro", "/resident/visitors", NavSection::Resident, RESIDENT),
    NavCapability::new("Comunicados", "/resident/announcements", NavSection::Resident, RESIDENT),
    NavCapability::new("Cobrancas", "/resident/billing", NavSection::Finance, BILLING),
    NavCapability::new("Relatorios", "/admin/financial", NavSection::Finance, ADMIN),
];

/// Area-wide guards for screens reachable without a sidebar entry
/// (e.g. `/admin/security`, `/doorman/deliveries`).
pub static SCREEN_GUARDS: &[NavCapability] = &[
    NavCapability::new("Administracao", "/admin", NavSection::Administration, ADMIN),
    NavCapability::new("Morador", "/resident", NavSection::Resident, RESIDENT),
];

/// Entries of `NAVIGATION` the current actor may see, in table order.
pub fn visible_entries<A: Authorizer + ?Sized>(auth: &A) -> Vec<&'static NavCapability> {
    NAVIGATION.iter().filter(|entry| auth.has_permission(entry.roles)).collect()
}

/// Visible entries grouped by section. Sections with nothing visible are
/// omitted; order follows the first appearance of each section in the table.
pub fn visible_sections<A: Authorizer + ?Sized>(auth: &A) -> Vec<(NavSection, Vec<&'static NavCapability>)> {
    let mut sections: Vec<(NavSection, Vec<&'static NavCapability>)> = Vec::new();
    for entry in visible_entries(auth) {
        match sections.iter_mut().find(|(section, _)| *section == entry.section) {
            Some((_, entries)) => entries.push(entry),
            None => sections.push((entry.section, vec![entry])),
        }
    }
    sections
}

/// The entry or guard governing `path`: the one with the longest matching href.
pub fn governing_capability(path: &str) -> Option<&'static NavCapability> {
    NAVIGATION
        .iter()
        .chain(SCREEN_GUARDS.iter())
        .filter(|entry| entry.is_active(path))
        .max_by_key(|entry| entry.href.len())
}

/// Screen gate for a page container. Paths without a governing capability
/// (profile, settings) only need an open session.
pub fn guard_route<'a, A: Authorizer + ?Sized>(auth: &'a A, path: &str) -> Result<&'a Actor, AuthError> {
    let required = governing_capability(path).map_or(RoleSet::ALL, |entry| entry.roles);
    let outcome = auth.require(required);
    if let Err(err) = &outcome {
        tracing::debug!(path, %err, "route denied");
    }
    outcome
}

pub fn route_allowed<A: Authorizer + ?Sized>(auth: &A, path: &str) -> bool {
    guard_route(auth, path).is_ok()
}
