#![cfg(test)]

//! End-to-end scenarios: the session gate and the browser working together
//! the way a dashboard screen uses them.

use condogest_core::access::{self, ActorSource, AuthContext, Authorizer};
use condogest_core::error::AuthError;
use condogest_core::fixtures::{self, ADMIN_EMAIL, RESIDENT_EMAIL};
use condogest_core::records::{self, Resident};
use condogest_core::table::{ColumnDef, TableBody, TableSpec, TabularBrowser};
use condogest_core::types::{Role, RoleSet};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Named {
    name: String,
}

fn named(name: &str) -> Named {
    Named { name: name.to_string() }
}

// --- Authorization scenarios ---

#[test]
fn test_admin_login_grants_admin_only() {
    let mut ctx = AuthContext::new(fixtures::demo_directory());
    let actor = ctx.login(ADMIN_EMAIL, "qualquer").unwrap();
    assert_eq!(actor.role, Role::Admin);
    assert!(ctx.has_permission(RoleSet::of(&[Role::Admin])));
    assert!(!ctx.has_permission(RoleSet::of(&[Role::Resident])));
}

#[test]
fn test_unknown_email_returns_invalid_credentials() {
    let mut ctx = AuthContext::new(fixtures::demo_directory());
    assert_eq!(ctx.login("desconhecido@email.com", "x"), Err(AuthError::InvalidCredentials));
    assert!(ctx.current_actor().is_none());
}

#[test]
fn test_no_actor_means_no_permission() {
    let ctx = AuthContext::new(fixtures::demo_directory());
    for role in Role::ALL {
        assert!(!ctx.has_permission(role.into()));
    }
    assert!(!ctx.has_permission(RoleSet::ALL));
}

// --- Browser scenarios ---

#[test]
fn test_twenty_five_residents_three_pages() {
    let units = fixtures::units();
    let residents = fixtures::numbered_residents(25);
    let mut browser = TabularBrowser::new(records::resident_table(&units), &residents);
    assert_eq!(browser.total_pages(), 3);
    browser.set_page(3);
    assert_eq!(browser.visible_rows().count(), 5);
}

#[test]
fn test_case_insensitive_name_search() {
    let data = vec![named("Ana"), named("Bruno"), named("Ana Paula")];
    let spec = TableSpec::new(vec![ColumnDef::new("name", "Nome", |n: &Named| n.name.clone())])
        .searchable_by("name", |n: &Named| n.name.clone());
    let mut browser = TabularBrowser::new(spec, &data);
    browser.set_search_query("ana");
    let found: Vec<&str> = browser.visible_rows().map(|n| n.name.as_str()).collect();
    assert_eq!(found, vec!["Ana", "Ana Paula"]);
}

// --- Screen flow ---

/// A residents screen: gated on its route, then browsed.
fn residents_screen<A: Authorizer>(auth: &A, data: &[Resident], query: &str) -> Result<TableBody, AuthError> {
    access::guard_route(auth, "/admin/residents")?;
    let units = fixtures::units();
    let mut browser = TabularBrowser::new(records::resident_table(&units), data);
    browser.set_search_query(query);
    Ok(browser.render().body)
}

#[test]
fn test_residents_screen_for_admin() {
    let residents = fixtures::residents();
    let mut ctx = AuthContext::new(fixtures::demo_directory());
    ctx.login(ADMIN_EMAIL, "x").unwrap();

    let TableBody::Rows(rows) = residents_screen(&ctx, &residents, "souza").unwrap() else {
        panic!("expected rows");
    };
    let names: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["Carla Souza", "Roberto Souza"]);

    assert_eq!(
        residents_screen(&ctx, &residents, "ninguem").unwrap(),
        TableBody::Empty("Nenhum registro encontrado".to_string())
    );
}

#[test]
fn test_residents_screen_denied_to_resident() {
    let residents = fixtures::residents();
    let mut ctx = AuthContext::new(fixtures::demo_directory());
    ctx.login(RESIDENT_EMAIL, "x").unwrap();
    assert!(matches!(
        residents_screen(&ctx, &residents, ""),
        Err(AuthError::Forbidden { .. })
    ));
    ctx.logout();
    assert_eq!(residents_screen(&ctx, &residents, ""), Err(AuthError::NotAuthenticated));
}

/// The resident's own visitors screen: gated, then fed only that resident's
/// pre-registered visitors.
fn resident_visitors_screen<A: Authorizer>(auth: &A, query: &str) -> Result<TableBody, AuthError> {
    let actor = access::guard_route(auth, "/resident/visitors")?;
    let feed = records::resident_visitors(actor, &fixtures::residents(), &fixtures::visitors());
    let mut browser = TabularBrowser::new(records::resident_visitor_table(), &feed);
    browser.set_search_query(query);
    Ok(browser.render().body)
}

#[test]
fn test_resident_sees_only_own_visitors() {
    let mut ctx = AuthContext::new(fixtures::demo_directory());
    ctx.login(RESIDENT_EMAIL, "x").unwrap();

    let TableBody::Rows(rows) = resident_visitors_screen(&ctx, "").unwrap() else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Paulo Mendes");
    assert_eq!(
        resident_visitors_screen(&ctx, "lucia").unwrap(),
        TableBody::Empty("Nenhum visitante pre-cadastrado".to_string())
    );

    ctx.login(ADMIN_EMAIL, "x").unwrap();
    assert!(matches!(resident_visitors_screen(&ctx, ""), Err(AuthError::Forbidden { .. })));
}

#[test]
fn test_dashboard_open_to_every_role() {
    for actor in fixtures::demo_actors() {
        let mut ctx = AuthContext::new(fixtures::demo_directory());
        ctx.login(&actor.email, "x").unwrap();
        assert!(access::route_allowed(&ctx, "/dashboard"), "{} denied", actor.role);
    }
}
