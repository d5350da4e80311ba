#![no_main]

// Harness: session_transitions
// Focus: has_permission agrees with the current actor's role after any login/logout sequence.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use condogest_core::access::{ActorSource, AuthContext, Authorizer};
use condogest_core::fixtures;
use condogest_core::types::RoleSet;

#[derive(Arbitrary, Debug, Clone)]
enum Op {
    Login { email: String, credential: String },
    LoginDemo { index: u8, credential: String },
    Logout,
}

#[derive(Arbitrary, Debug, Clone)]
struct Frame {
    ops: Vec<Op>,
    allowed: u8,
}

fuzz_target!(|frame: Frame| {
    let actors = fixtures::demo_actors();
    let mut ctx = AuthContext::new(fixtures::demo_directory());
    let allowed = RoleSet::from_mask(frame.allowed);

    for op in frame.ops {
        match op {
            Op::Login { email, credential } => {
                let _ = ctx.login(&email, &credential);
            }
            Op::LoginDemo { index, credential } => {
                let actor = &actors[index as usize % actors.len()];
                let outcome = ctx.login(&actor.email, &credential).map(|a| a.role);
                assert_eq!(outcome.is_ok(), !credential.is_empty());
            }
            Op::Logout => ctx.logout(),
        }
        let expected = ctx.current_actor().is_some_and(|a| allowed.contains(a.role));
        assert_eq!(ctx.has_permission(allowed), expected);
    }
});
