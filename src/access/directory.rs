//! Actor directory: the lookup-by-email source consulted on login.

use crate::types::Actor;

/// Source of known actors. A future API client implements this; the context
/// never enumerates or mutates the directory.
pub trait ActorDirectory {
    /// Returns the actor registered under `email`, if any. Matching is exact.
    fn find_by_email(&self, email: &str) -> Option<Actor>;
}

impl<D: ActorDirectory + ?Sized> ActorDirectory for &D {
    fn find_by_email(&self, email: &str) -> Option<Actor> {
        (**self).find_by_email(email)
    }
}

/// Directory backed by a vector, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    actors: Vec<Actor>,
}

impl InMemoryDirectory {
    pub fn new(actors: Vec<Actor>) -> Self {
        InMemoryDirectory { actors }
    }

    /// Adds an actor, replacing (and returning) any actor with the same email.
    pub fn insert(&mut self, actor: Actor) -> Option<Actor> {
        match self.actors.iter_mut().find(|a| a.email == actor.email) {
            Some(slot) => Some(std::mem::replace(slot, actor)),
            None => {
                self.actors.push(actor);
                None
            }
        }
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl FromIterator<Actor> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Actor>>(iter: I) -> Self {
        let mut dir = InMemoryDirectory::default();
        for actor in iter {
            dir.insert(actor);
        }
        dir
    }
}

impl ActorDirectory for InMemoryDirectory {
    fn find_by_email(&self, email: &str) -> Option<Actor> {
        self.actors.iter().find(|a| a.email == email).cloned()
    }
}
