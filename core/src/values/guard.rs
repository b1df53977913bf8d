//! Re-entrancy tracking for recursive walks over aliased containers.
//!
//! Lists and objs are shared, so a container can reach itself. Rendering
//! keeps the containers it is currently inside of and stops descending when
//! it meets one again. Equality keeps every pair it has reached.

use hashbrown::HashSet;

use crate::Vec;

/// Containers currently being rendered, by address.
#[derive(Default)]
pub(crate) struct Visiting {
    stack: Vec<*const ()>,
}

impl Visiting {
    /// Returns false if `addr` is already being visited.
    pub(crate) fn enter(&mut self, addr: *const ()) -> bool {
        if self.stack.contains(&addr) {
            return false;
        }
        self.stack.push(addr);
        true
    }

    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }
}

/// Pairs of containers reached during one equality walk, by address.
///
/// Pairs are never removed. A walk ends at the first unequal pair, so a pair
/// met again is either still being compared further up or has compared
/// equal. Each pair is walked at most once, even through shared
/// substructure.
#[derive(Default)]
pub(crate) struct Comparing {
    seen: HashSet<(*const (), *const ())>,
}

impl Comparing {
    /// Returns false if the pair has been reached before.
    pub(crate) fn enter(&mut self, lhs: *const (), rhs: *const ()) -> bool {
        self.seen.insert((lhs, rhs))
    }
}
