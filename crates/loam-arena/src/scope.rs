//! Scope checkpoints and rollback.
//!
//! A [`ScopeToken`] captures the arena's position — head block and cursor —
//! at a point in time. Closing the scope with [`Arena::scope_end`] releases
//! every block created after the checkpoint and trims the reactivated head
//! back to the captured cursor, reclaiming every byte allocated in between.
//!
//! Scopes nest strictly: the most recently opened scope must close first.
//! Tokens are consumed by value, so closing the same scope twice is a
//! compile error; closing out of LIFO order, or against a different arena,
//! panics.

use crate::arena::{Arena, ArenaId};

/// A checkpoint of an arena's allocation position.
///
/// Created by [`Arena::scope_start`], consumed exactly once by
/// [`Arena::scope_end`]. Dropping a token without closing it is permitted —
/// the captured memory is then reclaimed only by
/// [`clear`](crate::Arena::clear) or by dropping the arena, and the scope
/// depth stays raised, so any outer scope's close will trip the LIFO panic.
#[derive(Debug)]
#[must_use = "an unclosed scope keeps its allocations live and blocks outer scope_end calls"]
pub struct ScopeToken {
    /// Id of the arena that issued this token.
    pub(crate) arena: ArenaId,
    /// Index of the block that was head at capture, or `None` for a
    /// checkpoint taken on an arena with no blocks.
    pub(crate) block: Option<u32>,
    /// The head block's cursor at capture.
    pub(crate) top: usize,
    /// Nesting id: the arena's scope depth after opening this scope.
    pub(crate) id: u32,
}

impl ScopeToken {
    /// Nesting id of this scope (1 for the outermost open scope).
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Arena {
    /// Open a scope: capture the current allocation position.
    ///
    /// Never allocates. A checkpoint taken on an arena with no blocks is
    /// valid — closing it rolls the arena back to empty.
    pub fn scope_start(&mut self) -> ScopeToken {
        self.scope_depth += 1;
        let (block, top) = match self.blocks.last() {
            Some(head) => (Some((self.blocks.len() - 1) as u32), head.used()),
            None => (None, 0),
        };
        ScopeToken {
            arena: self.id,
            block,
            top,
            id: self.scope_depth,
        }
    }

    /// Close a scope: discard everything allocated since it opened.
    ///
    /// Releases every block created after the checkpoint, trims the
    /// reactivated head back to the captured cursor, and decrements the
    /// scope depth. Handles issued inside the scope become stale the moment
    /// this returns; allocations made before the checkpoint are untouched.
    ///
    /// # Panics
    ///
    /// Panics if the token came from a different arena, if this scope is
    /// not the innermost open one (LIFO violation), or if the captured
    /// block was released by a [`clear`](Arena::clear) while the scope was
    /// open.
    pub fn scope_end(&mut self, token: ScopeToken) {
        assert!(
            token.arena == self.id,
            "scope token from arena {} closed against arena {}",
            token.arena,
            self.id
        );
        assert!(
            token.id == self.scope_depth,
            "scopes must close in LIFO order: closing scope {} while depth is {}",
            token.id,
            self.scope_depth
        );

        match token.block {
            Some(index) => {
                let index = index as usize;
                assert!(
                    index < self.blocks.len(),
                    "scope's captured block was released while the scope was open"
                );
                self.blocks.truncate(index + 1);
                self.blocks[index].rewind(token.top);
            }
            None => self.blocks.clear(),
        }
        self.scope_depth -= 1;
    }
}
