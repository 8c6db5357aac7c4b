//!
//! De-duplication registry for tip bubbles.
//!
//! At most one bubble per content text may be on screen. Sessions
//! register before showing and unregister on dismissal; entries of
//! sessions that died without dismissing are evicted on the next
//! registration attempt for the same content.
//!

use std::cell::{Cell, RefCell};
use std::hash::{Hash, Hasher};
use std::ptr;
use std::rc::Rc;

/// Lifecycle of a tip session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TipPhase {
    /// Built, not yet shown.
    #[default]
    Built,
    /// On screen.
    Shown,
    /// Dismissed. Terminal, the session cannot be shown again.
    Dismissed,
}

/// Shared lifecycle flag of one tip session.
///
/// This struct is intended to be cloned and uses a Rc internally to
/// share the state.
///
/// __Note__
///
/// Equality and Hash use the memory address behind the internal Rc.
/// Two sessions never compare equal, however equal their content.
#[derive(Debug, Clone, Default)]
pub struct TipLifecycle(Rc<Cell<TipPhase>>);

impl PartialEq for TipLifecycle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TipLifecycle {}

impl Hash for TipLifecycle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl TipLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TipPhase {
        self.0.get()
    }

    pub(crate) fn set_phase(&self, phase: TipPhase) {
        self.0.set(phase);
    }

    /// Currently on screen?
    pub fn is_showing(&self) -> bool {
        self.0.get() == TipPhase::Shown
    }
}

#[derive(Debug)]
struct TipEntry {
    content: Box<str>,
    lifecycle: TipLifecycle,
}

thread_local! {
    static SHARED: TipRegistry = TipRegistry::default();
}

/// Registry of visible tip bubbles, keyed by content text.
///
/// This struct is intended to be cloned, all clones share one entry
/// list. Single-threaded by design, tips live on the ui thread.
#[derive(Debug, Default, Clone)]
pub struct TipRegistry {
    core: Rc<RefCell<Vec<TipEntry>>>,
}

impl TipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    ///
    /// [TipBuilder](crate::tip::TipBuilder) uses this one unless a
    /// different registry is set. Tests inject their own instead.
    pub fn shared() -> TipRegistry {
        SHARED.with(|r| r.clone())
    }

    /// Register a session for the given content.
    ///
    /// Fails when an equal-content session is still showing. A stale
    /// entry whose session is no longer showing is evicted first.
    pub fn try_register(&self, content: &str, lifecycle: &TipLifecycle) -> bool {
        let mut entries = self.core.borrow_mut();

        if let Some(n) = entries.iter().position(|e| &*e.content == content) {
            if entries[n].lifecycle.is_showing() {
                return false;
            }
            // session died without unregistering
            entries.remove(n);
        }

        entries.push(TipEntry {
            content: content.into(),
            lifecycle: lifecycle.clone(),
        });
        true
    }

    /// Remove the entry of this session.
    ///
    /// Matches by session identity, not by content, so a dead
    /// session can never remove the entry of a successor that
    /// re-registered the same content. Idempotent.
    pub fn unregister(&self, lifecycle: &TipLifecycle) {
        self.core.borrow_mut().retain(|e| e.lifecycle != *lifecycle);
    }

    /// Is a session with this content registered and showing?
    pub fn showing(&self, content: &str) -> bool {
        self.core
            .borrow()
            .iter()
            .any(|e| &*e.content == content && e.lifecycle.is_showing())
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.core.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.borrow().is_empty()
    }
}
