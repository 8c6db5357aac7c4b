//!
//! Event-handling trait and the touch event type used by all widgets
//! in this crate.
//!

use crate::geom::Point;
use std::cmp::max;

pub use crate::button::event::ButtonOutcome;
pub use crate::tip::event::TipOutcome;

/// Touch input in window coordinates.
///
/// This is the minimal pointer protocol the widgets care about. A
/// backend maps its own input events onto these four actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    /// Finger down.
    Down(Point),
    /// Finger moved while down.
    Move(Point),
    /// Finger lifted.
    Up(Point),
    /// Gesture cancelled by the system.
    Cancel,
}

/// All the regular and expected event-handling a widget can do.
#[derive(Debug, Default, Clone, Copy)]
pub struct Regular;

/// Overlay handling. There is no z-order/area tree that would direct
/// touch interactions, so overlays simulate one: call all Popup
/// event-handlers before the regular ones, and an active overlay can
/// consume everything that falls into its range.
#[derive(Debug, Default, Clone, Copy)]
pub struct Popup;

/// A very broad trait for an event handler.
///
/// Implemented for the state struct of a widget; handling an event
/// may change the state, and the ui is rendered anew from that state.
///
/// * Event - the actual event type.
/// * Qualifier - allows more than one event-handler per widget, and
///   can give some context to the handler.
/// * Return - result of event-handling; tells the application what
///   changed. There should be one value that means 'I don't know this
///   event', expressed with the ConsumedEvent trait.
pub trait HandleEvent<Event, Qualifier, Return>
where
    Return: ConsumedEvent,
{
    /// Handle an event.
    fn handle(&mut self, event: &Event, qualifier: Qualifier) -> Return;
}

/// Catch all event-handler for the null state `()`.
impl<E, Q> HandleEvent<E, Q, Outcome> for () {
    fn handle(&mut self, _event: &E, _qualifier: Q) -> Outcome {
        Outcome::Continue
    }
}

/// When calling multiple event-handlers, the minimum information
/// required from the result is consumed the event/didn't consume
/// the event.
pub trait ConsumedEvent {
    /// Is this the 'consumed' result.
    fn is_consumed(&self) -> bool;

    /// Or-Else chaining with `is_consumed()` as the split.
    #[inline(always)]
    fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
        Self: Sized,
    {
        if self.is_consumed() { self } else { f() }
    }

    /// Then-chaining. Returns max(self, f()).
    #[inline(always)]
    fn and<F>(self, f: F) -> Self
    where
        Self: Sized + Ord,
        F: FnOnce() -> Self,
    {
        max(self, f())
    }
}

impl<V, E> ConsumedEvent for Result<V, E>
where
    V: ConsumedEvent,
{
    fn is_consumed(&self) -> bool {
        match self {
            Ok(v) => v.is_consumed(),
            Err(_) => true,
        }
    }
}

/// The baseline outcome for an event-handler.
///
/// A widget can define its own type, if it has more things to report.
/// Those types should be convertible to Outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    /// The given event has not been used at all.
    #[default]
    Continue,
    /// The event has been recognized, but nothing noticeable has
    /// changed. Rendering the ui is not necessary.
    Unchanged,
    /// The event has been recognized and there is some change due
    /// to it. Rendering the ui is advised.
    Changed,
}

impl ConsumedEvent for Outcome {
    fn is_consumed(&self) -> bool {
        *self != Outcome::Continue
    }
}

/// Widgets often define functions that return bool to indicate a
/// changed state. Converts `true`/`false` to `Changed`/`Unchanged`.
impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        if value {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

/// Breaks the control-flow if the block returns a value for which
/// [ConsumedEvent::is_consumed] is true.
///
/// It does the classic `into()`-conversion and returns the result.
#[macro_export]
macro_rules! flow {
    ($x:expr) => {{
        use $crate::event::ConsumedEvent;
        let r = $x;
        if r.is_consumed() {
            return r.into();
        } else {
            _ = r;
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_else() {
        let r = Outcome::Continue.or_else(|| Outcome::Changed);
        assert_eq!(r, Outcome::Changed);
        let r = Outcome::Unchanged.or_else(|| Outcome::Changed);
        assert_eq!(r, Outcome::Unchanged);
    }

    #[test]
    fn test_and() {
        let r = Outcome::Unchanged.and(|| Outcome::Changed);
        assert_eq!(r, Outcome::Changed);
        let r = Outcome::Changed.and(|| Outcome::Unchanged);
        assert_eq!(r, Outcome::Changed);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Changed);
        assert_eq!(Outcome::from(false), Outcome::Unchanged);
    }
}
