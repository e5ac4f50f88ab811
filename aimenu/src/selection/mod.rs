//! Interactive selection state.
//!
//! [`MenuState`] is a pure state machine driven by the terminal front end:
//! it owns the cursor, the per-category [`Selections`] and the install path
//! buffer, and reports the side effects it wants as [`MenuCommand`]s.

mod machine;
mod set;

pub use machine::{MenuCommand, MenuState, View};
pub use set::{SelectionSet, Selections};
