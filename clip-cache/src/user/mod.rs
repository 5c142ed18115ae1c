//! The signed-in (or anonymous) contributor.
//!
//! Coordinators only need three things from the user side: the current
//! [`Account`], a way to tally anonymous verifications, and a refresh after
//! each vote. [`UserStore`] captures that; [`SessionUser`] keeps it in memory
//! for the lifetime of a session.

mod account;
mod session;

pub use account::{Account, Enrollment};
pub use session::{SessionUser, UserStore};
