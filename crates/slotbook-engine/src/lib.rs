//! # slotbook-engine
//!
//! Conflict-free booking of appointment windows between a requestor and an
//! attendant.
//!
//! Windows are validated (ordered, 15 minutes to 8 hours by default), checked
//! against everything already booked on the neighbouring calendar days, and
//! filed in an in-memory store keyed by UTC day. Nothing is persisted.
//!
//! ## Modules
//!
//! - [`window`] — `TimeWindow` and raw `WindowRequest` parsing
//! - [`validator`] — ordering and duration limits
//! - [`store`] — `DayKey` and the day-bucketed `ScheduleStore`
//! - [`conflict`] — overlap detection across day boundaries
//! - [`scheduler`] — reserve / release / availability under one lock
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod scheduler;
pub mod store;
pub mod validator;
pub mod window;

pub use conflict::{find_conflicts, is_available, Conflict};
pub use error::ScheduleError;
pub use scheduler::{Action, Confirmation, Scheduler};
pub use store::{day_key, DayKey, ScheduleSnapshot, ScheduleStore};
pub use validator::{validate, WindowLimits};
pub use window::{Field, TimeWindow, WindowRequest};
