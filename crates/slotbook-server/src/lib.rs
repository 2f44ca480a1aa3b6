//! # slotbook-server
//!
//! axum transport for [`slotbook_engine`]. Four JSON endpoints map one-to-one
//! onto scheduler operations:
//!
//! | Route                | Operation                      |
//! |----------------------|--------------------------------|
//! | `POST /availability` | `Scheduler::check_availability` |
//! | `POST /reserve`      | `Scheduler::reserve`            |
//! | `POST /release`      | `Scheduler::release`            |
//! | `GET /schedule`      | `Scheduler::schedule`           |
//!
//! Request bodies are `{"start", "end", "requestor", "attendant"}` with RFC 3339
//! timestamps. Validation failures answer `400`, conflicts `409`, and releases
//! of unknown windows `404`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{init_tracing, LogFormat, ServerConfig};
pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
