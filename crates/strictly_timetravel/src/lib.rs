//! Tic-tac-toe engine with time-travel history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation over a [`Board`]
//! - **History**: append-only [`Snapshot`]s plus the active step
//! - **Session**: [`GameSession`], the single mutable object a front end
//!   drives, with derived [`Status`] and [`MoveDescriptor`] views
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameSession, Status, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     session.apply_move(cell)?;
//! }
//! assert_eq!(session.current_status(), Status::Winner(Player::X));
//!
//! session.jump_to(0)?;
//! assert_eq!(session.current_status().to_string(), "Next player: X");
//! # Ok::<(), strictly_timetravel::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;
mod view;

pub use action::{IgnoreReason, MoveOutcome};
pub use error::{SessionError, SessionErrorKind};
pub use history::History;
pub use position::Position;
pub use rules::{Line, evaluate_winner};
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
pub use view::{DisplayOrder, DrawPolicy, MoveDescriptor, SessionView, Status};
