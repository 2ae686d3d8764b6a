//! Strictly Mastermind - type-safe Mastermind game logic
//!
//! The player has a fixed number of rows to break a secret code of four
//! distinct colors. Each submitted guess is scored against the secret and
//! the result is shown either per slot or as counts, depending on
//! difficulty.
//!
//! # Architecture
//!
//! - **Types**: colors, codes and difficulty levels
//! - **Feedback**: two-pass scoring into exact, partial and absent marks
//! - **Generator**: random codes without repeated colors
//! - **Buffer**: the guess under construction, with a cursor
//! - **Session**: the only owner of the secret and the board
//! - **Invariants/Contracts**: properties checked after every transition
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{
//!     Code, ColorIndex, Difficulty, GameSession, Phase, SessionConfig,
//! };
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn example() -> Result<(), strictly_mastermind::SessionError> {
//! let config = SessionConfig::new(Difficulty::Easy, 6);
//! let secret = Code::from_indices([0, 1, 2, 3]);
//! let mut session = GameSession::with_secret(config, secret, StdRng::seed_from_u64(1))?;
//!
//! for (pos, color) in [0, 1, 2, 3].into_iter().enumerate() {
//!     session.set_buffer_color(pos, ColorIndex::new(color))?;
//! }
//! assert_eq!(session.submit_guess()?, Phase::Won);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod buffer;
mod config;
mod error;
mod feedback;
mod generator;
mod history;
mod phases;
mod session;
mod types;
mod view;

// Public module declarations
pub mod contracts;
pub mod invariants;
pub mod seeding;

// Crate-level exports - Core types
pub use types::{CODE_LENGTH, Code, ColorIndex, Difficulty, MAX_COLORS, MIN_COLORS, PALETTE};

// Crate-level exports - Scoring
pub use feedback::{Feedback, FeedbackMode, Mark, Score, Tally, score, score_slices};

// Crate-level exports - Generation
pub use generator::CodeGenerator;

// Crate-level exports - Guess buffer
pub use buffer::{Direction, GuessBuffer};

// Crate-level exports - Session state
pub use config::SessionConfig;
pub use error::SessionError;
pub use history::HistoryEntry;
pub use phases::Phase;
pub use session::GameSession;
pub use view::SessionView;
