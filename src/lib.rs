//! Cuordle
//!
//! A daily Spanish word puzzle played on four boards at once: every guess is
//! scored against four hidden words, and all boards must be solved within ten
//! turns.
//!
//! # Quick Start
//!
//! ```rust
//! use cuordle::core::{Feedback, Word};
//!
//! let guess = Word::new("salas").unwrap();
//! let target = Word::new("muros").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.to_glyphs(), "□□□□■");
//! ```

// Core domain types
pub mod core;

// Word lists and the daily puzzle pool
pub mod wordlists;

// Game rules and session state
pub mod game;

// Saved progress
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
