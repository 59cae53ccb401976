//! Terminal output formatting
//!
//! Display utilities for the line-based mode and command reports.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_game_over, print_history, print_info, print_keyboard, print_submission,
    print_verify_report,
};
pub use formatters::error_message;
