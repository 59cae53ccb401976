//! Embedded word data
//!
//! The dictionary is compiled into the binary by the build script; the puzzle
//! pool is embedded as raw JSON and parsed at startup like an external file.

// Include generated dictionary from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Puzzle pool document shipped with the game
pub const POOL_JSON: &str = include_str!("../../data/palabras-objetivo.json");
