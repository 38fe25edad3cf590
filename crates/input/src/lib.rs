//! Player input mapping (front-end facing).
//!
//! Maps one line of typed input to a [`UserAction`]. Lines starting with `:`
//! are commands, some taking an argument (`:find <suburb>`, `:city <key>`);
//! anything else is a suburb guess.

pub mod map;

pub use map::{parse_line, UserAction, HELP_TEXT};
