//! Terminal front end for the quiz.
//!
//! - [`view`] turns published snapshots into plain view models (pure, testable)
//! - [`renderer`] writes those view models to a terminal with crossterm
//! - [`map_view`] is the map collaborator the front end drives on guesses
//!   and game stops

pub mod map_view;
pub mod renderer;
pub mod view;

pub use suburb_quiz_core as core;
pub use suburb_quiz_types as types;

pub use map_view::{MapView, TraceMapView};
pub use renderer::{encode_prompt_into, encode_status_into, encode_summary_into, TerminalRenderer};
pub use view::{QuizView, StatusView, SummaryRow, SummaryView, TimeStyle};
