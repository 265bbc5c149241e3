//! The polynomial display controller and the pieces it is built from.
//!
//! A [`Controller`] owns all mutable display state. Hosts (the desktop app,
//! the CLI) feed it raw user input and timer ticks, and give it three
//! collaborators:
//!
//! - an [`Evaluator`] that expands L_n^l(x) into markup,
//! - a [`Canvas`] the renderer draws lines onto,
//! - a [`Clipboard`] for the copy action.
//!
//! Faults never escape an action; they are logged and queued as
//! [`Notice`]s for the host to show.

pub mod clipboard;
pub mod controller;
pub mod evaluator;
pub mod notice;
pub mod render;
pub mod state;
pub mod timer;
pub mod validate;
pub mod zoom;

pub use clipboard::{Clipboard, ClipboardFeedback, CopyStatus};
pub use controller::{Controller, GenerateOutcome};
pub use evaluator::Evaluator;
pub use notice::{Notice, Severity};
pub use render::{Canvas, Rendered, render};
pub use state::{DisplayState, PolynomialResult};
pub use timer::ScheduledTask;
pub use validate::{Validated, parse_index, parse_integer, validate};
