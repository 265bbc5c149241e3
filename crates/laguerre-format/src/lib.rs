//! Turning polynomial markup into something a person can read.
//!
//! - [`display`]: operator spacing, wrapping and pagination of markup
//! - [`layout`]: what goes where on the canvas, and at which font size
//! - [`mathtext`]: markup to Unicode math text, plus the plain-text fallback

pub mod display;
pub mod layout;
pub mod mathtext;

pub use display::{FormattedExpression, Layout, format_expression, wrap_typeset};
pub use layout::{DisplayContent, Placement, RenderPlan, plan_render};
pub use mathtext::{degrade, typeset, typeset_lines};
