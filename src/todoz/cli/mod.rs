//! # CLI Behavior
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! For the overall architecture, see the crate-level documentation in
//! [`todoz`].
//!
//! ## Addressing Rows
//!
//! Rows are addressed by their 1-based position in `todoz list`. Commands that
//! take several rows accept ranges: `todoz toggle 1 3-5`.
//!
//! ## Naked Execution (`todoz`)
//!
//! Running `todoz` with no arguments lists the items.
//!
//! ## Editing Across Invocations
//!
//! `todoz edit 2` puts row 2 in edit mode and that flag is stored with the
//! list, so the edit survives until `todoz save 2 <text>` ends it. Saving blank
//! text keeps the row in edit mode.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the controller
//! - `render`: Output formatting (rows, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
