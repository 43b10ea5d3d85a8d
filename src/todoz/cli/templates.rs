//! # CLI Templates
//!
//! Terminal output is produced by minijinja templates kept in `templates/` and
//! embedded here with `include_str!`, so they can be edited and diffed apart
//! from the code.
//!
//! Templates emit their line breaks explicitly (`{{ "\n" }}`); layout math such
//! as truncation and padding happens in `render.rs`, and templates only pick
//! what to print and which style name applies.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
