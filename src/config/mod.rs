//! Margin-table file support: schema, loader, and coverage validation.

pub mod loader;
pub mod schema;
pub mod validation;
