//! Pages
//!
//! Route targets. Each page owns its state.

mod board;
mod form_builder;

pub use board::BoardPage;
pub use form_builder::FormBuilderPage;
