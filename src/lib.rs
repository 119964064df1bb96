pub mod chooser;
pub mod cli;
pub mod document;
pub mod error;
pub mod overrides;
pub mod trajectory;
