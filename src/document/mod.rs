mod assembler;
mod indexer;
mod renderer;
mod scan;
mod types;

pub use assembler::merge_document;
pub use indexer::index_document;
pub use renderer::render_block;
pub use scan::{parse_block_start, parse_managed_field, ManagedField};
pub use types::{Document, EntryBlock, Position3D};
