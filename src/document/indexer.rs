use super::scan::parse_block_start;
use super::types::{Document, EntryBlock};

/// Partition document text into header, entry blocks, and trailer.
///
/// A block opens at a `- id: N` line and runs until the next block start or
/// the end of the text; lines before the first block are the header. The scan
/// is total: any input indexes without error, and [`Document::reassemble`]
/// reproduces it exactly. A document with zero blocks is all header.
pub fn index_document(text: &str) -> Document {
    let trailing_newline = text.ends_with('\n');

    let mut header = Vec::new();
    let mut blocks: Vec<EntryBlock> = Vec::new();

    for line in text.lines() {
        if let Some((indent, id)) = parse_block_start(line) {
            blocks.push(EntryBlock {
                id,
                raw_lines: vec![line.to_string()],
                base_indent: indent.to_string(),
            });
            continue;
        }
        match blocks.last_mut() {
            Some(block) => block.raw_lines.push(line.to_string()),
            None => header.push(line.to_string()),
        }
    }

    Document {
        header,
        blocks,
        // The last block absorbs everything up to EOF, so indexing never
        // produces trailer lines; the slot exists for the assembler contract.
        trailer: Vec::new(),
        trailing_newline,
    }
}
