/// A 3D initial position taken from the first trajectory sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3D {
    /// Bracketed list form with six decimals per coordinate.
    pub fn to_field_value(&self) -> String {
        format!("[{:.6}, {:.6}, {:.6}]", self.x, self.y, self.z)
    }
}

/// One robot entry: the `- id: N` line plus every line until the next entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBlock {
    pub id: u32,
    pub raw_lines: Vec<String>,
    pub base_indent: String,
}

/// The indexed document: header lines, entry blocks, trailer lines.
#[derive(Debug)]
pub struct Document {
    pub header: Vec<String>,
    pub blocks: Vec<EntryBlock>,
    pub trailer: Vec<String>,
    pub trailing_newline: bool,
}

impl Document {
    /// Re-concatenate header + blocks + trailer without rendering anything.
    /// Must reproduce the original text exactly.
    pub fn reassemble(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        lines.extend(self.header.iter().map(String::as_str));
        for block in &self.blocks {
            lines.extend(block.raw_lines.iter().map(String::as_str));
        }
        lines.extend(self.trailer.iter().map(String::as_str));

        let mut text = lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }

    /// Indent for synthesized entries: the first block's, or two spaces when
    /// the document has no blocks to copy from.
    pub fn base_indent(&self) -> &str {
        self.blocks
            .first()
            .map(|b| b.base_indent.as_str())
            .unwrap_or("  ")
    }
}
