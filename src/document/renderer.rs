use super::scan::{parse_managed_field, ManagedField};
use super::types::{EntryBlock, Position3D};
use crate::overrides::Override;

/// Managed-field line positions within one block, computed once per render.
#[derive(Debug, Default)]
struct FieldIndex {
    channel: Option<usize>,
    position: Option<usize>,
    ty: Option<usize>,
}

impl FieldIndex {
    fn scan(lines: &[String], child_indent: &str) -> Self {
        let mut index = FieldIndex::default();
        for (i, line) in lines.iter().enumerate().skip(1) {
            match parse_managed_field(line, child_indent) {
                Some(ManagedField::Channel) => index.channel = Some(i),
                Some(ManagedField::InitialPosition) => index.position = Some(i),
                Some(ManagedField::Type) => index.ty = Some(i),
                None => {}
            }
        }
        index
    }

    /// Bump recorded indices at or past an insertion point.
    fn shift_for_insert(&mut self, at: usize) {
        for slot in [&mut self.channel, &mut self.position, &mut self.ty] {
            if let Some(i) = slot {
                if *i >= at {
                    *i += 1;
                }
            }
        }
    }
}

/// Produce an updated copy of one entry block. Managed fields are replaced in
/// place or inserted at their deterministic positions; every other line keeps
/// its content and relative order. The input block is not touched.
pub fn render_block(
    block: &EntryBlock,
    child_indent: &str,
    position: Option<&Position3D>,
    ovr: Option<&Override>,
) -> EntryBlock {
    let mut lines = block.raw_lines.clone();
    let mut fields = FieldIndex::scan(&lines, child_indent);

    if let Some(pos) = position {
        let line = format!("{child_indent}initialPosition: {}", pos.to_field_value());
        match fields.position {
            Some(i) => lines[i] = line,
            None => {
                // Before the type line if there is one, else at the end
                let at = fields.ty.unwrap_or(lines.len());
                lines.insert(at, line);
                fields.shift_for_insert(at);
                fields.position = Some(at);
            }
        }
    }

    // Defaults kick in only for ids that carry an override at all
    if let Some(ovr) = ovr {
        let line = format!("{child_indent}channel: {}", ovr.effective_channel());
        match fields.channel {
            Some(i) => lines[i] = line,
            None => {
                // Directly after the `- id:` line
                let at = 1;
                lines.insert(at, line);
                fields.shift_for_insert(at);
                fields.channel = Some(at);
            }
        }

        let line = format!("{child_indent}type: {}", ovr.effective_type());
        match fields.ty {
            Some(i) => lines[i] = line,
            None => lines.push(line),
        }
    }

    EntryBlock {
        id: block.id,
        raw_lines: lines,
        base_indent: block.base_indent.clone(),
    }
}
