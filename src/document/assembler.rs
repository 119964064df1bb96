use std::collections::BTreeSet;

use super::renderer::render_block;
use super::types::{Document, Position3D};
use crate::overrides::{Override, OverrideSet, DEFAULT_CHANNEL};
use crate::trajectory::PositionMap;

/// Merge the position map and overrides into the indexed document and return
/// the final text.
///
/// Existing entries keep their relative order. With `keep_missing` unset,
/// entries whose id is absent from the position map are dropped entirely.
/// Ids known to the position map but absent from the document are appended
/// after all existing entries, in ascending id order.
pub fn merge_document(
    doc: &Document,
    positions: &PositionMap,
    overrides: &OverrideSet,
    keep_missing: bool,
) -> String {
    let base_indent = doc.base_indent();
    let child_indent = format!("{base_indent}  ");

    let mut out: Vec<String> = doc.header.clone();

    for block in &doc.blocks {
        let position = positions.get(&block.id);
        if !keep_missing && position.is_none() {
            continue;
        }
        let rendered = render_block(block, &child_indent, position, overrides.get(block.id));
        out.extend(rendered.raw_lines);
    }

    let existing: BTreeSet<u32> = doc.blocks.iter().map(|b| b.id).collect();
    for (&id, position) in positions {
        if existing.contains(&id) {
            continue;
        }
        out.extend(synthesize_block(
            id,
            position,
            overrides.get(id),
            base_indent,
            &child_indent,
        ));
    }

    out.extend(doc.trailer.iter().cloned());

    let mut text = out.join("\n");
    if doc.trailing_newline {
        text.push('\n');
    }
    text
}

/// Build a brand-new entry for an id the document has never seen.
/// Field order is fixed: id, channel, initialPosition, type.
fn synthesize_block(
    id: u32,
    position: &Position3D,
    ovr: Option<&Override>,
    base_indent: &str,
    child_indent: &str,
) -> Vec<String> {
    let channel = ovr
        .map(Override::effective_channel)
        .unwrap_or(DEFAULT_CHANNEL);
    let marker = ovr.map(Override::effective_type).unwrap_or_default();

    vec![
        format!("{base_indent}- id: {id}"),
        format!("{child_indent}channel: {channel}"),
        format!("{child_indent}initialPosition: {}", position.to_field_value()),
        format!("{child_indent}type: {marker}"),
    ]
}
