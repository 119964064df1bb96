/// Which managed field a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagedField {
    Channel,
    InitialPosition,
    Type,
}

/// Parse a block-start line: optional indent, `-`, whitespace, `id:`, digits,
/// nothing else. Returns the leading indent and the captured id.
pub fn parse_block_start(line: &str) -> Option<(&str, u32)> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    let rest = trimmed.strip_prefix('-')?;
    let body = rest.trim_start();
    if body.len() == rest.len() {
        // Whitespace between `-` and the key is mandatory
        return None;
    }

    let value = body.strip_prefix("id:")?.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().map(|id| (indent, id))
}

/// Classify a line inside a block against the three managed-field shapes.
/// The child indent must match exactly; a deeper or shallower line is opaque.
pub fn parse_managed_field(line: &str, child_indent: &str) -> Option<ManagedField> {
    let rest = line.strip_prefix(child_indent)?;

    if let Some(value) = rest.strip_prefix("channel:") {
        return is_single_token(value).then_some(ManagedField::Channel);
    }
    if let Some(value) = rest.strip_prefix("initialPosition:") {
        return is_bracketed_list(value).then_some(ManagedField::InitialPosition);
    }
    if let Some(value) = rest.strip_prefix("type:") {
        return is_single_token(value).then_some(ManagedField::Type);
    }
    None
}

/// One non-empty token with no internal whitespace.
fn is_single_token(value: &str) -> bool {
    let t = value.trim();
    !t.is_empty() && !t.contains(char::is_whitespace)
}

/// A `[...]` list, possibly empty, with nothing after the closing bracket.
fn is_bracketed_list(value: &str) -> bool {
    let t = value.trim();
    t.len() >= 2 && t.starts_with('[') && t.ends_with(']')
}
