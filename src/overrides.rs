use std::collections::BTreeMap;
use std::fmt;

use crate::error::MergeError;
use crate::trajectory::PositionMap;

/// Radio channels the config accepts.
pub const ALLOWED_CHANNELS: [u16; 2] = [80, 100];

/// Channel applied when an override names an id but omits `ch`.
pub const DEFAULT_CHANNEL: u16 = 80;

/// Marker configuration token for the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerType {
    Default,
    #[default]
    DefaultSingleMarker,
    Cf21SingleMarker,
    Medium,
    Large,
}

impl MarkerType {
    /// The token as it appears in the config file and in `--set` specs.
    pub fn as_token(self) -> &'static str {
        match self {
            MarkerType::Default => "default",
            MarkerType::DefaultSingleMarker => "defaultSingleMarker",
            MarkerType::Cf21SingleMarker => "CF21SingleMarker",
            MarkerType::Medium => "medium",
            MarkerType::Large => "large",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "default" => Some(MarkerType::Default),
            "defaultSingleMarker" => Some(MarkerType::DefaultSingleMarker),
            "CF21SingleMarker" => Some(MarkerType::Cf21SingleMarker),
            "medium" => Some(MarkerType::Medium),
            "large" => Some(MarkerType::Large),
            _ => None,
        }
    }
}

impl fmt::Display for MarkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// One `--set` segment: the id plus optional channel/type replacements.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub id: u32,
    pub channel: Option<u16>,
    pub marker_type: Option<MarkerType>,
}

impl Override {
    pub fn effective_channel(&self) -> u16 {
        self.channel.unwrap_or(DEFAULT_CHANNEL)
    }

    pub fn effective_type(&self) -> MarkerType {
        self.marker_type.unwrap_or_default()
    }
}

/// Parsed `--set` overrides, one entry per id.
#[derive(Debug, Default)]
pub struct OverrideSet {
    by_id: BTreeMap<u32, Override>,
}

impl OverrideSet {
    /// Parse `--set` spec strings. A spec holds `/`-separated segments; a
    /// segment holds `,`-separated `key=value` pairs. Any malformed pair
    /// fails the whole parse. When two segments name the same id, the last
    /// one wins.
    pub fn parse(specs: &[String]) -> Result<Self, MergeError> {
        let mut by_id = BTreeMap::new();
        for spec in specs {
            for segment in spec.split('/') {
                let segment = segment.trim();
                if segment.is_empty() {
                    continue;
                }
                let ovr = parse_segment(segment)?;
                by_id.insert(ovr.id, ovr);
            }
        }
        Ok(OverrideSet { by_id })
    }

    pub fn get(&self, id: u32) -> Option<&Override> {
        self.by_id.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Every override id must name a robot in the position map. Reports the
    /// offending ids in ascending order.
    pub fn validate_against(&self, positions: &PositionMap) -> Result<(), MergeError> {
        let missing: Vec<u32> = self
            .by_id
            .keys()
            .copied()
            .filter(|id| !positions.contains_key(id))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MergeError::OverrideIdNotInSource { ids: missing })
        }
    }
}

fn parse_segment(segment: &str) -> Result<Override, MergeError> {
    let mut id = None;
    let mut channel = None;
    let mut marker_type = None;

    for pair in segment.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((key, value)) = pair.split_once('=') else {
            return Err(MergeError::BadOverrideSyntax {
                spec: segment.to_string(),
                reason: format!("expected key=value, got `{pair}`"),
            });
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "id" => {
                let parsed = parse_digits(value).ok_or_else(|| MergeError::BadOverrideSyntax {
                    spec: segment.to_string(),
                    reason: format!("id must be digits, got `{value}`"),
                })?;
                id = Some(parsed);
            }
            "ch" | "channel" => {
                let parsed = parse_digits(value)
                    .and_then(|c| u16::try_from(c).ok())
                    .filter(|c| ALLOWED_CHANNELS.contains(c));
                match parsed {
                    Some(c) => channel = Some(c),
                    None => {
                        return Err(MergeError::DisallowedOverrideValue {
                            spec: segment.to_string(),
                            reason: format!(
                                "channel must be one of {ALLOWED_CHANNELS:?}, got `{value}`"
                            ),
                        })
                    }
                }
            }
            "ty" | "type" => match MarkerType::from_token(value) {
                Some(t) => marker_type = Some(t),
                None => {
                    return Err(MergeError::DisallowedOverrideValue {
                        spec: segment.to_string(),
                        reason: format!("unknown marker type `{value}`"),
                    })
                }
            },
            other => {
                return Err(MergeError::BadOverrideSyntax {
                    spec: segment.to_string(),
                    reason: format!("unknown key `{other}`"),
                })
            }
        }
    }

    match id {
        Some(id) => Ok(Override {
            id,
            channel,
            marker_type,
        }),
        None => Err(MergeError::MissingOverrideId {
            spec: segment.to_string(),
        }),
    }
}

/// Digits-only parse; rejects signs, whitespace, and empty strings.
fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
