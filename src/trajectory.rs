use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::document::Position3D;
use crate::error::MergeError;

/// Initial position per robot id, built once from the trajectory JSON and
/// read-only afterwards.
pub type PositionMap = BTreeMap<u32, Position3D>;

/// Read the trajectory file and extract the initial positions.
pub fn load_trajectory(path: &Path) -> Result<PositionMap, MergeError> {
    let text = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&text)?;
    Ok(extract_initial_positions(&data))
}

/// Pull `id -> (x, y, z)` out of the trajectory mapping.
///
/// A key is accepted when it is digits, optionally prefixed with the literal
/// `robot_`. A usable value is a non-empty array whose first sample is itself
/// an array with at least three numbers; the first three become the position.
/// Entries that do not fit are skipped, never fatal.
pub fn extract_initial_positions(data: &Value) -> PositionMap {
    let mut positions = PositionMap::new();
    let Some(map) = data.as_object() else {
        return positions;
    };

    for (key, trajectory) in map {
        let Some(id) = parse_robot_key(key) else {
            continue;
        };
        let Some(position) = first_sample_position(trajectory) else {
            continue;
        };
        positions.insert(id, position);
    }
    positions
}

/// Accept `robot_7` or bare `7`; the digits are the id.
fn parse_robot_key(key: &str) -> Option<u32> {
    let digits = key.strip_prefix("robot_").unwrap_or(key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn first_sample_position(trajectory: &Value) -> Option<Position3D> {
    let first = trajectory.as_array()?.first()?.as_array()?;
    if first.len() < 3 {
        return None;
    }
    Some(Position3D {
        x: first[0].as_f64()?,
        y: first[1].as_f64()?,
        z: first[2].as_f64()?,
    })
}
