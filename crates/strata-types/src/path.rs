//! Dot notation tree paths over JSON values.
//!
//! Paths address nested document data: `.a.b.c` (a leading dot is
//! optional) names mapping keys, numeric segments index into sequences,
//! and `.` alone names the document root. Lookups are lenient (absent
//! path yields `None`); mutations create intermediate mappings as needed
//! and fail only when a path tries to traverse through a scalar.

use serde_json::{Map, Value};

/// Error returned when a mutation cannot traverse the addressed path.
#[derive(Debug, Clone)]
pub struct PathError {
	pub message: String,
}

impl PathError {
	fn new(message: String) -> Self {
		Self { message }
	}
}

impl std::fmt::Display for PathError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for PathError {}

/// Split a path into its segments. `.` and the empty string name the root
/// and yield no segments.
pub fn segments(path: &str) -> Vec<&str> {
	path.split('.').filter(|s| !s.is_empty()).collect()
}

/// Read the value at `path`, or `None` if any segment is absent.
pub fn get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
	let mut current = value;
	for seg in segments(path) {
		current = match current {
			Value::Object(map) => map.get(seg)?,
			Value::Array(arr) => arr.get(seg.parse::<usize>().ok()?)?,
			_ => return None,
		};
	}
	Some(current)
}

/// Write `new_value` at `path`, creating intermediate mappings as needed.
/// A `null` intermediate is promoted to a mapping; any other non-container
/// intermediate is an error. Sequence segments must already exist.
pub fn set(target: &mut Value, path: &str, new_value: Value) -> Result<(), PathError> {
	let segs = segments(path);
	let Some((last, init)) = segs.split_last() else {
		*target = new_value;
		return Ok(());
	};

	if target.is_null() {
		*target = Value::Object(Map::new());
	}

	let mut current = &mut *target;
	for seg in init {
		let next = match current {
			Value::Object(map) => map
				.entry((*seg).to_string())
				.or_insert_with(|| Value::Object(Map::new())),
			Value::Array(arr) => {
				let len = arr.len();
				let idx = parse_index(seg, path)?;
				arr.get_mut(idx).ok_or_else(|| {
					PathError::new(format!(
						"cannot write '{}': sequence index '{}' is out of bounds (len {})",
						path, seg, len
					))
				})?
			}
			_ => {
				return Err(PathError::new(format!(
					"cannot write '{}': segment '{}' is not a mapping or sequence",
					path, seg
				)));
			}
		};
		if next.is_null() {
			*next = Value::Object(Map::new());
		}
		if !next.is_object() && !next.is_array() {
			return Err(PathError::new(format!(
				"cannot write '{}': segment '{}' is not a mapping or sequence",
				path, seg
			)));
		}
		current = next;
	}

	match current {
		Value::Object(map) => {
			map.insert((*last).to_string(), new_value);
			Ok(())
		}
		Value::Array(arr) => {
			let len = arr.len();
			let idx = parse_index(last, path)?;
			match arr.get_mut(idx) {
				Some(slot) => {
					*slot = new_value;
					Ok(())
				}
				None => Err(PathError::new(format!(
					"cannot write '{}': sequence index '{}' is out of bounds (len {})",
					path, last, len
				))),
			}
		}
		_ => Err(PathError::new(format!(
			"cannot write '{}': parent of '{}' is not a mapping or sequence",
			path, last
		))),
	}
}

/// Remove the subtree at `path`. Returns whether anything was removed.
/// The root path empties the value to an empty mapping.
pub fn delete(target: &mut Value, path: &str) -> bool {
	let segs = segments(path);
	let Some((last, init)) = segs.split_last() else {
		*target = Value::Object(Map::new());
		return true;
	};

	let mut current = &mut *target;
	for seg in init {
		current = match current {
			Value::Object(map) => match map.get_mut(*seg) {
				Some(v) => v,
				None => return false,
			},
			Value::Array(arr) => {
				match seg.parse::<usize>().ok().and_then(|idx| arr.get_mut(idx)) {
					Some(v) => v,
					None => return false,
				}
			}
			_ => return false,
		};
	}

	match current {
		Value::Object(map) => map.remove(*last).is_some(),
		Value::Array(arr) => match last.parse::<usize>() {
			Ok(idx) if idx < arr.len() => {
				arr.remove(idx);
				true
			}
			_ => false,
		},
		_ => false,
	}
}

/// Deep-merge `patch` into `target`: mapping keys merge recursively,
/// sequences replace wholesale, scalars replace scalars.
pub fn deep_merge(target: &mut Value, patch: &Value) {
	match (&mut *target, patch) {
		(Value::Object(tmap), Value::Object(pmap)) => {
			for (key, pval) in pmap {
				match tmap.get_mut(key) {
					Some(tval) if tval.is_object() && pval.is_object() => deep_merge(tval, pval),
					_ => {
						tmap.insert(key.clone(), pval.clone());
					}
				}
			}
		}
		(t, p) => *t = p.clone(),
	}
}

fn parse_index(seg: &str, path: &str) -> Result<usize, PathError> {
	seg.parse::<usize>().map_err(|_| {
		PathError::new(format!(
			"cannot write '{}': segment '{}' is not a valid sequence index",
			path, seg
		))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_get_nested() {
		let value = json!({"a": {"b": {"c": 1}}});
		assert_eq!(get(&value, ".a.b.c"), Some(&json!(1)));
		assert_eq!(get(&value, "a.b.c"), Some(&json!(1)));
		assert_eq!(get(&value, ".a.b"), Some(&json!({"c": 1})));
	}

	#[test]
	fn test_get_root() {
		let value = json!({"a": 1});
		assert_eq!(get(&value, "."), Some(&value));
	}

	#[test]
	fn test_get_absent() {
		let value = json!({"a": {"b": 1}});
		assert_eq!(get(&value, ".a.x"), None);
		assert_eq!(get(&value, ".a.b.c"), None);
	}

	#[test]
	fn test_get_sequence_index() {
		let value = json!({"a": [{"b": 1}, {"b": 2}]});
		assert_eq!(get(&value, ".a.1.b"), Some(&json!(2)));
		assert_eq!(get(&value, ".a.5"), None);
	}

	#[test]
	fn test_set_creates_intermediate_mappings() {
		let mut value = json!({});
		set(&mut value, ".a.b.c", json!(1)).unwrap();
		assert_eq!(value, json!({"a": {"b": {"c": 1}}}));
	}

	#[test]
	fn test_set_root_replaces_everything() {
		let mut value = json!({"a": 1});
		set(&mut value, ".", json!({"b": 2})).unwrap();
		assert_eq!(value, json!({"b": 2}));
	}

	#[test]
	fn test_set_into_sequence_slot() {
		let mut value = json!({"a": [1, 2, 3]});
		set(&mut value, ".a.1", json!(9)).unwrap();
		assert_eq!(value, json!({"a": [1, 9, 3]}));
	}

	#[test]
	fn test_set_through_scalar_fails() {
		let mut value = json!({"a": "scalar"});
		let err = set(&mut value, ".a.b", json!(1)).unwrap_err();
		assert!(err.message.contains("not a mapping"));
	}

	#[test]
	fn test_set_promotes_null_intermediate() {
		let mut value = json!({"a": null});
		set(&mut value, ".a.b", json!(1)).unwrap();
		assert_eq!(value, json!({"a": {"b": 1}}));
	}

	#[test]
	fn test_delete_removes_subtree() {
		let mut value = json!({"a": {"b": 1, "c": 2}});
		assert!(delete(&mut value, ".a.b"));
		assert_eq!(value, json!({"a": {"c": 2}}));
	}

	#[test]
	fn test_delete_absent_is_noop() {
		let mut value = json!({"a": {"b": 1}});
		assert!(!delete(&mut value, ".a.x"));
		assert!(!delete(&mut value, ".x.y.z"));
		assert_eq!(value, json!({"a": {"b": 1}}));
	}

	#[test]
	fn test_delete_root_empties() {
		let mut value = json!({"a": 1});
		assert!(delete(&mut value, "."));
		assert_eq!(value, json!({}));
	}

	#[test]
	fn test_delete_sequence_element() {
		let mut value = json!({"a": [1, 2, 3]});
		assert!(delete(&mut value, ".a.1"));
		assert_eq!(value, json!({"a": [1, 3]}));
	}

	#[test]
	fn test_deep_merge_recurses_into_mappings() {
		let mut target = json!({"a": {"x": 1, "y": 2}, "b": 1});
		deep_merge(&mut target, &json!({"a": {"y": 9, "z": 3}}));
		assert_eq!(target, json!({"a": {"x": 1, "y": 9, "z": 3}, "b": 1}));
	}

	#[test]
	fn test_deep_merge_replaces_sequences_wholesale() {
		let mut target = json!({"tags": ["a", "b"]});
		deep_merge(&mut target, &json!({"tags": ["x"]}));
		assert_eq!(target, json!({"tags": ["x"]}));
	}

	#[test]
	fn test_deep_merge_scalar_replaces_scalar() {
		let mut target = json!({"a": 1});
		deep_merge(&mut target, &json!({"a": "two"}));
		assert_eq!(target, json!({"a": "two"}));
	}

	#[test]
	fn test_deep_merge_is_idempotent() {
		let patch = json!({"a": {"y": 9}, "c": [1, 2]});
		let mut once = json!({"a": {"x": 1}});
		deep_merge(&mut once, &patch);
		let mut twice = once.clone();
		deep_merge(&mut twice, &patch);
		assert_eq!(once, twice);
	}
}

// vim: ts=4
