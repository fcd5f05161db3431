//! Dot/bracket field paths.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::FormError;

/// One step of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

/// A parsed dot/bracket path into a values object.
///
/// Supports nested and array paths, e.g. `list[2].value` or
/// `matrix[0][1].label`. The canonical rendering (via `Display`) is the
/// key under which touched/error state is recorded.
///
/// # Example
///
/// ```
/// use formbind::path::FieldPath;
/// use serde_json::json;
///
/// let path = FieldPath::parse("list[2].value").unwrap();
/// let values = json!({"list": [{}, {}, {"value": "x"}]});
/// assert_eq!(path.get(&values), Some(&json!("x")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parse a path. Malformed paths fail fast.
    pub fn parse(path: &str) -> Result<Self, FormError> {
        let syntax = |reason: &str| FormError::PathSyntax {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(syntax("empty path"));
        }

        let mut segments = Vec::new();
        let mut rest = path;
        let mut expect_key = true;
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('.') {
                if segments.is_empty() {
                    return Err(syntax("leading dot"));
                }
                if after.is_empty() || after.starts_with(['.', '[']) {
                    return Err(syntax("empty key"));
                }
                rest = after;
                expect_key = true;
                continue;
            }
            if let Some(after) = rest.strip_prefix('[') {
                let Some((digits, tail)) = after.split_once(']') else {
                    return Err(syntax("unterminated index"));
                };
                let index = digits
                    .parse::<usize>()
                    .map_err(|_| syntax("non-numeric index"))?;
                segments.push(Segment::Index(index));
                rest = tail;
                expect_key = false;
                continue;
            }
            if !expect_key {
                return Err(syntax("missing separator"));
            }
            let end = rest
                .find(['.', '[', ']'])
                .unwrap_or(rest.len());
            if end == 0 {
                return Err(syntax("empty key"));
            }
            if rest[end..].starts_with(']') {
                return Err(syntax("unmatched `]`"));
            }
            segments.push(Segment::Key(rest[..end].to_string()));
            rest = &rest[end..];
            expect_key = false;
        }

        Ok(Self { segments })
    }

    /// The parsed steps, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolve the path against a values object. Missing links yield
    /// `None` — absence is not an error.
    pub fn get<'v>(&self, values: &'v Value) -> Option<&'v Value> {
        let mut current = values;
        for segment in &self.segments {
            current = match segment {
                Segment::Key(key) => current.get(key.as_str())?,
                Segment::Index(index) => current.get(index)?,
            };
        }
        Some(current)
    }

    /// Write `new_value` at this path, creating intermediate objects and
    /// padding arrays with `null` as needed. No sibling value changes.
    pub fn set(&self, values: &mut Value, new_value: Value) {
        set_in(values, &self.segments, new_value);
    }
}

fn set_in(target: &mut Value, segments: &[Segment], new_value: Value) {
    match segments.split_first() {
        None => *target = new_value,
        Some((Segment::Key(key), rest)) => {
            if !target.is_object() {
                *target = Value::Object(serde_json::Map::new());
            }
            if let Some(map) = target.as_object_mut() {
                set_in(
                    map.entry(key.clone()).or_insert(Value::Null),
                    rest,
                    new_value,
                );
            }
        }
        Some((Segment::Index(index), rest)) => {
            if !target.is_array() {
                *target = Value::Array(Vec::new());
            }
            if let Some(items) = target.as_array_mut() {
                while items.len() <= *index {
                    items.push(Value::Null);
                }
                set_in(&mut items[*index], rest, new_value);
            }
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::parse(path)
    }
}
