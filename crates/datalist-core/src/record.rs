use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A loosely typed field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// `true` for anything a user would consider "filled in": not null, not an empty string,
    /// not an empty list.
    pub fn has_value(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Text(s) => !s.trim().is_empty(),
            Value::List(items) => !items.is_empty(),
            _ => true,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
            Value::List(_) => 4,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Orders two optional field values.
///
/// Missing and `Null` values are equal to each other and sort before every defined value.
/// Numbers compare numerically (integers and floats mix freely, `NaN` is equal to everything),
/// text compares lexicographically, booleans order `false < true`, lists compare element-wise.
/// Values of different kinds order by kind: null, bool, number, text, list.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.unwrap_or(&Value::Null);
    let b = b.unwrap_or(&Value::Null);
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Int(x), Value::Float(y)) => cmp_f64(*x as f64, *y),
        (Value::Float(x), Value::Int(y)) => cmp_f64(*x, *y as f64),
        (Value::Float(x), Value::Float(y)) => cmp_f64(*x, *y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::List(x), Value::List(y)) => {
            for (l, r) in x.iter().zip(y.iter()) {
                let ord = compare_values(Some(l), Some(r));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => a.rank().cmp(&b.rank()),
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// String form of a record identifier, as handed to row actions.
///
/// Ids are compared in this form, so a collection must keep its ids unique after stringification:
/// `1`, `1.0` and `"1"` all map to the same `RowId`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// A uniquely identified mapping from field name to [`Value`].
///
/// The identifier is stored apart from the other fields and answers lookups for the `id` key, so
/// it can be sorted on like any other column.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    id: Value,
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub const ID_FIELD: &'static str = "id";

    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a field. Writes to `id` are ignored; the identifier is fixed at construction.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        if name == Self::ID_FIELD {
            return;
        }
        self.fields.insert(name, value.into());
    }

    pub fn id(&self) -> &Value {
        &self.id
    }

    /// See [`RowId`] for the uniqueness this relies on.
    pub fn row_id(&self) -> RowId {
        RowId(self.id.to_string())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        if name == Self::ID_FIELD {
            return Some(&self.id);
        }
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_sort_first_and_equal() {
        assert_eq!(compare_values(None, Some(&Value::Null)), Ordering::Equal);
        assert_eq!(
            compare_values(None, Some(&Value::Int(-5))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&Value::Text(String::new())), Some(&Value::Null)),
            Ordering::Greater
        );
    }

    #[test]
    fn numbers_compare_numerically_across_kinds() {
        assert_eq!(
            compare_values(Some(&Value::Int(2)), Some(&Value::Int(10))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&Value::Float(2.5)), Some(&Value::Int(2))),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(Some(&Value::Float(f64::NAN)), Some(&Value::Int(1))),
            Ordering::Equal
        );
    }

    #[test]
    fn id_is_readable_as_a_field_but_not_writable() {
        let mut r = Record::new(7).with("name", "Ada");
        r.set("id", 99);
        assert_eq!(r.get("id"), Some(&Value::Int(7)));
        assert_eq!(r.row_id(), RowId::new("7"));
        assert_eq!(r.text("name"), Some("Ada"));
    }

    #[test]
    fn row_ids_compare_in_string_form() {
        assert_eq!(Record::new(1).row_id(), Record::new("1").row_id());
        assert_eq!(Record::new(1.0).row_id(), RowId::new("1"));
        assert_ne!(Record::new(1).row_id(), Record::new(10).row_id());
    }

    #[test]
    fn lists_display_comma_joined() {
        let v = Value::from(vec!["RoleAdmin", "RoleUser"]);
        assert_eq!(v.to_string(), "RoleAdmin, RoleUser");
        assert_eq!(Value::Null.to_string(), "");
    }
}
