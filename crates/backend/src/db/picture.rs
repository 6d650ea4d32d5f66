use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single picture entry. Only `id` has meaning to the service; every other
/// field is carried through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Picture(Map<String, Value>);

impl Picture {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// True when the record's `id` is numerically `id` (`2` and `2.0` alike).
    pub fn matches(&self, id: i128) -> bool {
        self.id().and_then(integer_id) == Some(id)
    }

    /// True when this record has an `id` equal to `other`, numbers by value.
    pub fn same_id_as(&self, other: &Value) -> bool {
        self.id().is_some_and(|id| ids_equal(id, other))
    }

    /// Shallow merge: every key of `patch` overwrites or adds, the rest stays.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        self.0.extend(patch);
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Integral value of a numeric id; integral floats count, fractions don't.
pub fn integer_id(id: &Value) -> Option<i128> {
    let Value::Number(n) = id else {
        return None;
    };
    number_as_integer(n)
}

fn number_as_integer(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.into());
    }
    let f = n.as_f64()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i128::MAX as f64).then_some(f as i128)
}

// Numbers compare by value, everything else structurally.
fn ids_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            match (number_as_integer(x), number_as_integer(y)) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            }
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn picture(v: Value) -> Picture {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn matches_only_integer_ids() {
        assert!(picture(json!({"id": 7})).matches(7));
        assert!(!picture(json!({"id": 8})).matches(7));
        assert!(!picture(json!({"id": "7"})).matches(7));
        assert!(!picture(json!({"title": "no id"})).matches(7));
    }

    #[test]
    fn integral_float_ids_match_their_integer() {
        assert!(picture(json!({"id": 2.0})).matches(2));
        assert!(!picture(json!({"id": 2.5})).matches(2));
        assert!(picture(json!({"id": -3})).matches(-3));
        assert!(picture(json!({"id": u64::MAX})).matches(u64::MAX.into()));
    }

    #[test]
    fn same_id_compares_numbers_by_value() {
        let p = picture(json!({"id": 1}));

        assert!(p.same_id_as(&json!(1)));
        assert!(p.same_id_as(&json!(1.0)));
        assert!(!p.same_id_as(&json!(1.5)));
        assert!(!p.same_id_as(&json!("1")));
        assert!(picture(json!({"id": 0.5})).same_id_as(&json!(0.5)));
        assert!(picture(json!({"id": "abc"})).same_id_as(&json!("abc")));
        assert!(!picture(json!({"title": "x"})).same_id_as(&json!(1)));
    }

    #[test]
    fn merge_overwrites_and_adds_keys() {
        let mut p = picture(json!({"id": 1, "title": "a", "year": 2001}));
        let patch = json!({"title": "b", "tags": ["x"]});
        let Value::Object(patch) = patch else { unreachable!() };

        p.merge(patch);

        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({"id": 1, "title": "b", "year": 2001, "tags": ["x"]})
        );
    }

    #[test]
    fn serializes_as_the_bare_object() {
        let p = picture(json!({"id": 3, "pic_url": "http://x/3.jpg"}));
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"id":3,"pic_url":"http://x/3.jpg"}"#
        );
    }

    #[test]
    fn rejects_non_objects() {
        assert!(serde_json::from_value::<Picture>(json!([1, 2])).is_err());
    }
}
