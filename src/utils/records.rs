//! Record sorting helper.
//!
//! Thin collaborator: sorts a sequence of keyed records ascending by one
//! key's value, delegating to the standard library's stable sort. Records
//! missing the key sort before everything else.

use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub type Record = BTreeMap<String, Value>;

/// Total order over JSON values good enough for sort keys: null, then
/// booleans, then numbers, then strings, then everything else by its JSON
/// rendering.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(_), _) => Ordering::Less,
        (_, Value::Bool(_)) => Ordering::Greater,
        (Value::Number(_), _) => Ordering::Less,
        (_, Value::Number(_)) => Ordering::Greater,
        (Value::String(_), _) => Ordering::Less,
        (_, Value::String(_)) => Ordering::Greater,
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// Sort records ascending by the named key. Stable: records with equal keys
/// keep their input order.
pub fn sort_records_by_key(mut records: Vec<Record>, key: &str) -> Vec<Record> {
    records.sort_by(|a, b| {
        let left = a.get(key).unwrap_or(&Value::Null);
        let right = b.get(key).unwrap_or(&Value::Null);
        compare_values(left, right)
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_sorts_by_numeric_key() {
        let records = vec![
            record(&[("name", json!("Charlie")), ("age", json!(35))]),
            record(&[("name", json!("Bob")), ("age", json!(25))]),
            record(&[("name", json!("Alice")), ("age", json!(30))]),
        ];
        let sorted = sort_records_by_key(records, "age");
        let names: Vec<_> = sorted.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Bob", "Alice", "Charlie"]);
    }

    #[test]
    fn test_sorts_by_string_key() {
        let records = vec![
            record(&[("city", json!("New York"))]),
            record(&[("city", json!("Boston"))]),
            record(&[("city", json!("Chicago"))]),
        ];
        let sorted = sort_records_by_key(records, "city");
        let cities: Vec<_> = sorted.iter().map(|r| r["city"].as_str().unwrap()).collect();
        assert_eq!(cities, vec!["Boston", "Chicago", "New York"]);
    }

    #[test]
    fn test_stable_for_ties() {
        let records = vec![
            record(&[("name", json!("first")), ("age", json!(30))]),
            record(&[("name", json!("second")), ("age", json!(30))]),
            record(&[("name", json!("zero")), ("age", json!(10))]),
        ];
        let sorted = sort_records_by_key(records, "age");
        let names: Vec<_> = sorted.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["zero", "first", "second"]);
    }

    #[test]
    fn test_missing_key_sorts_first() {
        let records = vec![
            record(&[("age", json!(20))]),
            record(&[("name", json!("no-age"))]),
        ];
        let sorted = sort_records_by_key(records, "age");
        assert!(sorted[0].get("age").is_none());
    }
}
