use serde::{Serialize, Deserialize};

use std::collections::HashMap;

/// A single training example:
/// a mapping from attribute name to a categorical value.
/// Both sides are plain strings;
/// numerical attributes are not supported.
///
/// `Record` deserializes directly from a flat JSON object,
/// e.g. `{"age": "youth", "income": "high"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    /// Construct a record from an attribute-to-value map.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values, }
    }

    /// Returns the value this record takes at `attribute`.
    /// This method panics when the record
    /// does not carry the attribute.
    #[inline]
    pub fn get(&self, attribute: &str) -> &str {
        self.values.get(attribute)
            .unwrap_or_else(|| {
                panic!("The attribute \"{attribute}\" does not exist")
            })
    }

    /// Returns the value at `attribute`,
    /// or `None` if the record does not carry it.
    #[inline]
    pub fn try_get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    /// Check whether the record carries `attribute.`
    #[inline]
    pub fn contains(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }

    /// Returns the number of attributes on this record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the record carries no attribute at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Record
    where K: ToString,
          V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        let values = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Self { values, }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_01() {
        let record = Record::from([("age", "youth"), ("income", "high")]);
        let res = record.get("age");
        let exp = "youth";
        assert_eq!(exp, res, "expected {exp}, got {res}.");
    }

    #[test]
    #[should_panic]
    fn test_get_02() {
        let record = Record::from([("age", "youth")]);
        record.get("income");
    }

    #[test]
    fn test_try_get_01() {
        let record = Record::from([("age", "youth")]);
        assert_eq!(record.try_get("age"), Some("youth"));
        assert_eq!(record.try_get("income"), None);
    }

    #[test]
    fn test_deserialize_01() {
        let json = r#"{"age": "youth", "student": "no"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        let exp = Record::from([("age", "youth"), ("student", "no")]);
        assert_eq!(exp, record, "expected {exp:?}, got {record:?}.");
    }
}
