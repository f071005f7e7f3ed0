use std::path::Path;
use std::fs::File;
use std::io::{self, BufReader, Read};

use serde::Deserialize;

use super::record::Record;

/// The wire format of a table file:
/// the target attribute name, the candidate feature names,
/// and one flat string-to-string object per training example.
#[derive(Deserialize)]
struct Table {
    target: String,
    features: Vec<String>,
    data: Vec<Record>,
}

/// Struct `Sample` holds an ordered batch of training records
/// together with the name of the target attribute
/// and the ordered list of feature attributes
/// eligible for splitting.
///
/// Every record is checked once, on construction,
/// to carry the target and every listed feature.
/// The induction path relies on this invariant
/// and never re-validates a lookup.
#[derive(Debug, Clone)]
pub struct Sample {
    records: Vec<Record>,
    target: String,
    features: Vec<String>,
}

impl Sample {
    /// Construct a new instance of `Sample.`
    /// This method panics when some record misses
    /// the target attribute or a feature attribute,
    /// naming the offending row and attribute.
    pub fn new<S, F, T>(records: Vec<Record>, target: S, features: T)
        -> Self
        where S: ToString,
              F: ToString,
              T: AsRef<[F]>,
    {
        let target = target.to_string();
        let features = features.as_ref()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>();

        for (row, record) in records.iter().enumerate() {
            if !record.contains(&target) {
                panic!(
                    "Record {row} does not carry \
                     the target attribute \"{target}\""
                );
            }
            for feature in features.iter() {
                if !record.contains(feature) {
                    panic!(
                        "Record {row} does not carry \
                         the feature attribute \"{feature}\""
                    );
                }
            }
        }

        Self { records, target, features, }
    }

    /// Read a JSON table file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist
    /// or is not a valid table.
    pub(crate) fn from_json<P>(file: P) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_json_reader(reader)
    }

    /// Read a JSON table from [`BufReader`].
    pub fn from_json_reader<R>(reader: BufReader<R>) -> io::Result<Self>
        where R: Read,
    {
        let table: Table = serde_json::from_reader(reader)?;
        Ok(Self::new(table.data, table.target, table.features))
    }

    /// Returns the slice of training records.
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }

    /// Returns the name of the target attribute.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the names of the feature attributes,
    /// in splitting-candidate order.
    pub fn features(&self) -> &[String] {
        &self.features[..]
    }

    /// Returns the pair of the number of records and
    /// the number of feature attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.features.len())
    }

    /// Check whether the sample holds no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the `idx`-th record.
    #[inline]
    pub fn at(&self, idx: usize) -> &Record {
        &self.records[idx]
    }

    /// Use the feature named `target` as the target attribute.
    /// The old target attribute joins the tail of the feature list.
    /// This method panics when no feature of that name exists.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        if target == self.target {
            return self;
        }

        let pos = self.features.iter()
            .position(|feature| feature == target)
            .unwrap_or_else(|| {
                panic!("The target attribute \"{target}\" does not exist")
            });

        let target = self.features.remove(pos);
        let old = std::mem::replace(&mut self.target, target);
        self.features.push(old);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_examples(bytes: &[u8]) -> Sample {
        let reader = BufReader::new(bytes);
        Sample::from_json_reader(reader).unwrap()
    }

    #[test]
    fn test_from_json_reader_01() {
        let bytes = br#"{
            "target": "class",
            "features": ["color", "size"],
            "data": [
                {"color": "red",  "size": "small", "class": "yes"},
                {"color": "blue", "size": "large", "class": "no"}
            ]
        }"#;
        let sample = training_examples(bytes);

        let (n_records, n_features) = sample.shape();
        assert_eq!(n_records, 2);
        assert_eq!(n_features, 2);
        assert_eq!(sample.target(), "class");
        assert_eq!(sample.at(0).get("color"), "red");
    }

    #[test]
    fn test_from_json_reader_02() {
        let bytes = b"this is not a table";
        let reader = BufReader::new(&bytes[..]);
        let res = Sample::from_json_reader(reader);
        assert!(res.is_err(), "expected Err, got {res:?}.");
    }

    #[test]
    #[should_panic]
    fn test_new_missing_target_01() {
        let records = vec![
            Record::from([("color", "red")]),
        ];
        Sample::new(records, "class", ["color"]);
    }

    #[test]
    #[should_panic]
    fn test_new_missing_feature_01() {
        let records = vec![
            Record::from([("color", "red"), ("class", "yes")]),
            Record::from([("class", "no")]),
        ];
        Sample::new(records, "class", ["color"]);
    }

    #[test]
    fn test_set_target_01() {
        let records = vec![
            Record::from([("color", "red"), ("class", "yes")]),
        ];
        let sample = Sample::new(records, "class", ["color"])
            .set_target("color");

        assert_eq!(sample.target(), "color");
        assert_eq!(sample.features(), ["class".to_string()]);
    }

    #[test]
    #[should_panic]
    fn test_set_target_02() {
        let records = vec![
            Record::from([("color", "red"), ("class", "yes")]),
        ];
        Sample::new(records, "class", ["color"])
            .set_target("weight");
    }
}
