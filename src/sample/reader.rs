use std::path::Path;
use std::io;

use super::sample_struct::Sample;

/// A struct that returns [`Sample`].
/// Using this struct, one can read a JSON table file to [`Sample`].
/// A table file carries the target attribute name,
/// the feature attribute names, and the records:
/// ```json
/// {
///     "target": "class",
///     "features": ["color", "size"],
///     "data": [
///         {"color": "red", "size": "small", "class": "yes"}
///     ]
/// }
/// ```
/// # Example
/// ```no_run
/// use minitrees::SampleReader;
/// let filename = "/path/to/table.json";
/// let sample = SampleReader::default()
///     .file(filename)
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P> {
    file: Option<P>,
    target: Option<String>,
}

impl<P> SampleReader<P> {
    /// Use the given attribute as the target
    /// instead of the one named by the table file.
    /// The attribute must appear in the file's feature list.
    pub fn target_feature<S: AsRef<str>>(mut self, attribute: S) -> Self {
        self.target = Some(attribute.as_ref().to_string());
        self
    }
}

impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<Sample> {
        if self.file.is_none() {
            panic!("The table file name is not set");
        }
        let file = self.file.unwrap();

        let sample = Sample::from_json(file)?;
        let sample = match self.target {
            Some(target) => sample.set_target(target),
            None => sample,
        };
        Ok(sample)
    }
}
