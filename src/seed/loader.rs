use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::model::Dataset;
use crate::seed::error::SeedError;

/// Load a dataset from a JSON seed file.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, SeedError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SeedError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    from_reader(BufReader::new(file))
}

/// Decode a dataset from a byte stream. The stream is read once, to the end.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Dataset, SeedError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(SeedError::Read)?;
    from_slice(&bytes)
}

pub fn from_slice(bytes: &[u8]) -> Result<Dataset, SeedError> {
    serde_json::from_slice(bytes).map_err(SeedError::Parse)
}
