use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;

pub fn is_gz(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if is_gz(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_all_maybe_gz(path: &Path) -> Result<Vec<u8>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| {
        InputError::InvalidInput(format!("failed to read {}: {e}", path.display()))
    })?;
    Ok(buf)
}
