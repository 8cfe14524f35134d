use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::input::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryWidth {
    F32,
    F64,
}

impl BinaryWidth {
    pub fn bytes(self) -> usize {
        match self {
            BinaryWidth::F32 => 4,
            BinaryWidth::F64 => 8,
        }
    }
}

pub fn read_binary_mapped(path: &Path, width: BinaryWidth) -> Result<Vec<f64>, InputError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }
    // The map is only read for the duration of this call.
    let mmap = unsafe { Mmap::map(&file)? };
    decode_le(&mmap[..], width)
}

pub fn decode_le(bytes: &[u8], width: BinaryWidth) -> Result<Vec<f64>, InputError> {
    let w = width.bytes();
    if bytes.len() % w != 0 {
        return Err(InputError::InvalidInput(format!(
            "binary score data is {} bytes, not a multiple of {}",
            bytes.len(),
            w
        )));
    }
    let out = match width {
        BinaryWidth::F64 => bytes
            .chunks_exact(8)
            .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
            .collect(),
        BinaryWidth::F32 => bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]) as f64)
            .collect(),
    };
    Ok(out)
}
