use std::path::{Path, PathBuf};

pub mod binary;
pub mod compressed;
pub mod text;

use binary::{BinaryWidth, decode_le, read_binary_mapped};
use compressed::{is_gz, open_maybe_gz, read_all_maybe_gz};
use text::parse_text_scores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoreFormat {
    /// Pick the format from the file extension.
    Auto,
    /// Flat little-endian binary64 array.
    F64,
    /// Flat little-endian binary32 array.
    F32,
    /// Delimited decimal text.
    Text,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct ScoreSet {
    pub path: PathBuf,
    pub format: ScoreFormat,
    pub compressed: bool,
    pub scores: Vec<f64>,
}

impl ScoreSet {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        if self.scores.is_empty() {
            return None;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in &self.scores {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        Some((lo, hi))
    }
}

/// Resolves `Auto` from the extension left after stripping `.gz`.
pub fn detect_format(path: &Path) -> ScoreFormat {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "txt" | "csv" | "tsv" | "scores" => ScoreFormat::Text,
        "f32" => ScoreFormat::F32,
        _ => ScoreFormat::F64,
    }
}

pub fn load_scores(path: &Path, format: ScoreFormat) -> Result<ScoreSet, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "score file not found: {}",
            path.display()
        )));
    }
    let resolved = match format {
        ScoreFormat::Auto => detect_format(path),
        other => other,
    };
    let compressed = is_gz(path);

    let scores = match resolved {
        ScoreFormat::Text => parse_text_scores(open_maybe_gz(path)?)?,
        ScoreFormat::F32 => read_binary(path, BinaryWidth::F32, compressed)?,
        ScoreFormat::F64 | ScoreFormat::Auto => read_binary(path, BinaryWidth::F64, compressed)?,
    };

    tracing::debug!(
        path = %path.display(),
        format = ?resolved,
        compressed,
        n = scores.len(),
        "loaded score file"
    );

    Ok(ScoreSet {
        path: path.to_path_buf(),
        format: resolved,
        compressed,
        scores,
    })
}

fn read_binary(path: &Path, width: BinaryWidth, compressed: bool) -> Result<Vec<f64>, InputError> {
    if compressed {
        decode_le(&read_all_maybe_gz(path)?, width)
    } else {
        read_binary_mapped(path, width)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
