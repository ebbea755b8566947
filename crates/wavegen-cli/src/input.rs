//! Loading requests from disk.
//!
//! Requests are JSON files. Loading records a BLAKE3 hash of the raw file
//! content so reports can tie output back to the exact source bytes.

use std::path::{Path, PathBuf};

use wavegen_spec::Request;

/// Recognized request file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Result of loading a request file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed request.
    pub request: Request,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading a request.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads a request from a `.json` file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use wavegen_cli::input::load_request;
///
/// let loaded = load_request(Path::new("pluck.json")).unwrap();
/// println!("{} ({})", loaded.request.family, &loaded.source_hash[..16]);
/// ```
pub fn load_request(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let request = Request::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        request,
        source_hash,
    })
}

/// Applies command-line overrides to a loaded request.
///
/// `--sample-rate` and `--seed` replace the file's values before validation.
pub fn apply_overrides(request: Request, sample_rate: Option<u32>, seed: Option<u32>) -> Request {
    let request = match sample_rate {
        Some(rate) => request.with_sample_rate(rate),
        None => request,
    };
    match seed {
        Some(seed) => request.with_seed(seed),
        None => request,
    }
}
