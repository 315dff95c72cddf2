//! Loading response texts from files or stdin

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::DigestError;
use crate::infra::FileSystem;

/// Where a response text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Map CLI arguments to sources; no arguments or `-` mean stdin
    pub fn from_args(args: &[String]) -> Vec<InputSource> {
        if args.is_empty() {
            return vec![InputSource::Stdin];
        }
        args.iter()
            .map(|arg| {
                if arg == "-" {
                    InputSource::Stdin
                } else {
                    InputSource::File(PathBuf::from(arg))
                }
            })
            .collect()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One loaded response
#[derive(Debug, Clone)]
pub struct ResponseInput {
    /// Origin of the text
    pub source: InputSource,
    /// Raw response text
    pub text: String,
}

/// Read a single response file
pub fn read_response<FS: FileSystem>(path: &Path, fs: &FS) -> Result<String, DigestError> {
    fs.read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DigestError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DigestError::Io {
                context: format!("reading {}", path.display()),
                source: e,
            }
        }
    })
}

/// Load every source, reading stdin at most once
///
/// `stdin` is called lazily and only when a source asks for it; repeated `-`
/// arguments reuse the same text.
pub fn load_inputs<FS, R>(
    sources: Vec<InputSource>,
    fs: &FS,
    stdin: R,
) -> Result<Vec<ResponseInput>, DigestError>
where
    FS: FileSystem,
    R: FnOnce() -> std::io::Result<String>,
{
    let mut stdin = Some(stdin);
    let mut stdin_text: Option<String> = None;
    let mut inputs = Vec::with_capacity(sources.len());

    for source in sources {
        let text = match &source {
            InputSource::File(path) => read_response(path, fs)?,
            InputSource::Stdin => {
                if let Some(read) = stdin.take() {
                    let text = read().map_err(|e| DigestError::Io {
                        context: "reading stdin".to_string(),
                        source: e,
                    })?;
                    stdin_text = Some(text);
                }
                stdin_text.clone().unwrap_or_default()
            }
        };
        log::debug!("loaded {} ({} bytes)", source, text.len());
        inputs.push(ResponseInput { source, text });
    }

    Ok(inputs)
}
