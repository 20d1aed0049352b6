use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, DigestError>;

/// Failure modes of a single digest computation.
///
/// Each variant names the file it concerns; the I/O-backed variants keep the
/// underlying error verbatim so platform detail survives to the caller.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
	#[error("file not found: {} ({})", path.display(), source)]
	NotFound { path: PathBuf, source: io::Error },

	#[error("permission denied: {} ({})", path.display(), source)]
	PermissionDenied { path: PathBuf, source: io::Error },

	#[error("read error on {}: {}", path.display(), source)]
	Read { path: PathBuf, source: io::Error },

	#[error("cancelled while hashing {}", path.display())]
	Cancelled { path: PathBuf },

	#[error("{}: {}", path.display(), source)]
	Unspecified { path: PathBuf, source: io::Error },
}

impl DigestError {
	/// Classifies a failure to open the file.
	pub(crate) fn from_open(path: &Path, source: io::Error) -> Self {
		match source.kind() {
			io::ErrorKind::NotFound => DigestError::NotFound {
				path: path.to_path_buf(),
				source,
			},
			io::ErrorKind::PermissionDenied => DigestError::PermissionDenied {
				path: path.to_path_buf(),
				source,
			},
			_ => DigestError::Unspecified {
				path: path.to_path_buf(),
				source,
			},
		}
	}

	/// Wraps a failure that happened mid-stream, after a successful open.
	pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
		DigestError::Read {
			path: path.to_path_buf(),
			source,
		}
	}

	/// The file this failure concerns.
	pub fn path(&self) -> &Path {
		match self {
			DigestError::NotFound { path, .. }
			| DigestError::PermissionDenied { path, .. }
			| DigestError::Read { path, .. }
			| DigestError::Cancelled { path }
			| DigestError::Unspecified { path, .. } => path,
		}
	}
}
