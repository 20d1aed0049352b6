use log::debug;
use md5::Context;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::{
	Arc,
	atomic::{AtomicBool, Ordering},
};

use crate::error::{DigestError, Result};

const CHUNK_SIZE: usize = 8192; // 8KB buffer for reading

/// Finalized 128-bit digest of one file's contents.
///
/// Renders as 32 lowercase hex characters via `Display`; value equality is
/// equality of the underlying bytes, which coincides with equality of the
/// canonical hex rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDigest([u8; 16]);

impl FileDigest {
	pub fn as_bytes(&self) -> &[u8; 16] {
		&self.0
	}
}

impl fmt::Display for FileDigest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in &self.0 {
			write!(f, "{:02x}", byte)?;
		}
		Ok(())
	}
}

/// Shared flag for aborting a digest computation between chunk reads.
///
/// Clones share the same underlying flag, so a handler thread can cancel a
/// computation running elsewhere.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
	pub fn new() -> Self {
		CancelFlag::default()
	}

	pub fn cancel(&self) {
		self.0.store(true, Ordering::SeqCst);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.load(Ordering::SeqCst)
	}
}

/// Streams the file at `path` through an MD5 accumulator and returns the
/// finalized digest.
///
/// The file is read in fixed-size chunks in file order, so memory stays
/// bounded regardless of file size. Any I/O failure aborts immediately; a
/// partial digest is never returned.
pub fn compute_digest(path: &Path) -> Result<FileDigest> {
	compute_digest_with_cancel(path, &CancelFlag::new())
}

/// Same as [`compute_digest`], but checks `cancel` between chunk reads and
/// bails out with [`DigestError::Cancelled`], discarding the partial state.
pub fn compute_digest_with_cancel(path: &Path, cancel: &CancelFlag) -> Result<FileDigest> {
	let mut file = File::open(path).map_err(|e| DigestError::from_open(path, e))?;
	let mut context = Context::new();
	let mut buffer = [0; CHUNK_SIZE];

	loop {
		if cancel.is_cancelled() {
			return Err(DigestError::Cancelled {
				path: path.to_path_buf(),
			});
		}

		let bytes_read = file
			.read(&mut buffer)
			.map_err(|e| DigestError::from_read(path, e))?;
		if bytes_read == 0 {
			break; // EOF
		}
		context.consume(&buffer[..bytes_read]);
	}

	let digest = FileDigest(context.finalize().0);
	debug!("hashed {} ({})", path.display(), digest);
	Ok(digest)
}
