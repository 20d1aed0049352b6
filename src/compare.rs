use log::debug;
use std::io;
use std::path::Path;
use std::thread;

use crate::digest::{CancelFlag, FileDigest, compute_digest_with_cancel};
use crate::error::DigestError;

/// Verdict of comparing two files by digest.
#[derive(Debug)]
pub enum ComparisonOutcome {
	/// Both digests computed and equal.
	Identical { digest: FileDigest },
	/// Both digests computed, contents differ.
	Different { left: FileDigest, right: FileDigest },
	/// At least one side failed, so no equality judgment is made. At least
	/// one of the two fields is always `Some`.
	Failed {
		left: Option<DigestError>,
		right: Option<DigestError>,
	},
}

pub fn compare(path_a: &Path, path_b: &Path) -> ComparisonOutcome {
	compare_with_cancel(path_a, path_b, &CancelFlag::new())
}

/// Hashes both files on their own threads, each with its own file handle and
/// accumulator, then applies the equality decision.
///
/// The two computations are independent: a failure on one side never blocks
/// the other. Cancelling aborts both sides between chunk reads.
pub fn compare_with_cancel(path_a: &Path, path_b: &Path, cancel: &CancelFlag) -> ComparisonOutcome {
	let (left, right) = thread::scope(|s| {
		let a = s.spawn(|| compute_digest_with_cancel(path_a, cancel));
		let b = s.spawn(|| compute_digest_with_cancel(path_b, cancel));
		(join_side(a, path_a), join_side(b, path_b))
	});

	match (left, right) {
		(Ok(l), Ok(r)) if l == r => {
			debug!("digests match: {}", l);
			ComparisonOutcome::Identical { digest: l }
		}
		(Ok(l), Ok(r)) => ComparisonOutcome::Different { left: l, right: r },
		(l, r) => ComparisonOutcome::Failed {
			left: l.err(),
			right: r.err(),
		},
	}
}

fn join_side(
	handle: thread::ScopedJoinHandle<'_, Result<FileDigest, DigestError>>,
	path: &Path,
) -> Result<FileDigest, DigestError> {
	handle.join().unwrap_or_else(|_| {
		Err(DigestError::Unspecified {
			path: path.to_path_buf(),
			source: io::Error::other("digest thread panicked"),
		})
	})
}
