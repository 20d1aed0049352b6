pub mod compare;
pub mod digest;
pub mod error;

pub use compare::{ComparisonOutcome, compare, compare_with_cancel};
pub use digest::{CancelFlag, FileDigest, compute_digest, compute_digest_with_cancel};
pub use error::DigestError;
