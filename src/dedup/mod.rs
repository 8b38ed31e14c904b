//! Deduplication.
//!
//! Two layers, both scoped to one run:
//!
//! 1. [`HeaderPool`]: verbatim header strings, seeded from the existing
//!    corpus and then fed every source's headers. Runs before any mapping.
//! 2. [`SignatureSet`]: signature keys of mapped results. Distinct headers
//!    that map to the same signature are duplicate test cases; the first one
//!    wins.

mod headers;
mod signature;

pub use headers::{HeaderPool, Origin};
pub use signature::{classify, signature_key, Admission, SignatureBranch, SignatureSet};
