// Skill comparison core: normalization, synonym groups, matching and gap analysis.
// Everything here is synchronous and pure; the only shared state is the
// read-only synonym table handed in at construction.

pub mod gaps;
pub mod handlers;
pub mod matcher;
pub mod normalizer;
pub mod synonyms;
