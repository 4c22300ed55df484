// Document path, first half: bytes → text → structured fields.
// Everything here is synchronous and pure; callers decide where it runs.

pub mod fields;
pub mod patterns;
pub mod text;
