pub mod analysis;
pub mod profile;
pub mod resume;

use serde::{Deserialize, Serialize};

/// Where a set of parsed facts came from. Serialized as the `type` tag of
/// `parsed_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Resume,
    LinkedinUrl,
}
