use serde::{Deserialize, Serialize};

/// Metadata of a stored upload, echoed back to the caller. The client is
/// responsible for threading `path` (or `filename`) into the `image` field
/// of a subsequent blog creation; nothing links the two server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub fieldname: String,
    pub originalname: String,
    pub mimetype: String,
    pub destination: String,
    pub filename: String,
    pub path: String,
    pub size: u64,
}
