// file: src/store/keys.rs
// description: stable storage keys derived from document identifiers

use sha2::{Digest, Sha256};

/// Collision-resistant key for a document id, usable as a flat file name.
/// Document ids are relative paths and may contain separators and non-ASCII
/// characters; hashing keeps the storage directory flat.
pub fn storage_key(doc_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(doc_id.as_bytes());
    format!("{:x}", hasher.finalize())
}
