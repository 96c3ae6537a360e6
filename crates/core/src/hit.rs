//! Result rows returned by a lookup collaborator.

use serde::{Deserialize, Serialize};

/// One matched document in a result set.
///
/// The document id is the stable key: it is unique within a single result
/// set and is the handle per-row commands (access toggling) address rows by.
/// `access` is the only field ever mutated after creation; rows are never
/// removed individually, the whole set is replaced by the next search
/// outcome.
///
/// The field set is the wire contract with the lookup collaborator. Decoding
/// tolerates and ignores unknown extra fields, and fields a collaborator
/// omits decode to their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchHit {
    /// Unique document identifier.
    pub doc_id: String,
    /// Source system the document was matched in.
    pub source: String,
    /// First cross-reference number.
    pub a_number: String,
    /// Second cross-reference number.
    pub c_number: String,
    /// Given name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: String,
    /// Family name.
    pub last_name: String,
    /// Year of birth.
    pub yob: String,
    /// Month of birth.
    pub mob: String,
    /// Full date of birth.
    pub dob: String,
    /// Country of birth.
    pub country_of_birth: String,
    /// Place of birth.
    pub po_birth: String,
    /// Registration state code.
    pub registered_state: String,
    /// Administrative file number.
    pub file_number: String,
    /// Port-of-entry text.
    pub poe_text: String,
    /// Year of entry.
    pub yoe: String,
    /// Line number within the source record.
    pub line_no: String,
    /// Row number within the source record.
    pub row_no: String,
    /// Record format code.
    pub format: String,
    /// Soundex code computed from the name parts.
    pub calcd_soundex: String,
    /// Soundex code as recorded in the source.
    pub soundex: String,
    /// Folder the document is filed under.
    pub folder_name: String,
    /// Path to the folder holding the document.
    pub file_path: String,
    /// Reference to the scanned document image.
    pub image_url: String,
    /// Whether access to the document is currently granted.
    pub access: bool,
}

impl SearchHit {
    /// Decode a result set from collaborator JSON.
    ///
    /// Unknown fields on each row are ignored; missing fields default.
    pub fn decode_set(json: &str) -> Result<Vec<SearchHit>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
