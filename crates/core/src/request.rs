//! Search parameter mapping.
//!
//! A request is a fixed set of optional string criteria. No single field is
//! required, but a request must name at least a document id or a source
//! before it may be submitted to the executor.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Canonical validation message for a request naming neither a document id
/// nor a source. Surfaced verbatim to the user.
pub const EMPTY_CRITERIA_MESSAGE: &str = "Please provide at least a Doc ID or Source to search.";

/// Wire names of every recognized request field, in form order.
pub const REQUEST_FIELDS: &[&str] = &[
    "docId",
    "source",
    "aNumber",
    "cNumber",
    "firstName",
    "middleName",
    "lastName",
    "yob",
    "mob",
    "dob",
    "countryOfBirth",
    "poBirth",
    "registeredState",
    "fileNumber",
    "poeText",
    "yoe",
    "lineNo",
    "rowNo",
    "format",
    "calcdSoundex",
    "soundex",
    "folderName",
    "comment",
];

/// Lookup table mapping normalized spellings (lowercased, underscores
/// stripped) back to the canonical wire name, so front-ends may accept
/// `doc_id`, `docid`, or `docId` interchangeably.
static FIELD_ALIASES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    REQUEST_FIELDS
        .iter()
        .map(|name| (name.to_lowercase().replace('_', ""), *name))
        .collect()
});

/// User-entered search criteria.
///
/// Transient and caller-owned until submitted; the session store retains the
/// most recently submitted copy for display and never mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Document identifier.
    pub doc_id: Option<String>,
    /// Source system.
    pub source: Option<String>,
    /// First cross-reference number.
    pub a_number: Option<String>,
    /// Second cross-reference number.
    pub c_number: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Year of birth.
    pub yob: Option<String>,
    /// Month of birth.
    pub mob: Option<String>,
    /// Full date of birth.
    pub dob: Option<String>,
    /// Country of birth.
    pub country_of_birth: Option<String>,
    /// Place of birth.
    pub po_birth: Option<String>,
    /// Registration state code.
    pub registered_state: Option<String>,
    /// Administrative file number.
    pub file_number: Option<String>,
    /// Port-of-entry text.
    pub poe_text: Option<String>,
    /// Year of entry.
    pub yoe: Option<String>,
    /// Line number within the source record.
    pub line_no: Option<String>,
    /// Row number within the source record.
    pub row_no: Option<String>,
    /// Record format code.
    pub format: Option<String>,
    /// Soundex code computed from the name parts.
    pub calcd_soundex: Option<String>,
    /// Soundex code as recorded in the source.
    pub soundex: Option<String>,
    /// Folder the document is filed under.
    pub folder_name: Option<String>,
    /// Free-text comment.
    pub comment: Option<String>,
}

impl SearchRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the request carries enough criteria to be submitted.
    ///
    /// A request is well-formed when at least one of the document id or the
    /// source is present and not blank (empty or whitespace-only values do
    /// not count).
    pub fn has_criteria(&self) -> bool {
        fn present(field: &Option<String>) -> bool {
            field.as_deref().is_some_and(|v| !v.trim().is_empty())
        }
        present(&self.doc_id) || present(&self.source)
    }

    /// Validate the request for submission.
    ///
    /// Returns `SearchError::EmptyCriteria` when both the document id and
    /// the source are absent or blank. This is the same check the executor
    /// applies before touching the session store, exposed here so front-ends
    /// can reject a submission early.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.has_criteria() {
            Ok(())
        } else {
            Err(SearchError::EmptyCriteria)
        }
    }

    /// Set a field by its wire name.
    ///
    /// Accepts the canonical camelCase name as well as snake_case and
    /// case-insensitive spellings. Returns `false` when the name is not a
    /// recognized request field; the request is left unchanged.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(canonical) = resolve_field(name) else {
            return false;
        };
        let value = Some(value.into());
        match canonical {
            "docId" => self.doc_id = value,
            "source" => self.source = value,
            "aNumber" => self.a_number = value,
            "cNumber" => self.c_number = value,
            "firstName" => self.first_name = value,
            "middleName" => self.middle_name = value,
            "lastName" => self.last_name = value,
            "yob" => self.yob = value,
            "mob" => self.mob = value,
            "dob" => self.dob = value,
            "countryOfBirth" => self.country_of_birth = value,
            "poBirth" => self.po_birth = value,
            "registeredState" => self.registered_state = value,
            "fileNumber" => self.file_number = value,
            "poeText" => self.poe_text = value,
            "yoe" => self.yoe = value,
            "lineNo" => self.line_no = value,
            "rowNo" => self.row_no = value,
            "format" => self.format = value,
            "calcdSoundex" => self.calcd_soundex = value,
            "soundex" => self.soundex = value,
            "folderName" => self.folder_name = value,
            "comment" => self.comment = value,
            _ => unreachable!("resolve_field only returns canonical names"),
        }
        true
    }

    /// Read a field by its wire name. Returns `None` for unrecognized names
    /// as well as for recognized-but-unset fields.
    pub fn field(&self, name: &str) -> Option<&str> {
        let slot = match resolve_field(name)? {
            "docId" => &self.doc_id,
            "source" => &self.source,
            "aNumber" => &self.a_number,
            "cNumber" => &self.c_number,
            "firstName" => &self.first_name,
            "middleName" => &self.middle_name,
            "lastName" => &self.last_name,
            "yob" => &self.yob,
            "mob" => &self.mob,
            "dob" => &self.dob,
            "countryOfBirth" => &self.country_of_birth,
            "poBirth" => &self.po_birth,
            "registeredState" => &self.registered_state,
            "fileNumber" => &self.file_number,
            "poeText" => &self.poe_text,
            "yoe" => &self.yoe,
            "lineNo" => &self.line_no,
            "rowNo" => &self.row_no,
            "format" => &self.format,
            "calcdSoundex" => &self.calcd_soundex,
            "soundex" => &self.soundex,
            "folderName" => &self.folder_name,
            "comment" => &self.comment,
            _ => return None,
        };
        slot.as_deref()
    }

    /// Iterate over the fields that are currently set, as (wire name, value)
    /// pairs in form order.
    pub fn set_fields<'a>(&'a self) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
        REQUEST_FIELDS
            .iter()
            .filter_map(|name| self.field(name).map(|value| (*name, value)))
    }
}

/// Resolve a user-supplied field name to its canonical wire spelling.
fn resolve_field(name: &str) -> Option<&'static str> {
    FIELD_ALIASES
        .get(&name.to_lowercase().replace('_', ""))
        .copied()
}
