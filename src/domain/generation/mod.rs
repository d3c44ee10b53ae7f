//! Turning unstructured model replies into structured records.

mod extraction;
mod fields;

pub use extraction::{
    array_from_structured_reply, decode_records, extract_json_array, ExtractionError,
};
pub use fields::{null_as_default, string_or_number};
