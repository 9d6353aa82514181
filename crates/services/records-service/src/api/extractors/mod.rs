//! Custom extractors that reject with [`common::AppError`].

mod json_body;
mod record_id;

pub use json_body::JsonBody;
pub use record_id::RecordId;
