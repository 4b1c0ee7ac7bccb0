//! Output rendering and file writing
//!
//! Both formats are rendered from the same slice of sessions so the JSON and
//! CSV files always describe the same records in the same order.

mod csv;
mod json;
mod writer;

pub use self::csv::{csv_escape, to_csv};
pub use self::json::to_json;
pub use self::writer::{write_outputs, OutputPaths};
