//! Answer extraction for Q&A answer pages.
//!
//! Takes the raw HTML of an answer page and pulls out the best answer text
//! (a single code snippet in short mode, the whole first answer in full
//! mode) together with the question's tags. Parsing is lenient: malformed
//! input degrades to the [`NO_ANSWER_MSG`] sentinel instead of failing.

pub mod extractor;
pub mod models;
mod selectors;

pub use extractor::{NO_ANSWER_MSG, extract_answer};
pub use models::Fragment;
