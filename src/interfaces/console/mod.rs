//! The interactive terminal surface: prompts during the ordering phase and
//! the final report (receipt, encoded summary, processing status lines).

pub mod prompt;
pub mod report;
pub mod summary;
