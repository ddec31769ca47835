//! Integration tests for leave-extract.
//!
//! These tests drive the public API end to end: the date cascade, message
//! processing, and configuration loading.

#[path = "integration/test_config.rs"]
mod test_config;

#[path = "integration/test_extraction.rs"]
mod test_extraction;

#[path = "integration/test_message.rs"]
mod test_message;
