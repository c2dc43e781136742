//! Integration test suite (requires a real SurveyMonkey account).
//!
//! Run all integration tests with:
//!   SM_ACCESS_TOKEN=... cargo test --test integration -- --ignored --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/contacts.rs"]
mod contacts;
#[path = "integration/surveys.rs"]
mod surveys;
