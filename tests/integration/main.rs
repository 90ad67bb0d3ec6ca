//! Integration tests for the qualifying offer pipeline
//!
//! These tests use wiremock to stand in for the salary dataset and run the
//! full fetch-parse-aggregate cycle end-to-end.

mod common;
mod pipeline_tests;
