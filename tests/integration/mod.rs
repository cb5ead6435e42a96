//! Integration test modules.

mod binary_test;
mod split_test;
