//! Integration test modules.

mod plan_pipeline_test;
