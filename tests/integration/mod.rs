//! Integration tests for ddir

mod config_integration;
mod test_utils;

pub use test_utils::{with_ddir_env, DdirEnv};
