#![allow(dead_code)]

pub mod fixtures;
pub mod pemda_env;
pub mod sheets_stub;
pub mod xlsx;
