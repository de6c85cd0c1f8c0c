//! Shared integration test utilities

#![allow(dead_code)]

mod server;

pub use server::*;
