//! Infrastructure layer: OS input backends and configuration storage.

pub mod platform;
pub mod storage;
