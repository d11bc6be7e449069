pub mod cli;
pub mod common;
pub mod container;
pub mod storage;
