pub mod buildcore;
pub mod config;
pub mod error;
pub mod handle;
pub mod log;
pub(crate) mod node;
pub mod queue;
pub(crate) mod sort;
