pub mod geometry;
pub mod ipc;
mod macros;
