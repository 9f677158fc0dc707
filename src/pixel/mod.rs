pub mod buffer;
pub mod dimensions;
pub mod interop;
