pub mod check;
pub mod ffi;
mod macros;
