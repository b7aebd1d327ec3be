//! FFI bindings crate for the QuickTodo mobile shell.

pub mod api;
