//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicktodo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Probes core crate wiring without the mobile shell or FFI runtime.
    println!("quicktodo_core ping={}", quicktodo_core::ping());
    println!("quicktodo_core version={}", quicktodo_core::core_version());
}
