//! Client-side UI state.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by the pages that own
//! them, which keeps them testable without a reactive runtime.

pub mod gallery;
