//! # bible-rope
//!
//! Loads plain-text Bible translations into verse tables and looks up a single
//! verse across all of them.
//!
//! The library side lives in [`rope`]; the `bible-rope` binary wires it to the
//! console.

pub mod rope;
