//! Bundled content.
//!
//! - `starter`: a small card set exercising every effect key, trap kind and
//!   aura tag, used by tests, benchmarks and documentation

pub mod starter;
