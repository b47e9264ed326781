//! Pure dependency resolution (no IO).
//!
//! Input: a build request (requested ids + platform version) and a catalog.
//! Output: the complete dependency set for the generated project.

#![forbid(unsafe_code)]

pub mod model;

mod engine;
pub mod customizers;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::resolve;
