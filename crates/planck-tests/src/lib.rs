//! Integration tests for the blackbody color pipeline.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the pipeline crates: dataset loading, radiance, tristimulus
//! integration, color conversion, table assembly, and the JSON artifact.
//!
//! The [`observer`] module provides an analytic stand-in for the
//! production color-matching dataset so colorimetric properties can be
//! checked without shipping the real table.

pub mod observer;

#[cfg(test)]
mod pipeline;
