//! sbp Core Types and Definitions
//!
//! This crate provides the foundational types for sbp service blueprint
//! diagrams. It includes:
//!
//! - **Lanes**: The fixed swimlane roles ([`lane::Lane`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Blueprint**: The semantic model produced by parsing ([`blueprint`] module)
//! - **Scene**: The positioned layout model consumed by renderers ([`scene`] module)

pub mod blueprint;
pub mod color;
pub mod geometry;
pub mod lane;
pub mod scene;
