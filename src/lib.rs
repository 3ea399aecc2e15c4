//! vSphere virtual disk backing inspection library.
//!
//! Models the SDK's virtual-disk backing descriptor family as a tagged
//! union and converts any descriptor into a string-keyed property map for
//! schema-layer consumers.

/// Backing descriptor model, property values, and extraction.
pub mod vim;
