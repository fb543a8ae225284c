//! Repository traits (interfaces)
//!
//! Contracts for the external collaborators the sniffer depends on.

mod prefix_source;

pub use prefix_source::{PrefixReadError, PrefixSource};
