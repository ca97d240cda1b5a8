//! Magnetic space-group library
//!
//! This library provides the tabulated catalogue of the 1651 magnetic space groups
//! (BNS and OG settings) together with exact integer/rational symmetry-operator
//! algebra, centering, orbit generation and `x,y,z` notation.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod rational;
pub mod symmetries;

pub use catalogue::{MagneticCatalogue, MagneticGroupRecord};
pub use error::SymmetryError;
pub use symmetries::SymmetryOperation;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SymmetryError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
