pub mod campaign;
pub mod escrow;
pub mod tombstone;

pub use campaign::*;
pub use escrow::*;
pub use tombstone::*;
