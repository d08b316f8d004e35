pub mod initialize_campaign;
pub use initialize_campaign::*;

pub mod pay_publisher;
pub use pay_publisher::*;

pub mod pay_commission;
pub use pay_commission::*;

pub mod update_campaign;
pub use update_campaign::*;

pub mod close_campaign;
pub use close_campaign::*;

pub mod close_escrow;
pub use close_escrow::*;
