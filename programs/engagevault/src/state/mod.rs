pub mod config;
pub mod enums;
pub mod escrow;
pub mod request;

pub use config::*;
pub use enums::*;
pub use escrow::*;
pub use request::*;
