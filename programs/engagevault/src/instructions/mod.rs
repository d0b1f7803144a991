pub mod accept;
pub mod check_expired;
pub mod create;
pub mod fulfill;
pub mod initialize_config;
pub mod reject;
pub mod request_verification;
pub mod update_config;

pub use accept::*;
pub use check_expired::*;
pub use create::*;
pub use fulfill::*;
pub use initialize_config::*;
pub use reject::*;
pub use request_verification::*;
pub use update_config::*;
