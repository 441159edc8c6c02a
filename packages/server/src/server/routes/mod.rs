// HTTP routes
pub mod contact;
pub mod health;
pub mod offices;

pub use contact::*;
pub use health::*;
pub use offices::*;
