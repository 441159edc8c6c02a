// Office directory: the fixed set of agency locations
pub mod directory;
pub mod models;

pub use directory::*;
pub use models::*;
