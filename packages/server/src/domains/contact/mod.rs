// Contact domain: submission validation and the delivery seam
pub mod models;
pub mod sink;
pub mod validate;

pub use models::*;
pub use sink::*;
pub use validate::*;
