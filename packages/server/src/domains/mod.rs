// Business domains
pub mod contact;
pub mod offices;
