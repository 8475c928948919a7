pub mod filters;
pub mod product;
pub mod session;
