pub mod aggregate;
pub mod consts;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod validation;
