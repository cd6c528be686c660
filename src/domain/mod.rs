pub mod models;
pub mod numeric;
pub mod services;
pub mod errors;

pub use models::*;
pub use numeric::*;
pub use services::*;
pub use errors::*;
