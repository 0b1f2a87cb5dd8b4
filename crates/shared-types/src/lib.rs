pub mod error;
pub mod feature_flags;
pub mod models;
pub mod requests;
pub mod user_type;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use requests::*;
pub use user_type::*;
