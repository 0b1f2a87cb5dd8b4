pub mod button;
pub mod card;
pub mod radio_group;
pub mod toast;

pub use button::*;
pub use card::*;
pub use radio_group::*;
pub use toast::*;
