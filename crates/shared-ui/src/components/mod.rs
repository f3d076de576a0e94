// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;

// Primitive wrappers
pub mod label;
pub mod switch;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use switch::*;
pub use toast::*;
