//! Domain models for the view core.

mod axis;
mod location;
mod role;
mod section;
mod user;
mod view;

pub use axis::*;
pub use location::*;
pub use role::*;
pub use section::*;
pub use user::*;
pub use view::*;
