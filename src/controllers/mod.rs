//! Page Controllers
//!
//! Each controller binds to server-rendered markup once and then reacts
//! to DOM events only.

mod conditional_fields;
mod favorite_toggle;

pub use conditional_fields::*;
pub use favorite_toggle::*;
