//! Reusable widgets for the portfolio page.

mod button;
mod input;

pub use button::*;
pub use input::*;
