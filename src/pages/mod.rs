//! Page components for the Bapsang site.

mod calc_food;
mod landing;

pub use calc_food::CalcFood;
pub use landing::Landing;
