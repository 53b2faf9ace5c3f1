pub mod appearance;
pub mod country;
pub mod medal;

pub use appearance::*;
pub use country::*;
pub use medal::*;
