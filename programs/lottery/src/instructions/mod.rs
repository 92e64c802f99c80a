pub use admin::*;
pub use fulfill_randomness::*;
pub use pick_winner::*;
pub use queries::*;
pub use register::*;

pub mod admin;
pub mod fulfill_randomness;
pub mod pick_winner;
pub mod queries;
pub mod register;
