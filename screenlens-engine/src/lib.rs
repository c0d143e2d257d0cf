pub mod controller;
pub mod session;
pub mod toggle;
pub mod traits;
