pub mod flags;
pub mod grant;
pub mod request;

// Keep the public surface small and intentional.
pub use flags::*;
pub use grant::*;
pub use request::*;
