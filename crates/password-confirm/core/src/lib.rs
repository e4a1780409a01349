//! Password Confirmation Core
//!
//! Browser-free logic for a "confirm your new password" form.
//! Used by the WASM bindings for live feedback and by server code that
//! re-checks the submitted form with the same rules.
//!
//! The [`FormGuard`] never touches a DOM directly. It reads field values and
//! applies feedback through a [`FormSurface`], so the same guard drives real
//! page elements in the browser and plain fakes in tests.

pub mod config;
pub mod error;
pub mod feedback;
pub mod form;
pub mod guard;
pub mod messages;

pub use config::*;
pub use error::*;
pub use feedback::*;
pub use form::*;
pub use guard::*;
pub use messages::*;
