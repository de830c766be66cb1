//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` sharing and UI callbacks.

pub mod aliases;

pub use aliases::*;
