//! Type aliases for commonly used complex types.
//!
//! The editing core is single-threaded: the scene, the history and the
//! interaction controllers all live on the UI event thread. Sharing between
//! the controllers and the document therefore uses `Rc<RefCell<T>>`, never a
//! lock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use laserkit_core::types::*;
//!
//! // Instead of: Rc<RefCell<EditorState>>
//! let state: Shared<EditorState> = shared(EditorState::default());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when you need to share mutable state within the UI thread, e.g. an
/// editor document handed to several gesture controllers.
///
/// # Example
/// ```rust,ignore
/// let state: Shared<EditorState> = Shared::new(RefCell::new(EditorState::default()));
/// state.borrow_mut().undo()?;
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// A UI callback receiving a borrowed payload.
///
/// Not `Send`: observers run on the thread that owns the emitter.
pub type UiDataCallback<T> = Box<dyn Fn(&T)>;

/// Create a new `Shared<T>` from a value.
///
/// # Example
/// ```rust,ignore
/// let state = shared(EditorState::default());
/// ```
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
