#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Runtime value model for the Golem scripting language.
//!
//! Every runtime datum is a [`Value`]. The execution engine combines values
//! exclusively through the operations defined on it (`add`, `equals`,
//! `compare`, `get_field`, ...) and inspects them through [`Type`]. Every
//! failure is a returned [`Error`]; nothing in this crate panics on bad input.
//!
//! ```
//! use golem_core::{Value, NULL};
//!
//! let list = Value::list(vec![Value::str("a"), Value::int(1), NULL]);
//! assert_eq!(list.to_str().unwrap().as_str(), "[ a, 1, null ]");
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that downstream crates see the same types.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, format, rc::Rc, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod pos;
pub mod types;
pub mod values;

pub use error::{Error, ErrorKind, LocatedError, Result};
pub use pos::Pos;
pub use types::Type;
pub use values::{FALSE, List, NULL, Obj, ObjDef, Str, TRUE, Value};
