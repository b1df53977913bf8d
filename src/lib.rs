//! Golem - runtime values for an embeddable scripting language
//!
//! # Overview
//!
//! Every datum a Golem program manipulates is a [`Value`]: `null`, a Bool, an
//! Int, a Float, a Str, a mutable List, or a fixed-shape record (Obj). The
//! execution engine combines values only through the operations on
//! [`Value`], and every failure comes back as an [`Error`] the engine can
//! branch on by [`ErrorKind`].
//!
//! # Quick Start
//!
//! ```
//! use golem::{ObjDef, Value, NULL};
//! use std::rc::Rc;
//!
//! let def = Rc::new(ObjDef::new(["name", "items"]).unwrap());
//! let items = Value::list(vec![Value::int(1)]);
//! let obj = Value::obj(def, vec![Value::str("cart"), items.clone()]).unwrap();
//!
//! // Lists are shared: the obj sees the append.
//! items.append(Value::float(2.5)).unwrap();
//! assert_eq!(
//!     obj.to_str().unwrap().as_str(),
//!     "obj { name: cart, items: [ 1, 2.5 ] }"
//! );
//!
//! // Any value concatenates onto a Str.
//! let s = Value::str("total: ").add(&Value::int(3)).unwrap();
//! assert_eq!(s, Value::str("total: 3"));
//!
//! assert!(NULL.add(&Value::int(1)).is_err());
//! ```
//!
//! # Error reporting
//!
//! Attach a source position with [`Error::at`] and render the result against
//! the script text:
//!
//! ```
//! use golem::{NULL, Pos, RenderConfig, Value, render_error_to};
//!
//! let source = "null + 1";
//! let err = NULL.add(&Value::int(1)).unwrap_err().at(Pos::new(1, 6));
//!
//! let mut out = Vec::new();
//! let config = RenderConfig { color: false, ..Default::default() };
//! render_error_to(&err, source, &mut out, &config).unwrap();
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from golem_core
pub use golem_core::{
    Error, ErrorKind, FALSE, List, LocatedError, NULL, Obj, ObjDef, Pos, Result, Str, TRUE, Type,
    Value,
};
pub use golem_core::{error, pos, types, values};
