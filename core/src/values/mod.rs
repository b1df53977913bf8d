mod guard;
pub mod list;
mod number;
pub mod obj;
pub mod string;
pub mod value;

pub use list::List;
pub use obj::{Obj, ObjDef};
pub use string::Str;
pub use value::{FALSE, NULL, TRUE, Value};

#[cfg(test)]
mod number_test;
