use core::fmt;

/// Runtime type tag of a [`Value`](crate::Value).
///
/// Returned by `Value::type_of` so the engine can branch on the kind of a
/// value without unpacking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Obj,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Null => "Null",
            Type::Bool => "Bool",
            Type::Int => "Int",
            Type::Float => "Float",
            Type::Str => "Str",
            Type::List => "List",
            Type::Obj => "Obj",
        }
    }

    /// Int and Float.
    pub fn is_number(self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
