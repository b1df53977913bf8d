//! The operation contract shared by every runtime value.
//!
//! Binary operators dispatch on the left operand's variant, then match on the
//! right operand to decide between success, coercion and failure. One
//! coercion applies to every variant alike: `x + s` with a Str `s` renders
//! `x` and concatenates.

use core::cmp::Ordering;
use core::fmt;

use ecow::{EcoString, eco_format};

use crate::{
    Rc, Vec,
    error::{Error, Result},
    types::Type,
    values::{
        guard::{Comparing, Visiting},
        list::List,
        number,
        obj::{Obj, ObjDef},
        string::{Str, strcat},
    },
};

/// A runtime value.
///
/// Cloning is cheap. Scalars and `Str` are copied by value; `List` and `Obj`
/// clones are new handles onto the same container, so a mutation through one
/// handle is observed through every other.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Str),
    List(List),
    Obj(Obj),
}

/// The `null` singleton.
pub const NULL: Value = Value::Null;
pub const TRUE: Value = Value::Bool(true);
pub const FALSE: Value = Value::Bool(false);

static_assertions::assert_not_impl_any!(Value: Send, Sync);
static_assertions::assert_impl_all!(Value: Clone, fmt::Debug);

impl Value {
    // ============================================================================
    // Constructors
    // ============================================================================

    pub fn bool(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    pub fn float(value: f64) -> Self {
        Value::Float(value)
    }

    pub fn str(value: impl Into<Str>) -> Self {
        Value::Str(value.into())
    }

    pub fn list(values: Vec<Value>) -> Self {
        Value::List(List::new(values))
    }

    /// Allocate an obj with no fields. It must be initialized with
    /// [`Obj::init`] before any other operation succeeds.
    pub fn new_obj() -> Self {
        Value::Obj(Obj::new())
    }

    /// Allocate and initialize an obj in one step.
    pub fn obj(def: Rc<ObjDef>, values: Vec<Value>) -> Result<Self> {
        Obj::with_def(def, values).map(Value::Obj)
    }

    // ============================================================================
    // Extractors
    // ============================================================================

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&Str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<&Obj> {
        match self {
            Value::Obj(obj) => Some(obj),
            _ => None,
        }
    }

    // ============================================================================
    // Shared contract
    // ============================================================================

    /// Runtime type of this value. Fails only for an uninitialized obj.
    pub fn type_of(&self) -> Result<Type> {
        Ok(match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Str(_) => Type::Str,
            Value::List(_) => Type::List,
            Value::Obj(obj) => {
                obj.ensure_init()?;
                Type::Obj
            }
        })
    }

    /// Canonical rendering.
    ///
    /// Lists render as `[ a, b ]` and objs as `obj { k: v }`. A container
    /// that is reached again while it is being rendered shows as `[...]` or
    /// `obj {...}`. Fails with the first failure of any nested value.
    pub fn to_str(&self) -> Result<Str> {
        self.render(&mut Visiting::default()).map(Str::from)
    }

    pub(crate) fn render(&self, seen: &mut Visiting) -> Result<EcoString> {
        match self {
            Value::Null => Ok(EcoString::from("null")),
            Value::Bool(b) => Ok(EcoString::from(if *b { "true" } else { "false" })),
            Value::Int(n) => Ok(eco_format!("{}", n)),
            Value::Float(f) => Ok(number::format_float(*f)),
            Value::Str(s) => Ok(s.as_eco().clone()),
            Value::List(list) => list.render(seen),
            Value::Obj(obj) => obj.render(seen),
        }
    }

    /// Value equality.
    ///
    /// Lists and objs compare structurally, Int and Float compare
    /// numerically across the two kinds, and values of unrelated kinds are
    /// simply unequal. Fails only when the receiver (or a nested receiver) is
    /// an uninitialized obj.
    pub fn equals(&self, other: &Value) -> Result<bool> {
        self.equals_in(other, &mut Comparing::default())
    }

    pub(crate) fn equals_in(&self, other: &Value, seen: &mut Comparing) -> Result<bool> {
        match (self, other) {
            (Value::Null, Value::Null) => Ok(true),
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::Int(_) | Value::Float(_), _) => Ok(number::equals(self, other)),
            (Value::Str(a), Value::Str(b)) => Ok(a == b),
            (Value::List(a), Value::List(b)) => a.equals(b, seen),
            (Value::Obj(obj), _) => obj.equals(other, seen),
            (Value::Null | Value::Bool(_) | Value::Str(_) | Value::List(_), _) => Ok(false),
        }
    }

    /// Three-way ordering. Defined for numbers and strings only.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match self {
            Value::Null => Err(Error::NullValue),
            Value::Int(_) | Value::Float(_) => number::compare(self, other),
            Value::Str(s) => s.compare(other),
            Value::Bool(_) | Value::List(_) => Err(Error::ExpectedComparable),
            Value::Obj(obj) => {
                obj.ensure_init()?;
                Err(Error::ExpectedComparable)
            }
        }
    }

    /// The `+` operator.
    pub fn add(&self, other: &Value) -> Result<Value> {
        if let Value::Str(_) = other {
            return strcat(&[self, other]).map(Value::Str);
        }

        match self {
            Value::Null => Err(Error::NullValue),
            Value::Int(_) | Value::Float(_) => number::add(self, other),
            Value::Str(_) => strcat(&[self, other]).map(Value::Str),
            Value::Bool(_) | Value::List(_) => Err(Error::ExpectedNumber),
            Value::Obj(obj) => {
                obj.ensure_init()?;
                Err(Error::ExpectedNumber)
            }
        }
    }

    pub fn sub(&self, other: &Value) -> Result<Value> {
        self.expect_number()?;
        number::sub(self, other)
    }

    pub fn mul(&self, other: &Value) -> Result<Value> {
        self.expect_number()?;
        number::mul(self, other)
    }

    pub fn div(&self, other: &Value) -> Result<Value> {
        self.expect_number()?;
        number::div(self, other)
    }

    /// Unary `-`.
    pub fn negate(&self) -> Result<Value> {
        self.expect_number()?;
        number::negate(self)
    }

    /// Unary `!`. Defined for Bool only.
    pub fn not(&self) -> Result<Value> {
        match self {
            Value::Bool(b) => Ok(Value::Bool(!*b)),
            Value::Obj(obj) => {
                obj.ensure_init()?;
                Err(Error::ExpectedBoolean)
            }
            _ => Err(Error::ExpectedBoolean),
        }
    }

    fn expect_number(&self) -> Result<()> {
        match self {
            Value::Int(_) | Value::Float(_) => Ok(()),
            Value::Null => Err(Error::NullValue),
            Value::Obj(obj) => {
                obj.ensure_init()?;
                Err(Error::ExpectedNumber)
            }
            Value::Bool(_) | Value::Str(_) | Value::List(_) => Err(Error::ExpectedNumber),
        }
    }

    // ============================================================================
    // Indexing (List)
    // ============================================================================

    pub fn get(&self, index: &Value) -> Result<Value> {
        self.expect_list()?.get(index)
    }

    pub fn set(&self, index: &Value, value: Value) -> Result<()> {
        self.expect_list()?.set(index, value)
    }

    pub fn append(&self, value: Value) -> Result<()> {
        self.expect_list()?.append(value);
        Ok(())
    }

    /// Number of elements, as an Int.
    pub fn len(&self) -> Result<Value> {
        let len = self.expect_list()?.len();
        Ok(Value::Int(len as i64))
    }

    fn expect_list(&self) -> Result<&List> {
        match self {
            Value::List(list) => Ok(list),
            Value::Obj(obj) => {
                obj.ensure_init()?;
                Err(Error::type_mismatch("Expected List Type"))
            }
            _ => Err(Error::type_mismatch("Expected List Type")),
        }
    }

    // ============================================================================
    // Field access (Obj)
    // ============================================================================

    pub fn get_field(&self, key: &str) -> Result<Value> {
        match self {
            Value::Obj(obj) => obj.get_field(key),
            _ => Err(Error::ExpectedObj),
        }
    }

    pub fn put_field(&self, key: &str, value: Value) -> Result<()> {
        match self {
            Value::Obj(obj) => obj.put_field(key, value),
            _ => Err(Error::ExpectedObj),
        }
    }
}

/// Structural equality through [`Value::equals`]; an uninitialized obj is
/// unequal to everything, itself included.
///
/// This drops the `UninitializedObj` failure. Engine code must call
/// [`Value::equals`] so the failure reaches the script.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(&s.as_str()).finish(),
            Value::List(list) => fmt::Debug::fmt(list, f),
            Value::Obj(obj) => fmt::Debug::fmt(obj, f),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        NULL
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Str::from(value))
    }
}

impl From<Str> for Value {
    fn from(value: Str) -> Self {
        Value::Str(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<Obj> for Value {
    fn from(value: Obj) -> Self {
        Value::Obj(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::list(values)
    }
}

/// `Less`, `Equal` and `Greater` become the Ints `-1`, `0` and `1`.
impl From<Ordering> for Value {
    fn from(ordering: Ordering) -> Self {
        Value::Int(ordering as i64)
    }
}
