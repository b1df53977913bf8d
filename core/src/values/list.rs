use core::cell::RefCell;
use core::fmt;

use ecow::EcoString;

use crate::{
    Rc, Vec,
    error::{Error, Result},
    values::{
        Value,
        guard::{Comparing, Visiting},
    },
};

/// Mutable, growable, zero-indexed sequence of values.
///
/// A `List` is a handle: clones share the same underlying elements.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
    pub fn new(values: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(values)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Element at `index`, which must be an Int in `[0, len)`.
    pub fn get(&self, index: &Value) -> Result<Value> {
        let values = self.0.borrow();
        let n = position(index, values.len())?;
        Ok(values[n].clone())
    }

    /// Replace the element at `index`, which must be an Int in `[0, len)`.
    pub fn set(&self, index: &Value, value: Value) -> Result<()> {
        let mut values = self.0.borrow_mut();
        let n = position(index, values.len())?;
        values[n] = value;
        Ok(())
    }

    pub fn append(&self, value: Value) {
        let mut values = self.0.borrow_mut();
        values.push(value);
        tracing::trace!(len = values.len(), "list append");
    }

    /// Snapshot of the current elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// True if both handles refer to the same list.
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }

    pub(crate) fn render(&self, seen: &mut Visiting) -> Result<EcoString> {
        let values = self.0.borrow();
        if values.is_empty() {
            return Ok(EcoString::from("[]"));
        }
        if !seen.enter(self.addr()) {
            return Ok(EcoString::from("[...]"));
        }

        let result = render_elements(&values, seen);
        seen.leave();
        result
    }

    /// Element-wise deep equality. A list equals itself, and a pair of lists
    /// reached before in the same walk is taken as equal.
    pub(crate) fn equals(&self, other: &List, seen: &mut Comparing) -> Result<bool> {
        if self.ptr_eq(other) || !seen.enter(self.addr(), other.addr()) {
            return Ok(true);
        }

        equals_elements(&self.0.borrow(), &other.0.borrow(), seen)
    }
}

fn position(index: &Value, len: usize) -> Result<usize> {
    let Value::Int(index) = index else {
        return Err(Error::type_mismatch("Expected 'Int'"));
    };

    usize::try_from(*index)
        .ok()
        .filter(|&n| n < len)
        .ok_or(Error::IndexOutOfBounds { index: *index, len })
}

fn render_elements(values: &[Value], seen: &mut Visiting) -> Result<EcoString> {
    let mut buf = EcoString::from("[");
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            buf.push(',');
        }
        buf.push(' ');
        buf.push_str(&value.render(seen)?);
    }
    buf.push_str(" ]");
    Ok(buf)
}

fn equals_elements(lhs: &[Value], rhs: &[Value], seen: &mut Comparing) -> Result<bool> {
    if lhs.len() != rhs.len() {
        return Ok(false);
    }
    for (a, b) in lhs.iter().zip(rhs) {
        if !a.equals_in(b, seen)? {
            return Ok(false);
        }
    }
    Ok(true)
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(&mut Visiting::default()) {
            Ok(text) => write!(f, "List({})", text),
            Err(err) => write!(f, "List(<{}>)", err),
        }
    }
}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
