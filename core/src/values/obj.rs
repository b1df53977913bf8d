//! Fixed-shape records.
//!
//! An [`ObjDef`] is produced by the compiler for each object-construction
//! site and is shared read-only by every [`Obj`] built from it. Objs follow a
//! two-phase lifecycle: allocation yields an uninitialized obj, and
//! [`Obj::init`] pairs it with a def and one value per key. From then on the
//! field set is fixed; only the field values can change.

use core::cell::RefCell;
use core::fmt;

use ecow::EcoString;
use hashbrown::HashMap;

use crate::{
    Rc, ToString, Vec,
    error::{Error, Result},
    values::{
        Value,
        guard::{Comparing, Visiting},
    },
};

/// Ordered, immutable list of field names.
#[derive(Debug, Clone)]
pub struct ObjDef {
    keys: Vec<EcoString>,
    index: HashMap<EcoString, usize>,
}

impl ObjDef {
    /// Build a def from its keys in declaration order. Fails with
    /// `DuplicateField` if a key repeats.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut def = ObjDef {
            keys: Vec::new(),
            index: HashMap::new(),
        };
        for key in keys {
            let key = key.as_ref();
            if def.index.contains_key(key) {
                return Err(Error::DuplicateField(key.to_string()));
            }
            def.index.insert(EcoString::from(key), def.keys.len());
            def.keys.push(EcoString::from(key));
        }
        Ok(def)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.keys.iter().map(EcoString::as_str)
    }

    /// Declaration index of `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }
}

enum State {
    Uninitialized,
    Initialized { def: Rc<ObjDef>, values: Vec<Value> },
}

impl State {
    fn fields(&self) -> Result<(&ObjDef, &[Value])> {
        match self {
            State::Initialized { def, values } => Ok((&**def, values.as_slice())),
            State::Uninitialized => Err(Error::UninitializedObj),
        }
    }
}

/// A record instance. Clones are handles onto the same record.
#[derive(Clone)]
pub struct Obj(Rc<RefCell<State>>);

impl Obj {
    /// Allocate an uninitialized obj.
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(State::Uninitialized)))
    }

    /// Allocate an obj that is initialized from the start.
    pub fn with_def(def: Rc<ObjDef>, values: Vec<Value>) -> Result<Self> {
        let obj = Self::new();
        obj.init(def, values)?;
        Ok(obj)
    }

    /// Fix the field set to `def`'s keys, with `values` in the same order.
    pub fn init(&self, def: Rc<ObjDef>, values: Vec<Value>) -> Result<()> {
        let mut state = self.0.borrow_mut();
        if let State::Initialized { .. } = *state {
            return Err(Error::AlreadyInitialized);
        }
        if def.len() != values.len() {
            return Err(Error::ArityMismatch {
                expected: def.len(),
                actual: values.len(),
            });
        }

        tracing::trace!(fields = def.len(), "obj init");
        *state = State::Initialized { def, values };
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        matches!(*self.0.borrow(), State::Initialized { .. })
    }

    /// The def this obj was initialized with.
    pub fn def(&self) -> Result<Rc<ObjDef>> {
        match &*self.0.borrow() {
            State::Initialized { def, .. } => Ok(Rc::clone(def)),
            State::Uninitialized => Err(Error::UninitializedObj),
        }
    }

    pub fn get_field(&self, key: &str) -> Result<Value> {
        let state = self.0.borrow();
        let (def, values) = state.fields()?;
        def.position(key)
            .map(|n| values[n].clone())
            .ok_or_else(|| Error::no_such_field(key))
    }

    /// Overwrite an existing field. There is no way to add one.
    pub fn put_field(&self, key: &str, value: Value) -> Result<()> {
        let mut state = self.0.borrow_mut();
        let State::Initialized { def, values } = &mut *state else {
            return Err(Error::UninitializedObj);
        };
        let n = def.position(key).ok_or_else(|| Error::no_such_field(key))?;
        values[n] = value;
        Ok(())
    }

    /// True if both handles refer to the same obj.
    pub fn ptr_eq(&self, other: &Obj) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn ensure_init(&self) -> Result<()> {
        self.0.borrow().fields().map(|_| ())
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }

    /// Renders fields in declaration order.
    pub(crate) fn render(&self, seen: &mut Visiting) -> Result<EcoString> {
        let state = self.0.borrow();
        let (def, values) = state.fields()?;
        if values.is_empty() {
            return Ok(EcoString::from("obj {}"));
        }
        if !seen.enter(self.addr()) {
            return Ok(EcoString::from("obj {...}"));
        }

        let result = render_fields(def, values, seen);
        seen.leave();
        result
    }

    /// Same key set and deep-equal values per key, regardless of the order
    /// the two defs declare their keys in.
    pub(crate) fn equals(&self, other: &Value, seen: &mut Comparing) -> Result<bool> {
        let state = self.0.borrow();
        let (def, values) = state.fields()?;
        let Value::Obj(other) = other else {
            return Ok(false);
        };
        if self.ptr_eq(other) || !seen.enter(self.addr(), other.addr()) {
            return Ok(true);
        }

        equals_fields(def, values, other, seen)
    }
}

impl Default for Obj {
    fn default() -> Self {
        Self::new()
    }
}

fn render_fields(def: &ObjDef, values: &[Value], seen: &mut Visiting) -> Result<EcoString> {
    let mut buf = EcoString::from("obj {");
    for (idx, (key, value)) in def.keys().zip(values).enumerate() {
        if idx > 0 {
            buf.push(',');
        }
        buf.push(' ');
        buf.push_str(key);
        buf.push_str(": ");
        buf.push_str(&value.render(seen)?);
    }
    buf.push_str(" }");
    Ok(buf)
}

fn equals_fields(
    def: &ObjDef,
    values: &[Value],
    other: &Obj,
    seen: &mut Comparing,
) -> Result<bool> {
    let state = other.0.borrow();
    let State::Initialized {
        def: other_def,
        values: other_values,
    } = &*state
    else {
        return Ok(false);
    };

    if def.len() != other_def.len() {
        return Ok(false);
    }
    for (key, value) in def.keys().zip(values) {
        let Some(n) = other_def.position(key) else {
            return Ok(false);
        };
        if !value.equals_in(&other_values[n], seen)? {
            return Ok(false);
        }
    }
    Ok(true)
}

impl fmt::Debug for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_initialized() {
            return f.write_str("Obj(<uninitialized>)");
        }
        match self.render(&mut Visiting::default()) {
            Ok(text) => write!(f, "Obj({})", text),
            Err(err) => write!(f, "Obj(<{}>)", err),
        }
    }
}
