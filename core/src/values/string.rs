use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

use ecow::EcoString;

use crate::{
    String,
    error::{Error, Result},
    values::Value,
};

/// Immutable string value.
///
/// Backed by a reference-counted `EcoString`, so clones share storage while
/// keeping value semantics: a Str is never mutated after construction.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Str(EcoString);

impl Str {
    pub fn new(text: &str) -> Self {
        Self(EcoString::from(text))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn as_eco(&self) -> &EcoString {
        &self.0
    }

    /// Lexicographic ordering against another Str.
    pub(crate) fn compare(&self, other: &Value) -> Result<Ordering> {
        match other {
            Value::Str(other) => Ok(self.as_str().cmp(other.as_str())),
            _ => Err(Error::ExpectedComparable),
        }
    }
}

/// Render each value and concatenate the renderings.
pub(crate) fn strcat(values: &[&Value]) -> Result<Str> {
    let mut buf = EcoString::new();
    for value in values {
        buf.push_str(value.to_str()?.as_str());
    }
    Ok(Str(buf))
}

impl Deref for Str {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl From<&str> for Str {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Str {
    fn from(text: String) -> Self {
        Self(EcoString::from(text))
    }
}

impl From<EcoString> for Str {
    fn from(text: EcoString) -> Self {
        Self(text)
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
