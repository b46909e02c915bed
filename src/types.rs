use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// Type tag carried by every declared option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Integer,
    String,
    Boolean,
}

/// A value held by an option, tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i32),
    String(String),
    Boolean(bool),
}

impl OptionValue {
    /// The kind tag for this value
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Integer(_) => OptionKind::Integer,
            OptionValue::String(_) => OptionKind::String,
            OptionValue::Boolean(_) => OptionKind::Boolean,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(v) => write!(f, "{}", v),
            OptionValue::String(v) => write!(f, "{}", v),
            OptionValue::Boolean(v) => write!(f, "{}", v),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for String {}
    impl Sealed for bool {}
}

/// Rust types an option can be declared with
pub trait OptionType: sealed::Sealed + Sized {
    const KIND: OptionKind;

    /// Wrap a typed default
    fn into_value(self) -> OptionValue;

    /// Borrow the typed payload, if `value` has this type
    fn from_value(value: &OptionValue) -> Option<&Self>;
}

impl OptionType for i32 {
    const KIND: OptionKind = OptionKind::Integer;

    fn into_value(self) -> OptionValue {
        OptionValue::Integer(self)
    }

    fn from_value(value: &OptionValue) -> Option<&Self> {
        match value {
            OptionValue::Integer(v) => Some(v),
            _ => None,
        }
    }
}

impl OptionType for String {
    const KIND: OptionKind = OptionKind::String;

    fn into_value(self) -> OptionValue {
        OptionValue::String(self)
    }

    fn from_value(value: &OptionValue) -> Option<&Self> {
        match value {
            OptionValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl OptionType for bool {
    const KIND: OptionKind = OptionKind::Boolean;

    fn into_value(self) -> OptionValue {
        OptionValue::Boolean(self)
    }

    fn from_value(value: &OptionValue) -> Option<&Self> {
        match value {
            OptionValue::Boolean(v) => Some(v),
            _ => None,
        }
    }
}

/// Opaque reference to a declared option, read back from a `Parsed` snapshot
pub struct Handle<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Position of the option in declaration order
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("index", &self.index).finish()
    }
}
