//! Message parts and prefixes
//!
//! A [`Message`] is an ordered list of [`Part`]s joined with single spaces,
//! plus the prefix segments pushed by delegate loggers. Parts are normalized
//! to text, never rejected: numbers and booleans render literally, `None`
//! renders as `null`, structured values render as compact JSON.

use serde::Serialize;
use std::fmt;

/// One value of a log call
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Json(serde_json::Value),
}

impl Part {
    /// Any serializable value, rendered as JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(serde_json::Value::String(s)) => Part::Str(s),
            Ok(value) => Part::Json(value),
            Err(e) => Part::Str(format!("<unserializable: {}>", e)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Str(s) => f.write_str(s),
            Part::Int(i) => write!(f, "{}", i),
            Part::UInt(u) => write!(f, "{}", u),
            Part::Float(fl) => write!(f, "{}", fl),
            Part::Bool(b) => write!(f, "{}", b),
            Part::Null => f.write_str("null"),
            Part::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<String> for Part {
    fn from(s: String) -> Self {
        Part::Str(s)
    }
}

impl From<&str> for Part {
    fn from(s: &str) -> Self {
        Part::Str(s.to_string())
    }
}

impl From<&String> for Part {
    fn from(s: &String) -> Self {
        Part::Str(s.clone())
    }
}

impl From<char> for Part {
    fn from(c: char) -> Self {
        Part::Str(c.to_string())
    }
}

macro_rules! impl_part_from {
    ($variant:ident, $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Part {
                fn from(v: $t) -> Self {
                    Part::$variant(v as $target)
                }
            }
        )+
    };
}

impl_part_from!(Int, i64: i8, i16, i32, i64, isize);
impl_part_from!(UInt, u64: u8, u16, u32, u64, usize);
impl_part_from!(Float, f64: f32, f64);

impl From<bool> for Part {
    fn from(b: bool) -> Self {
        Part::Bool(b)
    }
}

impl From<serde_json::Value> for Part {
    fn from(v: serde_json::Value) -> Self {
        Part::Json(v)
    }
}

impl<T: Into<Part>> From<Option<T>> for Part {
    fn from(v: Option<T>) -> Self {
        v.map_or(Part::Null, Into::into)
    }
}

/// Colored text segment placed in front of the level label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub text: String,
    pub color: String,
}

impl Prefix {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// Parts of one log call together with any delegate prefixes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    prefixes: Vec<Prefix>,
    parts: Vec<Part>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            prefixes: Vec::new(),
            parts,
        }
    }

    #[must_use]
    pub fn part(mut self, part: impl Into<Part>) -> Self {
        self.parts.push(part.into());
        self
    }

    pub fn push(&mut self, part: impl Into<Part>) {
        self.parts.push(part.into());
    }

    /// Add a prefix after the ones already present
    pub fn push_prefix(&mut self, prefix: Prefix) {
        self.prefixes.push(prefix);
    }

    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Parts joined with single spaces
    pub fn body(&self) -> String {
        let mut body = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                body.push(' ');
            }
            body.push_str(&part.to_string());
        }
        body
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::from_parts(vec![Part::from(s)])
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::from_parts(vec![Part::Str(s)])
    }
}

impl From<&String> for Message {
    fn from(s: &String) -> Self {
        Message::from_parts(vec![Part::from(s)])
    }
}

impl From<Part> for Message {
    fn from(part: Part) -> Self {
        Message::from_parts(vec![part])
    }
}

impl From<Vec<Part>> for Message {
    fn from(parts: Vec<Part>) -> Self {
        Message::from_parts(parts)
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Message::from(args.to_string())
    }
}

impl<P: Into<Part>> FromIterator<P> for Message {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Message::from_parts(iter.into_iter().map(Into::into).collect())
    }
}
