//! Feature values, domains and descriptors.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::encoding::EncodingMode;
use super::error::Error;

/// A raw feature value as returned by an extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Bool(bool),
    Category(Cow<'static, str>),
}

impl Value {
    pub fn category(label: impl Into<Cow<'static, str>>) -> Self {
        Value::Category(label.into())
    }

    /// The value as a single output scalar, or `None` for categories.
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            Value::Int(v) => Some(*v as f32),
            Value::Real(v) => Some(*v as f32),
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Category(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Real(_) => "real",
            Value::Bool(_) => "boolean",
            Value::Category(_) => "categorical",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Value::Category(Cow::Borrowed(v))
    }
}

/// Scalar flavor of a numeric feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integer,
    Real,
    Boolean,
}

impl NumericKind {
    pub fn name(&self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Real => "real",
            NumericKind::Boolean => "boolean",
        }
    }
}

/// A finite, ordered, duplicate-free set of legal category labels.
///
/// The order is the encoding order: a label's position is its one-hot slot
/// and its index encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoricalDomain {
    values: Vec<Cow<'static, str>>,
}

impl CategoricalDomain {
    /// Builds a domain, rejecting repeated labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCategory`] naming the first repeated label.
    pub fn new<I, S>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let mut collected: Vec<Cow<'static, str>> = Vec::new();
        for value in values {
            let value = value.into();
            if collected.contains(&value) {
                return Err(Error::DuplicateCategory(value.into_owned()));
            }
            collected.push(value);
        }
        Ok(Self { values: collected })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(|v| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.as_ref())
    }
}

impl fmt::Display for CategoricalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(v)?;
        }
        f.write_str("]")
    }
}

/// The value domain of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    Numeric(NumericKind),
    Categorical(CategoricalDomain),
}

impl Domain {
    /// Number of output columns this domain occupies under `mode`.
    pub fn width(&self, mode: EncodingMode) -> usize {
        match (self, mode) {
            (Domain::Categorical(domain), EncodingMode::OneHot) => domain.len(),
            _ => 1,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Domain::Numeric(kind) => kind.name(),
            Domain::Categorical(_) => "categorical",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Numeric(kind) => f.write_str(kind.name()),
            Domain::Categorical(domain) => write!(f, "{} {}", domain.len(), domain),
        }
    }
}

/// Extracts a feature value from item `index` of a molecule.
pub type Extractor<M> = Arc<dyn Fn(&M, usize) -> Value + Send + Sync>;

/// A named feature: how to read it and what values it can take.
pub struct FeatureDescriptor<M: ?Sized> {
    name: Cow<'static, str>,
    domain: Domain,
    extract: Extractor<M>,
}

impl<M: ?Sized> FeatureDescriptor<M> {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, domain: Domain, extract: F) -> Self
    where
        F: Fn(&M, usize) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            domain,
            extract: Arc::new(extract),
        }
    }

    pub fn numeric<F>(name: impl Into<Cow<'static, str>>, kind: NumericKind, extract: F) -> Self
    where
        F: Fn(&M, usize) -> Value + Send + Sync + 'static,
    {
        Self::new(name, Domain::Numeric(kind), extract)
    }

    pub fn categorical<F>(
        name: impl Into<Cow<'static, str>>,
        domain: CategoricalDomain,
        extract: F,
    ) -> Self
    where
        F: Fn(&M, usize) -> Value + Send + Sync + 'static,
    {
        Self::new(name, Domain::Categorical(domain), extract)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    #[inline]
    pub fn extract(&self, molecule: &M, index: usize) -> Value {
        (self.extract)(molecule, index)
    }

    #[inline]
    pub fn width(&self, mode: EncodingMode) -> usize {
        self.domain.width(mode)
    }
}

impl<M: ?Sized> Clone for FeatureDescriptor<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            domain: self.domain.clone(),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<M: ?Sized> fmt::Debug for FeatureDescriptor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureDescriptor")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}
