//! Typed, cardinality-bounded property accessors.
//!
//! A [`Property`] wraps one attribute slot on an owning entity. All
//! mutation funnels through [`Property::set`] / [`Property::add`] /
//! [`Property::remove`], so the cardinality bounds and the validation
//! rules hold after every operation. A rejected mutation leaves prior
//! state unchanged.
//!
//! Literal-valued slots ([`IntProperty`], [`TextProperty`],
//! [`UriProperty`]) additionally accept dynamically typed input through
//! [`Property::set_literal`], coercing per the declared kind.

use core::fmt;

use crate::error::{Error, Result};
use crate::uri::Uri;

/// Upper cardinality bound of a property slot or container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpperBound {
    /// At most one value.
    One,
    /// No upper limit.
    Unbounded,
}

/// The `[lower, upper]` count constraint on a property's values or a
/// container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cardinality {
    lower: usize,
    upper: UpperBound,
}

impl Cardinality {
    /// Exactly one value (`1..1`).
    #[must_use]
    pub const fn required() -> Self {
        Cardinality {
            lower: 1,
            upper: UpperBound::One,
        }
    }

    /// Zero or one value (`0..1`).
    #[must_use]
    pub const fn optional() -> Self {
        Cardinality {
            lower: 0,
            upper: UpperBound::One,
        }
    }

    /// At least `lower` values, no upper bound (`lower..*`).
    #[must_use]
    pub const fn many(lower: usize) -> Self {
        Cardinality {
            lower,
            upper: UpperBound::Unbounded,
        }
    }

    /// The lower bound.
    #[must_use]
    pub const fn lower(&self) -> usize {
        self.lower
    }

    /// The upper bound.
    #[must_use]
    pub const fn upper(&self) -> UpperBound {
        self.upper
    }

    /// True when a slot holding `count` values cannot accept another.
    #[must_use]
    pub const fn at_upper(&self, count: usize) -> bool {
        match self.upper {
            UpperBound::One => count >= 1,
            UpperBound::Unbounded => false,
        }
    }
}

/// A pure pass/fail predicate from the external validation-rule catalog.
///
/// The core invokes rules on every proposed value but does not define
/// their business meaning.
pub struct ValidationRule<T> {
    /// Rule identifier reported in [`Error::Validation`].
    pub id: &'static str,
    /// The predicate itself.
    pub check: fn(&T) -> bool,
}

impl<T> Clone for ValidationRule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ValidationRule<T> {}

impl<T> fmt::Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule").field("id", &self.id).finish()
    }
}

/// A typed attribute slot on an owning entity.
///
/// Holds zero or more values of `T` in insertion order, bounded by a
/// [`Cardinality`], with every stored value satisfying every attached
/// [`ValidationRule`].
#[derive(Debug, Clone)]
pub struct Property<T> {
    predicate: &'static str,
    cardinality: Cardinality,
    rules: Vec<ValidationRule<T>>,
    values: Vec<T>,
    default: Option<T>,
}

impl<T> Property<T> {
    /// Creates a slot, optionally seeded with an initial value.
    ///
    /// The seed is checked like any other write: it must pass every
    /// attached rule, and a required slot cannot be built empty, so a
    /// freshly constructed slot already satisfies its invariants.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when a rule rejects the seed;
    /// [`Error::Cardinality`] when the seeded count is below the lower
    /// bound.
    pub fn new(
        predicate: &'static str,
        cardinality: Cardinality,
        rules: Vec<ValidationRule<T>>,
        initial: Option<T>,
    ) -> Result<Self> {
        let slot = Self::seeded(predicate, cardinality, rules, initial);
        if let Some(v) = slot.values.first() {
            slot.check_rules(v)?;
        }
        if slot.values.len() < cardinality.lower() {
            return Err(Error::Cardinality {
                predicate,
                detail: format!(
                    "seeded with {} value(s), lower bound is {}",
                    slot.values.len(),
                    cardinality.lower()
                ),
            });
        }
        Ok(slot)
    }

    /// Constructor-default seeding for entity constructors. Every call
    /// site passes an empty rule set and seeds its required slots, so the
    /// checks in [`Property::new`] are vacuous here; external
    /// construction goes through [`Property::new`].
    pub(crate) fn seeded(
        predicate: &'static str,
        cardinality: Cardinality,
        rules: Vec<ValidationRule<T>>,
        initial: Option<T>,
    ) -> Self {
        Property {
            predicate,
            cardinality,
            rules,
            values: initial.into_iter().collect(),
            default: None,
        }
    }

    /// Replaces the configured default returned by [`Property::get`] when
    /// the slot is unset and optional.
    #[must_use]
    pub fn with_default(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }

    /// The schema identifier of this attribute slot.
    #[must_use]
    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// The count constraint on this slot.
    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Scalar view: the stored value, else the configured default when
    /// the slot is unset and its lower bound is zero.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match self.values.first() {
            Some(v) => Some(v),
            None if self.cardinality.lower == 0 => self.default.as_ref(),
            None => None,
        }
    }

    /// All stored values, in insertion order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no value is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Scalar overwrite. A second `set` replaces the stored value, it
    /// never appends.
    ///
    /// # Errors
    ///
    /// [`Error::Cardinality`] when the slot is multi-valued (mutate those
    /// through [`Property::add`] / [`Property::remove`]);
    /// [`Error::Validation`] when a rule rejects `value`. Prior state is
    /// unchanged on failure.
    pub fn set(&mut self, value: T) -> Result<()> {
        if self.cardinality.upper != UpperBound::One {
            return Err(Error::Cardinality {
                predicate: self.predicate,
                detail: "scalar overwrite on a multi-valued slot".to_string(),
            });
        }
        self.check_rules(&value)?;
        self.values.clear();
        self.values.push(value);
        Ok(())
    }

    /// Appends a value.
    ///
    /// # Errors
    ///
    /// [`Error::Cardinality`] when the slot is already at its upper
    /// bound; [`Error::Validation`] when a rule rejects `value`. Prior
    /// state is unchanged on failure.
    pub fn add(&mut self, value: T) -> Result<()> {
        if self.cardinality.at_upper(self.values.len()) {
            return Err(Error::Cardinality {
                predicate: self.predicate,
                detail: format!("already holds {} value(s), at upper bound", self.values.len()),
            });
        }
        self.check_rules(&value)?;
        self.values.push(value);
        Ok(())
    }

    /// Detaches and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `index` is out of range;
    /// [`Error::Cardinality`] when removal would drop the count below the
    /// lower bound.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.values.len() {
            return Err(Error::NotFound {
                uri: format!("{}[{index}]", self.predicate),
            });
        }
        if self.values.len() <= self.cardinality.lower {
            return Err(Error::Cardinality {
                predicate: self.predicate,
                detail: format!("removal would drop below lower bound {}", self.cardinality.lower),
            });
        }
        Ok(self.values.remove(index))
    }

    fn check_rules(&self, value: &T) -> Result<()> {
        for rule in &self.rules {
            if !(rule.check)(value) {
                return Err(Error::Validation {
                    predicate: self.predicate,
                    rule: rule.id,
                });
            }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Property<T> {
    fn eq(&self, other: &Self) -> bool {
        // Rules are fn pointers from the external catalog; two slots are
        // equal when they describe the same attribute with the same values.
        self.predicate == other.predicate
            && self.cardinality == other.cardinality
            && self.values == other.values
            && self.default == other.default
    }
}

/// A dynamically typed literal, as read from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// An integer literal.
    Int(i64),
    /// A text literal.
    Text(String),
    /// A URI literal.
    Uri(Uri),
}

impl Literal {
    /// Kind name used in [`Error::Type`] reports.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "integer",
            Literal::Text(_) => "text",
            Literal::Uri(_) => "URI",
        }
    }
}

/// A value kind a literal slot can be declared over.
pub trait LiteralValue: Sized {
    /// Kind name used in [`Error::Type`] reports.
    const KIND: &'static str;

    /// Coerces a dynamically typed literal into this kind.
    ///
    /// # Errors
    ///
    /// [`Error::Type`] when the literal is not coercible.
    fn from_literal(literal: Literal) -> Result<Self>;
}

impl LiteralValue for i64 {
    const KIND: &'static str = "integer";

    fn from_literal(literal: Literal) -> Result<Self> {
        match literal {
            Literal::Int(i) => Ok(i),
            Literal::Text(s) => s.trim().parse().map_err(|_| Error::Type {
                expected: Self::KIND.to_string(),
                found: format!("non-numeric text {s:?}"),
            }),
            Literal::Uri(_) => Err(Error::Type {
                expected: Self::KIND.to_string(),
                found: "URI".to_string(),
            }),
        }
    }
}

impl LiteralValue for String {
    const KIND: &'static str = "text";

    fn from_literal(literal: Literal) -> Result<Self> {
        match literal {
            Literal::Int(i) => Ok(i.to_string()),
            Literal::Text(s) => Ok(s),
            Literal::Uri(u) => Ok(u.as_str().to_string()),
        }
    }
}

impl LiteralValue for Uri {
    const KIND: &'static str = "URI";

    fn from_literal(literal: Literal) -> Result<Self> {
        match literal {
            Literal::Uri(u) => Ok(u),
            Literal::Text(s) => Ok(Uri::new(s)),
            Literal::Int(i) => Err(Error::Type {
                expected: Self::KIND.to_string(),
                found: format!("integer {i}"),
            }),
        }
    }
}

impl<T: LiteralValue> Property<T> {
    /// Coerces `literal` to this slot's declared kind, then [`Property::set`]s it.
    ///
    /// # Errors
    ///
    /// [`Error::Type`] on non-coercible input, otherwise as [`Property::set`].
    pub fn set_literal(&mut self, literal: Literal) -> Result<()> {
        self.set(T::from_literal(literal)?)
    }

    /// Coerces `literal` to this slot's declared kind, then [`Property::add`]s it.
    ///
    /// # Errors
    ///
    /// [`Error::Type`] on non-coercible input, otherwise as [`Property::add`].
    pub fn add_literal(&mut self, literal: Literal) -> Result<()> {
        self.add(T::from_literal(literal)?)
    }
}

/// Integer-valued attribute slot.
pub type IntProperty = Property<i64>;
/// Text-valued attribute slot.
pub type TextProperty = Property<String>;
/// URI-valued attribute slot.
pub type UriProperty = Property<Uri>;
