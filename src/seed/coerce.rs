//! Mapping of optional dataset scalars onto the store's nullable columns.
//!
//! Every optional field goes through [`coerce`]: an absent value becomes a
//! null [`Nullable`], a present value is converted by its [`StoreScalar`]
//! impl and marked valid. Numbers travel as an arbitrary-precision
//! `BigDecimal` built from the shortest decimal string of the `f64`, so the
//! stored numeric is the value written in the seed document rather than its
//! binary expansion. Only NaN and the infinities have no representation.

use std::marker::PhantomData;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::model::{StoreEnum, UnknownTag};
use crate::seed::error::CoercionError;

/// A nullable column value: either null or a valid value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nullable<T>(Option<T>);

impl<T> Nullable<T> {
    pub fn null() -> Self {
        Self(None)
    }

    pub fn present(value: T) -> Self {
        Self(Some(value))
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

/// A dataset scalar kind with a store representation.
pub trait StoreScalar {
    type Repr;

    fn into_repr(self) -> Result<Self::Repr, CoercionError>;
}

impl StoreScalar for String {
    type Repr = String;

    fn into_repr(self) -> Result<String, CoercionError> {
        Ok(self)
    }
}

impl StoreScalar for i32 {
    type Repr = i32;

    fn into_repr(self) -> Result<i32, CoercionError> {
        Ok(self)
    }
}

impl StoreScalar for bool {
    type Repr = bool;

    fn into_repr(self) -> Result<bool, CoercionError> {
        Ok(self)
    }
}

impl StoreScalar for f64 {
    type Repr = BigDecimal;

    fn into_repr(self) -> Result<BigDecimal, CoercionError> {
        let text = self.to_string();
        if !self.is_finite() {
            return Err(CoercionError::Numeric { value: text });
        }
        BigDecimal::from_str(&text).map_err(|_| CoercionError::Numeric { value: text })
    }
}

/// Raw enumeration tag as found in the dataset, resolved against `E` on coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTag<E> {
    tag: String,
    _kind: PhantomData<E>,
}

impl<E> EnumTag<E> {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            _kind: PhantomData,
        }
    }
}

impl<E: StoreEnum> StoreScalar for EnumTag<E> {
    type Repr = E;

    fn into_repr(self) -> Result<E, CoercionError> {
        E::from_tag(&self.tag).ok_or_else(|| {
            CoercionError::InvalidTag(UnknownTag {
                type_name: E::TYPE_NAME,
                tag: self.tag,
            })
        })
    }
}

pub fn coerce<S: StoreScalar>(value: Option<S>) -> Result<Nullable<S::Repr>, CoercionError> {
    value.map(StoreScalar::into_repr).transpose().map(Nullable)
}

/// [`coerce`] for enumeration-typed fields, which the dataset holds as plain strings.
pub fn coerce_tag<E: StoreEnum>(value: Option<String>) -> Result<Nullable<E>, CoercionError> {
    coerce(value.map(EnumTag::<E>::new))
}
