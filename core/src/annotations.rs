//! Small typed helpers over numbers, strings, sequences and mappings.
//!
//! Every function here is pure and independent of the others.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A value from a list that mixes integers and floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn concat(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

/// Largest integer not greater than `n`.
///
/// Values outside the `i64` range saturate to `i64::MIN`/`i64::MAX`; NaN
/// maps to 0.
pub fn floor(n: f64) -> i64 {
    n.floor() as i64
}

/// Render a float; integral values keep their `.0`.
///
/// Very large or very small magnitudes use Rust's exponent form, which has
/// no sign or zero padding on the exponent: `1e16`, `1e-5`.
pub fn to_str(n: f64) -> String {
    format!("{n:?}")
}

pub fn sum_list(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn sum_mixed_list(values: &[Number]) -> f64 {
    values.iter().map(|n| n.as_f64()).sum()
}

/// Pair `key` with the square of `value`.
pub fn to_kv(key: &str, value: impl Into<Number>) -> (String, f64) {
    let v = value.into().as_f64();
    (key.to_string(), v * v)
}

pub fn make_multiplier(multiplier: f64) -> impl Fn(f64) -> f64 {
    move |x| x * multiplier
}

/// Anything with a length: strings count characters, slices count elements.
pub trait HasLen {
    fn item_len(&self) -> usize;
}

impl HasLen for str {
    fn item_len(&self) -> usize {
        self.chars().count()
    }
}

impl HasLen for String {
    fn item_len(&self) -> usize {
        self.as_str().item_len()
    }
}

impl<T> HasLen for [T] {
    fn item_len(&self) -> usize {
        self.len()
    }
}

impl<T> HasLen for Vec<T> {
    fn item_len(&self) -> usize {
        self.len()
    }
}

impl<T: HasLen + ?Sized> HasLen for &T {
    fn item_len(&self) -> usize {
        (**self).item_len()
    }
}

/// Pair each sequence with its length, preserving order.
pub fn element_length<I, T>(items: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: HasLen,
{
    items
        .into_iter()
        .map(|item| {
            let len = item.item_len();
            (item, len)
        })
        .collect()
}

pub fn safe_first_element<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Value stored under `key`, or `default` when the key is absent.
pub fn safely_get_value<K, Q, V>(map: &HashMap<K, V>, key: &Q, default: Option<V>) -> Option<V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    V: Clone,
{
    map.get(key).cloned().or(default)
}
