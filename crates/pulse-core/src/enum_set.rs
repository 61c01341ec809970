//! Fixed-universe enum sets backed by a bitset.
//!
//! `EnumSet<T>` stores membership of a closed enum as one bit per variant,
//! keyed by [`SetMember::ordinal`]. It serializes as a JSON array of variant
//! names in canonical (declaration) order, so two sets with the same members
//! always produce the same JSON regardless of how they were built.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed enum that can be stored in an [`EnumSet`].
///
/// `UNIVERSE` lists every variant in declaration order and `ordinal` must be
/// the variant's index in that list. Universes larger than 16 are not supported.
pub trait SetMember: Copy + Eq + 'static {
    const UNIVERSE: &'static [Self];

    fn ordinal(self) -> u8;
}

/// Membership set over a closed enum.
pub struct EnumSet<T> {
    bits: u16,
    _marker: PhantomData<T>,
}

impl<T: SetMember> EnumSet<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    /// Set containing every variant of `T`.
    #[must_use]
    pub fn all() -> Self {
        T::UNIVERSE.iter().copied().collect()
    }

    #[must_use]
    pub fn contains(&self, member: T) -> bool {
        self.bits & Self::bit(member) != 0
    }

    /// Insert `member`, returning whether it was newly added.
    pub fn insert(&mut self, member: T) -> bool {
        let added = !self.contains(member);
        self.bits |= Self::bit(member);
        added
    }

    /// Remove `member`, returning whether it was present.
    pub fn remove(&mut self, member: T) -> bool {
        let present = self.contains(member);
        self.bits &= !Self::bit(member);
        present
    }

    /// Copy of this set with `member` added.
    #[must_use]
    pub fn with(mut self, member: T) -> Self {
        self.insert(member);
        self
    }

    /// Copy of this set with `member` removed.
    #[must_use]
    pub fn without(mut self, member: T) -> Self {
        self.remove(member);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::UNIVERSE
            .iter()
            .copied()
            .filter(move |member| self.contains(*member))
    }

    fn bit(member: T) -> u16 {
        1u16 << member.ordinal()
    }
}

impl<T: SetMember> Default for EnumSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Clone for EnumSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EnumSet<T> {}

impl<T> PartialEq for EnumSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for EnumSet<T> {}

impl<T> Hash for EnumSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: SetMember + fmt::Debug> fmt::Debug for EnumSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: SetMember> FromIterator<T> for EnumSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for member in iter {
            set.insert(member);
        }
        set
    }
}

impl<T: SetMember> Extend<T> for EnumSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for member in iter {
            self.insert(member);
        }
    }
}

impl<T: SetMember, const N: usize> From<[T; N]> for EnumSet<T> {
    fn from(members: [T; N]) -> Self {
        members.into_iter().collect()
    }
}

impl<T: SetMember + Serialize> Serialize for EnumSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for member in self.iter() {
            seq.serialize_element(&member)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for EnumSet<T>
where
    T: SetMember + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let members = Vec::<T>::deserialize(deserializer)?;
        Ok(members.into_iter().collect())
    }
}

impl<T: SetMember + JsonSchema> JsonSchema for EnumSet<T> {
    fn schema_name() -> Cow<'static, str> {
        format!("EnumSet_{}", T::schema_name()).into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let items = generator.subschema_for::<T>();
        json_schema!({
            "type": "array",
            "items": items
        })
    }
}
