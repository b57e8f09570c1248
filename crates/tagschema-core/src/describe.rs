//! The [`Describe`] trait and its implementations for standard types.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::types::{PrimitiveKind, TypeDesc};

/// Types that can report their own structure.
///
/// Records implement this with `#[derive(Describe)]`; a hand-written impl works
/// too when a type needs a custom shape.
///
/// Self-referential types (`struct Node { next: Vec<Node> }`) produce an
/// infinitely deep descriptor and are not supported.
pub trait Describe {
    fn describe() -> TypeDesc;
}

macro_rules! describe_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDesc {
                    TypeDesc::Primitive(PrimitiveKind::$kind)
                }
            }
        )*
    };
}

describe_primitive! {
    String => String,
    str => String,
    char => Char,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

macro_rules! describe_sequence {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Describe> Describe for $ty<T> {
                fn describe() -> TypeDesc {
                    TypeDesc::sequence(T::describe())
                }
            }
        )*
    };
}

describe_sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe() -> TypeDesc {
        TypeDesc::sequence(T::describe())
    }
}

impl<T: Describe> Describe for [T] {
    fn describe() -> TypeDesc {
        TypeDesc::sequence(T::describe())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDesc {
        TypeDesc::sequence(T::describe())
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> TypeDesc {
        TypeDesc::map(K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDesc {
        TypeDesc::map(K::describe(), V::describe())
    }
}

/// `Option` is the nilable reference: the shape is `T`'s, but the field is
/// not required by default.
impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDesc {
        TypeDesc::reference(T::describe())
    }
}

macro_rules! describe_transparent {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ty<T> {
                fn describe() -> TypeDesc {
                    T::describe()
                }
            }
        )*
    };
}

describe_transparent!(Box, Rc, Arc);

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> TypeDesc {
        T::describe()
    }
}

impl Describe for () {
    fn describe() -> TypeDesc {
        TypeDesc::unsupported("unit")
    }
}

impl Describe for serde_json::Value {
    fn describe() -> TypeDesc {
        TypeDesc::unsupported("any")
    }
}
