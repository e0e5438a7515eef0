/// Declares an index newtype and a vector that can only be indexed by it.
///
/// ```rust
/// libgraph::define_indexed_vec!(
///     pub struct SlotIndex;
///     pub struct SlotVec;
/// );
///
/// let v = SlotVec::try_from_fn(3, |i| i.0 * 10).unwrap();
/// assert_eq!(v[SlotIndex(2)], 20);
/// assert!(!v.contains_index(SlotIndex(3)));
/// ```
#[macro_export]
macro_rules! define_indexed_vec {
    (
        $(#[$idx_meta:meta])*
        $idx_vis:vis struct $Idx:ident ;

        $(#[$vec_meta:meta])*
        $vec_vis:vis struct $Vec:ident ;
    ) => {
        $(#[$idx_meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $idx_vis struct $Idx(pub usize);

        impl ::std::convert::From<usize> for $Idx {
            fn from(value: usize) -> Self {
                $Idx(value)
            }
        }

        impl ::std::fmt::Display for $Idx {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        $(#[$vec_meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vec_vis struct $Vec<T>(::std::vec::Vec<T>);

        impl<T> ::std::ops::Index<$Idx> for $Vec<T> {
            type Output = T;

            fn index(&self, index: $Idx) -> &T {
                &self.0[index.0]
            }
        }

        impl<T> ::std::ops::IndexMut<$Idx> for $Vec<T> {
            fn index_mut(&mut self, index: $Idx) -> &mut T {
                &mut self.0[index.0]
            }
        }

        impl<T> $Vec<T> {
            /// `n` elements built by `f`. Allocation failure is returned
            /// instead of aborting.
            pub fn try_from_fn(
                n: usize,
                mut f: impl FnMut($Idx) -> T,
            ) -> ::std::result::Result<Self, ::std::collections::TryReserveError> {
                let mut inner = ::std::vec::Vec::new();
                inner.try_reserve_exact(n)?;
                inner.extend((0..n).map(|i| f($Idx(i))));
                Ok(Self(inner))
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn contains_index(&self, index: $Idx) -> bool {
                index.0 < self.0.len()
            }

            pub fn get(&self, index: $Idx) -> Option<&T> {
                self.0.get(index.0)
            }

            /// Elements paired with their index.
            pub fn iter(&self) -> impl Iterator<Item = ($Idx, &T)> + '_ {
                self.0.iter().enumerate().map(|(i, t)| ($Idx(i), t))
            }
        }
    };
}
