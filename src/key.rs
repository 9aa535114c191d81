//! Identity-key extraction for queue payloads.
//!
//! The queue correlates heap entries with index entries through an identity
//! key derived from the payload, rather than through payload equality or a
//! runtime object hash. The caller decides what identifies a payload.

use core::hash::Hash;

/// Trait for payloads that carry a stable identity key.
///
/// The key is computed once at insertion and cached for the lifetime of the
/// entry, so `key()` must be deterministic: recomputing it later has to yield
/// the same value.
///
/// # Uniqueness precondition
///
/// Two logically distinct payloads must not share a key. The queue does not
/// defend against collisions (doing so would require payload equality checks
/// it is not given); a collision makes the later insert supersede the earlier
/// one as if it were an update.
///
/// # Example
///
/// ```
/// use schedq::Keyed;
///
/// struct Job {
///     id: u64,
///     label: String,
/// }
///
/// impl Keyed for Job {
///     type Key = u64;
///
///     fn key(&self) -> u64 {
///         self.id
///     }
/// }
/// ```
pub trait Keyed {
    /// The identity key type.
    type Key: Hash + Eq + Clone;

    /// Returns this payload's identity key.
    fn key(&self) -> Self::Key;
}

// =============================================================================
// Implementations for self-identifying types
// =============================================================================

macro_rules! impl_keyed_for_copy {
    ($($ty:ty),*) => {
        $(
            impl Keyed for $ty {
                type Key = $ty;

                #[inline]
                fn key(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

impl_keyed_for_copy!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

impl Keyed for String {
    type Key = String;

    #[inline]
    fn key(&self) -> String {
        self.clone()
    }
}

impl Keyed for &str {
    type Key = String;

    #[inline]
    fn key(&self) -> String {
        (*self).to_owned()
    }
}
