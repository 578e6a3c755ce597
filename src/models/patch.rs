use serde::{Deserialize, Deserializer};

/// A field in an update payload.
///
/// `Unset` means the key was absent from the request and the stored value must be
/// left alone. `Set` carries the replacement. Fields must be declared with
/// `#[serde(default)]` so that a missing key deserializes to `Unset`; a present
/// key is deserialized as `T`, which means an explicit `null` is rejected for
/// non-optional `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T: Clone> Patch<T> {
    /// Overwrites `target` when the field was present in the request.
    pub fn apply_to(&self, target: &mut T) {
        if let Patch::Set(v) = self {
            *target = v.clone();
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}
