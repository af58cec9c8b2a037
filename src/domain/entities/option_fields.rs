use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Optional, nullable content field.
///
/// - `Absent` → key not present on the wire
/// - `Null` → key present with an explicit `null`
/// - `Present` → key present with a value
///
/// Record fields using this type must carry
/// `#[serde(default, skip_serializing_if = "OptionField::is_absent")]`
/// so that a missing key stays `Absent` and is written back as missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OptionField<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

// ---------------------- Wire format ----------------------

impl<T: Serialize> Serialize for OptionField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionField::Present(value) => serializer.serialize_some(value),
            // `Absent` only reaches here when the field is not skipped
            OptionField::Absent | OptionField::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => OptionField::Present(v),
            None => OptionField::Null,
        })
    }
}

// ---------------------- Core helpers & conversions ----------------------

impl<T> OptionField<T> {
    /// Convert to nested option:
    /// - `None` → absent
    /// - `Some(None)` → null
    /// - `Some(Some(T))` → value
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Present(v) => Some(Some(v)),
        }
    }

    /// Borrowed nested option, same mapping as [`OptionField::into_option`].
    pub fn as_ref_option(&self) -> Option<Option<&T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Present(v) => Some(Some(v)),
        }
    }

    pub fn as_ref(&self) -> OptionField<&T> {
        match self {
            Self::Absent => OptionField::Absent,
            Self::Null => OptionField::Null,
            Self::Present(v) => OptionField::Present(v),
        }
    }

    /// Transform inner value if `Present`
    pub fn map_value<U, F: FnOnce(T) -> U>(self, f: F) -> OptionField<U> {
        match self {
            Self::Absent => OptionField::Absent,
            Self::Null => OptionField::Null,
            Self::Present(v) => OptionField::Present(f(v)),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// If `Present`, returns a reference to the inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::Present(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Collapses absent and null into `None`. Lossy; only for display paths.
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            _ => None,
        }
    }
}

impl OptionField<String> {
    pub fn flatten_str(&self) -> Option<&str> {
        self.value_ref().map(String::as_str)
    }
}

// ---------------------- From conversions ----------------------

impl<T> From<Option<Option<T>>> for OptionField<T> {
    fn from(opt: Option<Option<T>>) -> Self {
        match opt {
            None => OptionField::Absent,
            Some(None) => OptionField::Null,
            Some(Some(v)) => OptionField::Present(v),
        }
    }
}

impl<T> From<OptionField<T>> for Option<Option<T>> {
    fn from(field: OptionField<T>) -> Self {
        field.into_option()
    }
}

impl From<&str> for OptionField<String> {
    fn from(value: &str) -> Self {
        OptionField::Present(value.to_owned())
    }
}

// ---------------------- Aliases ----------------------

pub type OptionalString = OptionField<String>;
