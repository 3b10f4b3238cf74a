//! Canonical string identifiers for Looker entities.
//!
//! Looker returns ids as JSON strings on API 4.0 and as integers on older
//! endpoints and in query results. Every id is canonicalized to its string
//! form when it is deserialized, so comparisons downstream are plain string
//! equality and never miss because of a type mismatch.

/// Define a non-empty identifier newtype that deserializes from either a JSON
/// string or a JSON integer.
///
/// Generates:
/// - The struct with `Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize`
/// - Custom `Deserialize` (accepts strings and integers, rejects empty strings)
/// - `new()`, `try_new()`, `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>`, `Deref<Target=str>`, `Borrow<str>`
/// - `From<u64>`, `PartialEq<str>`, `PartialEq<&str>`
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct IdVisitor;

                impl serde::de::Visitor<'_> for IdVisitor {
                    type Value = $Name;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        f.write_str(concat!(stringify!($Name), " as a string or integer"))
                    }

                    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<$Name, E> {
                        $Name::try_new(v.trim())
                            .ok_or_else(|| E::custom(concat!(stringify!($Name), " must not be empty")))
                    }

                    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<$Name, E> {
                        Ok($Name(v.to_string()))
                    }

                    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<$Name, E> {
                        Ok($Name(v.to_string()))
                    }
                }

                deserializer.deserialize_any(IdVisitor)
            }
        }

        impl $Name {
            /// Create a new id. Panics in debug builds if the id is empty.
            pub fn new(id: impl Into<String>) -> Self {
                let s = id.into();
                debug_assert!(!s.is_empty(), concat!(stringify!($Name), " must not be empty"));
                Self(s)
            }

            /// Try to create a new id, returning `None` if it is empty.
            pub fn try_new(id: impl Into<String>) -> Option<Self> {
                let s = id.into();
                if s.is_empty() { None } else { Some(Self(s)) }
            }

            /// Return the canonical string form.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str { &self.0 }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str { &self.0 }
        }

        impl From<u64> for $Name {
            fn from(id: u64) -> Self { Self(id.to_string()) }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool { self.0 == *other }
        }
    };
}

define_id! {
    /// Id of a dashboard or a look.
    pub struct ContentId;
}

define_id! {
    /// Id of a folder (space).
    pub struct FolderId;
}

#[cfg(test)]
#[path = "id_test.rs"]
mod tests;
