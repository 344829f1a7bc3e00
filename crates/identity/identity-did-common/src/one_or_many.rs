use serde::{Deserialize, Serialize};

/// One or many.
///
/// Serializes/deserializes into/from either a value, or an array of values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),

    /// An array of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(_) => false,
            Self::Many(values) => values.is_empty(),
        }
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.as_slice().contains(x)
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(t) => std::slice::from_ref(t),
            Self::Many(l) => l.as_slice(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(t) => vec![t],
            Self::Many(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_and_many_serde() {
        let one: OneOrMany<String> = serde_json::from_str("\"did:example:a\"").unwrap();
        assert_eq!(one.len(), 1);
        assert!(one.contains(&"did:example:a".to_string()));

        let many: OneOrMany<String> =
            serde_json::from_str(r#"["did:example:a","did:example:b"]"#).unwrap();
        assert_eq!(many.as_slice().len(), 2);
        assert_eq!(many.into_vec()[1], "did:example:b");
    }

    #[test]
    fn empty_many() {
        let empty: OneOrMany<String> = OneOrMany::Many(vec![]);
        assert!(empty.is_empty());
        assert!(!OneOrMany::One(1).is_empty());
    }
}
