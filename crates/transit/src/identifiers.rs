//! Type-safe, cheap-to-clone identifiers for transit entities.
//!
//! Identifiers wrap `Arc<str>` so every stop and segment referencing a route
//! shares one allocation. Operator feeds pad ids and route numbers
//! inconsistently (`" 99"`, `"099 "`), so surrounding whitespace is dropped on
//! construction; everything else, leading zeros included, is significant.

use std::fmt;
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().trim().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

impl_identifier!(StopIdentifier);
impl_identifier!(RouteNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let id1 = StopIdentifier::new("50001");
        let id2 = StopIdentifier::new("50001");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
        assert_ne!(id1, StopIdentifier::new("50002"));
    }

    #[test]
    fn test_route_number_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(RouteNumber::new("099"), 42);

        assert_eq!(map.get(&RouteNumber::new("099")), Some(&42));
        // Route numbers are display strings, leading zeros matter
        assert_eq!(map.get(&RouteNumber::new("99")), None);
    }

    #[test]
    fn test_surrounding_whitespace_is_dropped() {
        assert_eq!(RouteNumber::new(" 99\t"), RouteNumber::new("99"));
        assert_eq!(StopIdentifier::new("51479 ").as_str(), "51479");
        assert_eq!(RouteNumber::new("N 19").as_str(), "N 19");
    }

    #[test]
    fn test_identifier_display() {
        let number = RouteNumber::new("N19");
        assert_eq!(format!("{}", number), "N19");
        assert_eq!(number.as_str(), "N19");
    }

    #[test]
    fn test_identifier_conversions() {
        let _id1: StopIdentifier = "51479".into();
        let _id2: RouteNumber = String::from("R4").into();
    }
}
