//! Macro for implementing Display and FromStr for state enums
//!
//! Connection states and toggle outcomes cross the boundary to the browser as
//! plain strings. This macro keeps both directions of that mapping in one
//! place, with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use cadence_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum SyncPhase {
//!     Idle,
//!     Running,
//! }
//!
//! impl_domain_status_conversions!(SyncPhase {
//!     Idle => "idle",
//!     Running => "running",
//! });
//!
//! assert_eq!(SyncPhase::Running.to_string(), "running");
//! assert_eq!("IDLE".parse::<SyncPhase>(), Ok(SyncPhase::Idle));
//! ```

/// Implements Display and FromStr traits for state enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum LinkState {
        Linked,
        Unlinked,
    }

    impl_domain_status_conversions!(LinkState {
        Linked => "linked",
        Unlinked => "unlinked",
    });

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(LinkState::Linked.to_string(), "linked");
        assert_eq!(LinkState::Unlinked.to_string(), "unlinked");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(LinkState::from_str("LINKED").unwrap(), LinkState::Linked);
        assert_eq!(LinkState::from_str("UnLinked").unwrap(), LinkState::Unlinked);
    }

    #[test]
    fn test_fromstr_rejects_unknown() {
        let err = LinkState::from_str("pending").unwrap_err();
        assert!(err.contains("Invalid LinkState: pending"));
        assert!(LinkState::from_str("").is_err());
    }
}
