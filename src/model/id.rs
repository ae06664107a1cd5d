//! Instrument identifiers and the generator that issues them.
//!
//! Two policies exist, picked per deployment:
//!
//! - [`IdPolicy::Timestamp`]: milliseconds since the epoch, strictly increasing.
//! - [`IdPolicy::Random`]: a short token over an alphabet without look-alike
//!   characters (`0`/`O`, `1`/`l`/`I`).

use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use rand::Rng;

/// Characters used by random ids.
pub const UNAMBIGUOUS_ALPHABET: &[u8] =
    b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Default length of random ids.
pub const DEFAULT_TOKEN_LENGTH: usize = 6;

/// Type-safe identifier for instruments.
///
/// Serializes as a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum InstrumentId {
    Numeric(u64),
    Token(String),
}

impl Display for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Token(t) => f.write_str(t),
        }
    }
}

/// How new ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    Timestamp,
    Random { length: usize },
}

impl IdPolicy {
    /// Interprets a path segment as an id of this policy.
    ///
    /// `None` means the segment cannot name any instrument under this policy.
    pub fn parse(&self, raw: &str) -> Option<InstrumentId> {
        match self {
            Self::Timestamp => raw.parse().ok().map(InstrumentId::Numeric),
            Self::Random { .. } if raw.is_empty() => None,
            Self::Random { .. } => Some(InstrumentId::Token(raw.to_string())),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" | "numeric" => Ok(Self::Timestamp),
            "random" | "token" => Ok(Self::Random {
                length: DEFAULT_TOKEN_LENGTH,
            }),
            other => Err(format!("unknown id policy '{}'", other)),
        }
    }
}

/// Issues ids that never repeat for the lifetime of the generator.
///
/// Owned by the store actor, so it needs no synchronization.
#[derive(Debug)]
pub struct IdGenerator {
    policy: IdPolicy,
    last_numeric: u64,
    issued: HashSet<String>,
}

impl IdGenerator {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            policy,
            last_numeric: 0,
            issued: HashSet::new(),
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Marks an externally assigned id (seed data) as taken.
    pub fn reserve(&mut self, id: &InstrumentId) {
        match id {
            InstrumentId::Numeric(n) => self.last_numeric = self.last_numeric.max(*n),
            InstrumentId::Token(t) => {
                self.issued.insert(t.clone());
            }
        }
    }

    pub fn next_id(&mut self) -> InstrumentId {
        match self.policy {
            IdPolicy::Timestamp => {
                let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
                self.last_numeric = now.max(self.last_numeric.saturating_add(1));
                InstrumentId::Numeric(self.last_numeric)
            }
            IdPolicy::Random { length } => loop {
                let token = random_token(length);
                if self.issued.insert(token.clone()) {
                    return InstrumentId::Token(token);
                }
            },
        }
    }
}

fn random_token(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| UNAMBIGUOUS_ALPHABET[rng.random_range(0..UNAMBIGUOUS_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_ids_strictly_increase() {
        let mut generator = IdGenerator::new(IdPolicy::Timestamp);
        let ids: Vec<u64> = (0..1000)
            .map(|_| match generator.next_id() {
                InstrumentId::Numeric(n) => n,
                other => panic!("expected numeric id, got {other:?}"),
            })
            .collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_timestamp_ids_skip_reserved_values() {
        let mut generator = IdGenerator::new(IdPolicy::Timestamp);
        let far_future = u64::MAX / 2;
        generator.reserve(&InstrumentId::Numeric(far_future));

        assert_eq!(generator.next_id(), InstrumentId::Numeric(far_future + 1));
    }

    #[test]
    fn test_random_ids_are_unique_and_well_formed() {
        let mut generator = IdGenerator::new(IdPolicy::Random { length: 3 });
        let mut seen = HashSet::new();

        for _ in 0..2000 {
            let InstrumentId::Token(token) = generator.next_id() else {
                panic!("expected token id");
            };
            assert_eq!(token.len(), 3);
            assert!(token.bytes().all(|b| UNAMBIGUOUS_ALPHABET.contains(&b)));
            assert!(seen.insert(token), "id issued twice");
        }
    }

    #[test]
    fn test_random_ids_never_reissue_reserved_tokens() {
        let mut generator = IdGenerator::new(IdPolicy::Random { length: 1 });
        for &b in &UNAMBIGUOUS_ALPHABET[1..] {
            generator.reserve(&InstrumentId::Token((b as char).to_string()));
        }

        // Only one single-character token is still free.
        let expected = (UNAMBIGUOUS_ALPHABET[0] as char).to_string();
        assert_eq!(generator.next_id(), InstrumentId::Token(expected));
    }

    #[test]
    fn test_parse_follows_policy() {
        assert_eq!(
            IdPolicy::Timestamp.parse("42"),
            Some(InstrumentId::Numeric(42))
        );
        assert_eq!(IdPolicy::Timestamp.parse("abc"), None);
        assert_eq!(IdPolicy::Timestamp.parse("-1"), None);

        let random = IdPolicy::Random { length: 6 };
        assert_eq!(
            random.parse("x7Kp2q"),
            Some(InstrumentId::Token("x7Kp2q".into()))
        );
        assert_eq!(random.parse("42"), Some(InstrumentId::Token("42".into())));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("timestamp".parse::<IdPolicy>(), Ok(IdPolicy::Timestamp));
        assert_eq!(
            " Random ".parse::<IdPolicy>(),
            Ok(IdPolicy::Random { length: 6 })
        );
        assert!("uuid".parse::<IdPolicy>().is_err());
    }

    #[test]
    fn test_ids_serialize_as_bare_values() {
        assert_eq!(
            serde_json::to_string(&InstrumentId::Numeric(7)).unwrap(),
            "7"
        );
        assert_eq!(
            serde_json::to_string(&InstrumentId::Token("ab3".into())).unwrap(),
            "\"ab3\""
        );
    }
}
