use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A one-way encrypted password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

const MIN_LEN: usize = 6;

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl Password {
    /// Wrap an already encrypted hash, e.g. loaded from the database.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.chars().filter(|c| !c.is_whitespace()).count() < MIN_LEN {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(plain).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_verify() {
        let password = "secret".parse::<Password>().unwrap();
        assert_ne!("secret", password.as_ref());
        assert!(password.verify("secret"));
        assert!(!password.verify("wrong"));
    }

    #[test]
    fn reject_short_passwords() {
        assert!("12345".parse::<Password>().is_err());
        assert!("1 2 3 4 5".parse::<Password>().is_err());
        assert!("123456".parse::<Password>().is_ok());
    }
}
