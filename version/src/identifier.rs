use std::{
    convert::TryFrom,
    fmt::{self, Display},
};

/// A single pre-release identifier.
///
/// Identifiers that consist only of digits are numeric and compare by
/// magnitude; all other identifiers compare by ASCII ordinal string order.
/// Numeric identifiers always order before alphanumeric ones.
///
/// ## Examples
///
/// ```rust
/// # use npm_semver_version::PrereleaseIdentifier;
/// let numeric = PrereleaseIdentifier::new("42")?;
/// let alpha = PrereleaseIdentifier::new("alpha")?;
///
/// assert_eq!(numeric, PrereleaseIdentifier::Numeric(42));
/// assert_eq!(alpha, PrereleaseIdentifier::AlphaNumeric(String::from("alpha")));
/// assert!(numeric < alpha);
/// # Ok::<(), npm_semver_version::IdentifierError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrereleaseIdentifier {
    /// An all-digits identifier, parsed into its value.
    Numeric(i32),
    /// Any other identifier, kept as its text.
    AlphaNumeric(String),
}

impl PrereleaseIdentifier {
    /// Validates `text` as a pre-release identifier.
    ///
    /// Fails on empty text, characters outside `[0-9A-Za-z-]`, a leading
    /// zero on a numeric identifier, and numeric identifiers that do not
    /// fit into an `i32`.
    pub fn new(text: impl Into<String>) -> Result<Self, IdentifierError> {
        Self::validated(text.into(), false)
    }

    /// Validates `text` like [`PrereleaseIdentifier::new`], but allows
    /// leading zeros on numeric identifiers.
    ///
    /// The zeros are normalized away, only the numeric value is kept.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use npm_semver_version::PrereleaseIdentifier;
    /// let identifier = PrereleaseIdentifier::with_leading_zeros("0123")?;
    /// assert_eq!(identifier, PrereleaseIdentifier::Numeric(123));
    /// assert_eq!(identifier.to_string(), "123");
    /// # Ok::<(), npm_semver_version::IdentifierError>(())
    /// ```
    pub fn with_leading_zeros(text: impl Into<String>) -> Result<Self, IdentifierError> {
        Self::validated(text.into(), true)
    }

    /// Returns `true` for a [`PrereleaseIdentifier::Numeric`] identifier.
    pub fn is_numeric(&self) -> bool {
        matches!(self, PrereleaseIdentifier::Numeric(_))
    }

    fn validated(text: String, allow_leading_zeros: bool) -> Result<Self, IdentifierError> {
        check_charset(&text)?;
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(PrereleaseIdentifier::AlphaNumeric(text));
        }
        if text.len() > 1 && text.starts_with('0') && !allow_leading_zeros {
            return Err(IdentifierError::LeadingZero(text));
        }
        // overflow applies even where the leading zero is forgiven
        let value = {
            let digits = text.trim_start_matches('0');
            if digits.is_empty() {
                Some(0)
            } else {
                digits.parse().ok()
            }
        };
        match value {
            Some(value) => Ok(PrereleaseIdentifier::Numeric(value)),
            None => Err(IdentifierError::TooLarge(text)),
        }
    }
}

impl From<PrereleaseIdentifier> for String {
    fn from(identifier: PrereleaseIdentifier) -> Self {
        match identifier {
            PrereleaseIdentifier::Numeric(value) => value.to_string(),
            PrereleaseIdentifier::AlphaNumeric(text) => text,
        }
    }
}

impl TryFrom<i32> for PrereleaseIdentifier {
    type Error = IdentifierError;

    /// Converts an already-parsed number into a numeric identifier,
    /// failing for negative values.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(IdentifierError::Negative(value));
        }
        Ok(PrereleaseIdentifier::Numeric(value))
    }
}

impl Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrereleaseIdentifier::Numeric(value) => Display::fmt(value, f),
            PrereleaseIdentifier::AlphaNumeric(text) => f.pad(text),
        }
    }
}

/// A single build metadata identifier.
///
/// Metadata is never semantically numeric: leading zeros and values beyond
/// any integer width are preserved verbatim. Only the character set and
/// non-emptiness are checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetadataIdentifier(String);

impl MetadataIdentifier {
    /// Validates `text` as a build metadata identifier.
    ///
    /// Fails on empty text and on characters outside `[0-9A-Za-z-]`.
    pub fn new(text: impl Into<String>) -> Result<Self, IdentifierError> {
        let text = text.into();
        check_charset(&text)?;
        Ok(MetadataIdentifier(text))
    }

    /// The identifier as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // for input that has already passed the parser's charset check
    #[cfg(feature = "parser")]
    pub(crate) fn unchecked(text: impl Into<String>) -> Self {
        MetadataIdentifier(text.into())
    }
}

impl AsRef<str> for MetadataIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for MetadataIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Why a piece of text is not a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifiers must contain at least one character.
    Empty,
    /// The text contains a character outside of `[0-9A-Za-z-]`.
    InvalidCharacter(String),
    /// A numeric identifier has a disallowed leading zero.
    LeadingZero(String),
    /// A numeric identifier does not fit into an `i32`.
    TooLarge(String),
    /// A numeric identifier would be negative.
    Negative(i32),
}

impl Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::Empty => f.pad("identifiers cannot be empty"),
            IdentifierError::InvalidCharacter(text) => write!(
                f,
                "identifiers may only contain alphanumerics and hyphens: `{}`",
                text
            ),
            IdentifierError::LeadingZero(text) => write!(
                f,
                "leading zeros are not allowed on numeric identifiers: `{}`",
                text
            ),
            IdentifierError::TooLarge(text) => write!(
                f,
                "numeric identifiers must fit into a 32-bit integer: `{}`",
                text
            ),
            IdentifierError::Negative(value) => {
                write!(f, "numeric identifiers cannot be negative: `{}`", value)
            }
        }
    }
}

impl std::error::Error for IdentifierError {}

fn check_charset(text: &str) -> Result<(), IdentifierError> {
    if text.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if !text
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        return Err(IdentifierError::InvalidCharacter(text.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0" => PrereleaseIdentifier::Numeric(0))]
    #[test_case("42" => PrereleaseIdentifier::Numeric(42))]
    #[test_case("2147483647" => PrereleaseIdentifier::Numeric(i32::MAX))]
    #[test_case("alpha" => PrereleaseIdentifier::AlphaNumeric(String::from("alpha")))]
    #[test_case("rc-2" => PrereleaseIdentifier::AlphaNumeric(String::from("rc-2")))]
    #[test_case("0abc" => PrereleaseIdentifier::AlphaNumeric(String::from("0abc")); "leading zero on alphanumeric")]
    #[test_case("-" => PrereleaseIdentifier::AlphaNumeric(String::from("-")); "lone hyphen")]
    fn test_valid_prerelease(text: &str) -> PrereleaseIdentifier {
        PrereleaseIdentifier::new(text).unwrap()
    }

    #[test_case("" => IdentifierError::Empty)]
    #[test_case("foo.bar" => IdentifierError::InvalidCharacter(String::from("foo.bar")))]
    #[test_case("nö" => IdentifierError::InvalidCharacter(String::from("nö")))]
    #[test_case("0123" => IdentifierError::LeadingZero(String::from("0123")))]
    #[test_case("2147483648" => IdentifierError::TooLarge(String::from("2147483648")))]
    #[test_case("99999999999999999" => IdentifierError::TooLarge(String::from("99999999999999999")))]
    fn test_invalid_prerelease(text: &str) -> IdentifierError {
        PrereleaseIdentifier::new(text).unwrap_err()
    }

    #[test_case("0123" => PrereleaseIdentifier::Numeric(123))]
    #[test_case("000" => PrereleaseIdentifier::Numeric(0))]
    #[test_case("42" => PrereleaseIdentifier::Numeric(42))]
    fn test_leading_zeros_allowed(text: &str) -> PrereleaseIdentifier {
        PrereleaseIdentifier::with_leading_zeros(text).unwrap()
    }

    // the allowance normalizes zeros away, it does not excuse overflow
    #[test]
    fn test_leading_zeros_still_overflow() {
        assert_eq!(
            PrereleaseIdentifier::with_leading_zeros("099999999999999999"),
            Err(IdentifierError::TooLarge(String::from("099999999999999999")))
        );
    }

    #[test]
    fn test_from_number() {
        assert_eq!(
            PrereleaseIdentifier::try_from(42),
            Ok(PrereleaseIdentifier::Numeric(42))
        );
        assert_eq!(
            PrereleaseIdentifier::try_from(-1),
            Err(IdentifierError::Negative(-1))
        );
    }

    #[test]
    fn test_ordering() {
        let mut identifiers = vec![
            PrereleaseIdentifier::new("beta").unwrap(),
            PrereleaseIdentifier::new("11").unwrap(),
            PrereleaseIdentifier::new("alpha").unwrap(),
            PrereleaseIdentifier::new("2").unwrap(),
        ];
        identifiers.sort();
        assert_eq!(
            identifiers,
            vec![
                PrereleaseIdentifier::Numeric(2),
                PrereleaseIdentifier::Numeric(11),
                PrereleaseIdentifier::AlphaNumeric(String::from("alpha")),
                PrereleaseIdentifier::AlphaNumeric(String::from("beta")),
            ]
        );
    }

    #[test_case("build" => "build")]
    #[test_case("0123" => "0123"; "leading zeros preserved")]
    #[test_case("99999999999999999" => "99999999999999999"; "no numeric bound")]
    fn test_metadata(text: &str) -> String {
        MetadataIdentifier::new(text).unwrap().to_string()
    }

    #[test_case("" => IdentifierError::Empty)]
    #[test_case("a+b" => IdentifierError::InvalidCharacter(String::from("a+b")))]
    fn test_invalid_metadata(text: &str) -> IdentifierError {
        MetadataIdentifier::new(text).unwrap_err()
    }
}
