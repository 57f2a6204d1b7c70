//! Strict semantic version numbers.
//!
//! Companion version struct for the npm_semver_parser parser. The version
//! is an immutable value: every `with_*` derivation returns a new version
//! and validates its input, so a constructed [`Version`] is always valid.
//!
//! Numeric components are bounded to 32-bit signed integers, matching the
//! widest range npm registries accept in practice.
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{
    cmp::Ordering,
    fmt::{self, Display, Write},
    hash,
};

mod identifier;
pub use identifier::{IdentifierError, MetadataIdentifier, PrereleaseIdentifier};

/// Represents a semantic version number.
///
/// ## Equality
///
/// Equality, hashing, and ordering all ignore the build metadata, so that
/// `PartialEq` stays consistent with `Ord`: `1.2.3+a` and `1.2.3+b` are
/// equal and neither orders before the other. Use [`Version::metadata`] to
/// compare metadata explicitly.
///
/// ## Examples
///
/// ```rust
/// # use npm_semver_version::Version;
/// let version = Version::new(1, 2, 3)?.with_prerelease("rc.1", false)?;
/// assert_eq!(version.to_string(), "1.2.3-rc.1");
/// assert!(version.is_prerelease());
/// assert!(version < Version::new(1, 2, 3)?);
/// # Ok::<(), npm_semver_version::VersionError>(())
/// ```
#[derive(Debug, Clone, Eq)]
pub struct Version {
    major: i32,
    minor: i32,
    patch: i32,
    prerelease: Vec<PrereleaseIdentifier>,
    metadata: Vec<MetadataIdentifier>,
}

/// Names the numeric component of a version.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Part {
    /// The first version component.
    Major,
    /// The second version component.
    Minor,
    /// The third version component.
    Patch,
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Major => f.pad("major"),
            Part::Minor => f.pad("minor"),
            Part::Patch => f.pad("patch"),
        }
    }
}

/// Why a version could not be constructed or derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// A numeric component was negative.
    NegativeComponent(Part),
    /// A pre-release identifier failed validation.
    Prerelease(IdentifierError),
    /// A build metadata identifier failed validation.
    Metadata(IdentifierError),
}

impl Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionError::NegativeComponent(part) => {
                write!(f, "the {} version component cannot be negative", part)
            }
            VersionError::Prerelease(error) => {
                write!(f, "invalid pre-release identifier: {}", error)
            }
            VersionError::Metadata(error) => {
                write!(f, "invalid build metadata identifier: {}", error)
            }
        }
    }
}

impl std::error::Error for VersionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VersionError::NegativeComponent(_) => None,
            VersionError::Prerelease(error) | VersionError::Metadata(error) => Some(error),
        }
    }
}

impl Version {
    /// Constructs a new, empty version.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use npm_semver_version::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "0.0.0")
    /// ```
    pub const fn empty() -> Self {
        Version {
            major: 0,
            minor: 0,
            patch: 0,
            prerelease: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Constructs a release version from its numeric components.
    ///
    /// Fails with [`VersionError::NegativeComponent`] when any component is
    /// negative.
    pub fn new(major: i32, minor: i32, patch: i32) -> Result<Self, VersionError> {
        Ok(Version {
            major: component(major, Part::Major)?,
            minor: component(minor, Part::Minor)?,
            patch: component(patch, Part::Patch)?,
            prerelease: Vec::new(),
            metadata: Vec::new(),
        })
    }

    /// The major version component.
    pub fn major(&self) -> i32 {
        self.major
    }

    /// The minor version component.
    pub fn minor(&self) -> i32 {
        self.minor
    }

    /// The patch version component.
    pub fn patch(&self) -> i32 {
        self.patch
    }

    /// The pre-release identifiers, empty for a release version.
    pub fn prerelease(&self) -> &[PrereleaseIdentifier] {
        &self.prerelease
    }

    /// The build metadata identifiers.
    pub fn metadata(&self) -> &[MetadataIdentifier] {
        &self.metadata
    }

    /// Returns `true` when the version carries pre-release identifiers.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Returns this version with a different major component.
    pub fn with_major(&self, major: i32) -> Result<Self, VersionError> {
        let major = component(major, Part::Major)?;
        let mut version = self.clone();
        version.major = major;
        Ok(version)
    }

    /// Returns this version with a different minor component.
    pub fn with_minor(&self, minor: i32) -> Result<Self, VersionError> {
        let minor = component(minor, Part::Minor)?;
        let mut version = self.clone();
        version.minor = minor;
        Ok(version)
    }

    /// Returns this version with a different patch component.
    pub fn with_patch(&self, patch: i32) -> Result<Self, VersionError> {
        let patch = component(patch, Part::Patch)?;
        let mut version = self.clone();
        version.patch = patch;
        Ok(version)
    }

    /// Returns this version with the pre-release identifiers parsed from a
    /// dot-joined string. An empty string clears the pre-release.
    ///
    /// With `allow_leading_zeros`, numeric identifiers may carry leading
    /// zeros, which are normalized away.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use npm_semver_version::Version;
    /// let version = Version::new(1, 2, 3)?;
    ///
    /// assert!(version.with_prerelease("bar.0123", false).is_err());
    /// assert_eq!(
    ///     version.with_prerelease("bar.0123", true)?.to_string(),
    ///     "1.2.3-bar.123"
    /// );
    /// # Ok::<(), npm_semver_version::VersionError>(())
    /// ```
    pub fn with_prerelease(
        &self,
        text: &str,
        allow_leading_zeros: bool,
    ) -> Result<Self, VersionError> {
        if text.is_empty() {
            return Ok(self.without_prerelease());
        }
        let prerelease = text
            .split('.')
            .map(|part| {
                if allow_leading_zeros {
                    PrereleaseIdentifier::with_leading_zeros(part)
                } else {
                    PrereleaseIdentifier::new(part)
                }
            })
            .collect::<Result<_, _>>()
            .map_err(VersionError::Prerelease)?;
        Ok(self.replace_prerelease(prerelease))
    }

    /// Returns this version with the pre-release identifiers parsed from
    /// individual parts, validated strictly. An empty iterator clears the
    /// pre-release.
    pub fn with_prerelease_parts<I>(&self, parts: I) -> Result<Self, VersionError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let prerelease = parts
            .into_iter()
            .map(|part| PrereleaseIdentifier::new(part.as_ref()))
            .collect::<Result<_, _>>()
            .map_err(VersionError::Prerelease)?;
        Ok(self.replace_prerelease(prerelease))
    }

    /// Returns this version with the given pre-release identifiers.
    ///
    /// Identifiers are valid by construction, so this cannot fail.
    pub fn with_prerelease_identifiers<I>(&self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = PrereleaseIdentifier>,
    {
        self.replace_prerelease(identifiers.into_iter().collect())
    }

    /// Returns this version with the build metadata parsed from a
    /// dot-joined string. An empty string clears the metadata.
    ///
    /// Metadata is kept verbatim; no numeric policy applies.
    pub fn with_metadata(&self, text: &str) -> Result<Self, VersionError> {
        if text.is_empty() {
            return Ok(self.without_metadata());
        }
        let metadata = text
            .split('.')
            .map(MetadataIdentifier::new)
            .collect::<Result<_, _>>()
            .map_err(VersionError::Metadata)?;
        Ok(self.replace_metadata(metadata))
    }

    /// Returns this version with the build metadata parsed from individual
    /// parts. An empty iterator clears the metadata.
    pub fn with_metadata_parts<I>(&self, parts: I) -> Result<Self, VersionError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let metadata = parts
            .into_iter()
            .map(|part| MetadataIdentifier::new(part.as_ref()))
            .collect::<Result<_, _>>()
            .map_err(VersionError::Metadata)?;
        Ok(self.replace_metadata(metadata))
    }

    /// Returns this version with the given build metadata identifiers.
    ///
    /// Identifiers are valid by construction, so this cannot fail.
    pub fn with_metadata_identifiers<I>(&self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = MetadataIdentifier>,
    {
        self.replace_metadata(identifiers.into_iter().collect())
    }

    /// Returns this version without any pre-release identifiers.
    pub fn without_prerelease(&self) -> Self {
        self.replace_prerelease(Vec::new())
    }

    /// Returns this version without any build metadata.
    pub fn without_metadata(&self) -> Self {
        self.replace_metadata(Vec::new())
    }

    /// Returns the bare `major.minor.patch` version.
    pub fn without_prerelease_or_metadata(&self) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: Vec::new(),
            metadata: Vec::new(),
        }
    }

    fn replace_prerelease(&self, prerelease: Vec<PrereleaseIdentifier>) -> Self {
        let mut version = self.clone();
        version.prerelease = prerelease;
        version
    }

    fn replace_metadata(&self, metadata: Vec<MetadataIdentifier>) -> Self {
        let mut version = self.clone();
        version.metadata = metadata;
        version
    }
}

#[cfg(feature = "parser")]
impl Version {
    /// Parse a string slice into a version, enforcing the strict grammar.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use npm_semver_version::Version;
    /// let version = Version::parse("1.2.3-rc.1+build").unwrap();
    /// assert_eq!(version.to_string(), "1.2.3-rc.1+build");
    ///
    /// assert!(Version::parse("v1.2.3").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, npm_semver_parser::Error<'_>> {
        npm_semver_parser::parse::<Self>(input)
    }

    /// Parse a string slice into a version with the given mode.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use npm_semver_version::Version;
    /// use npm_semver_parser::Mode;
    ///
    /// let version = Version::parse_with("  v1.02.3 ", Mode::Loose).unwrap();
    /// assert_eq!(version.to_string(), "1.2.3");
    /// ```
    pub fn parse_with(
        input: &str,
        mode: npm_semver_parser::Mode,
    ) -> Result<Self, npm_semver_parser::Error<'_>> {
        npm_semver_parser::parse_with::<Self>(input, mode)
    }
}

fn component(value: i32, part: Part) -> Result<i32, VersionError> {
    if value < 0 {
        return Err(VersionError::NegativeComponent(part));
    }
    Ok(value)
}

impl Default for Version {
    fn default() -> Self {
        Version::empty()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }
}

impl hash::Hash for Version {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(
                || match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
                    (true, true) => Ordering::Equal,
                    // a release orders after any of its pre-releases
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => self.prerelease.cmp(&other.prerelease),
                },
            )
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut version = String::with_capacity(16);
        write!(version, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (index, identifier) in self.prerelease.iter().enumerate() {
            version.push(if index == 0 { '-' } else { '.' });
            write!(version, "{}", identifier)?;
        }
        for (index, identifier) in self.metadata.iter().enumerate() {
            version.push(if index == 0 { '+' } else { '.' });
            version.push_str(identifier.as_str());
        }
        f.pad(&version)
    }
}

#[cfg(feature = "parser")]
impl std::str::FromStr for Version {
    type Err = npm_semver_parser::OwnedError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        npm_semver_parser::parse::<Self>(input).map_err(|error| error.owned())
    }
}

#[cfg(feature = "parser")]
impl<'input> npm_semver_parser::VersionBuilder<'input> for Version {
    type Out = Self;

    fn new() -> Self {
        Version::empty()
    }

    fn set_major(&mut self, major: i32) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: i32) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: i32) {
        self.patch = patch;
    }

    fn add_pre_release(&mut self, identifier: npm_semver_parser::Identifier<'input>) {
        self.prerelease.push(match identifier {
            npm_semver_parser::Identifier::Numeric(value) => PrereleaseIdentifier::Numeric(value),
            npm_semver_parser::Identifier::AlphaNumeric(text) => {
                PrereleaseIdentifier::AlphaNumeric(text.into())
            }
        });
    }

    fn add_build(&mut self, build: &'input str) {
        self.metadata.push(MetadataIdentifier::unchecked(build));
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Version;
    use serde::{Serialize, Serializer};

    impl Serialize for Version {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    #[cfg(feature = "parser")]
    mod deserialize {
        use super::Version;
        use serde::de::{self, Deserialize, Deserializer, Visitor};
        use std::fmt;

        impl<'de> Deserialize<'de> for Version {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct VersionVisitor;

                impl Visitor<'_> for VersionVisitor {
                    type Value = Version;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("a semantic version string")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        npm_semver_parser::parse::<Version>(value).map_err(de::Error::custom)
                    }
                }

                deserializer.deserialize_str(VersionVisitor)
            }
        }
    }
}

#[cfg(feature = "semver")]
mod semver_support {
    use super::Version;

    impl From<Version> for semver::Version {
        fn from(version: Version) -> Self {
            let mut converted = semver::Version::new(
                version.major as u64,
                version.minor as u64,
                version.patch as u64,
            );
            if !version.prerelease.is_empty() {
                let text = version
                    .prerelease
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(".");
                converted.pre = match semver::Prerelease::new(&text) {
                    Ok(prerelease) => prerelease,
                    Err(_) => unreachable!("identifiers are validated on construction"),
                };
            }
            if !version.metadata.is_empty() {
                let text = version
                    .metadata
                    .iter()
                    .map(|identifier| identifier.as_str())
                    .collect::<Vec<_>>()
                    .join(".");
                converted.build = match semver::BuildMetadata::new(&text) {
                    Ok(metadata) => metadata,
                    Err(_) => unreachable!("identifiers are validated on construction"),
                };
            }
            converted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn version(input: &str) -> Version {
        Version::parse(input).unwrap()
    }

    #[test]
    fn test_new_rejects_negative_components() {
        assert_eq!(
            Version::new(-1, 0, 0),
            Err(VersionError::NegativeComponent(Part::Major))
        );
        assert_eq!(
            Version::new(0, -1, 0),
            Err(VersionError::NegativeComponent(Part::Minor))
        );
        assert_eq!(
            Version::new(0, 0, i32::MIN),
            Err(VersionError::NegativeComponent(Part::Patch))
        );
    }

    #[test]
    fn test_with_component() {
        let version = version("1.2.3-rc.1+build");
        assert_eq!(version.with_major(2).unwrap().to_string(), "2.2.3-rc.1+build");
        assert_eq!(version.with_minor(0).unwrap().to_string(), "1.0.3-rc.1+build");
        assert_eq!(version.with_patch(9).unwrap().to_string(), "1.2.9-rc.1+build");
        assert_eq!(
            version.with_major(-1),
            Err(VersionError::NegativeComponent(Part::Major))
        );
        assert_eq!(
            version.with_major(i32::MIN),
            Err(VersionError::NegativeComponent(Part::Major))
        );
    }

    #[test_case("rc.1" => "1.2.3-rc.1")]
    #[test_case("0" => "1.2.3-0")]
    #[test_case("alpha-2.x" => "1.2.3-alpha-2.x")]
    #[test_case("" => "1.2.3"; "empty string clears")]
    fn test_with_prerelease(text: &str) -> String {
        version("1.2.3").with_prerelease(text, false).unwrap().to_string()
    }

    #[test]
    fn test_with_prerelease_leading_zeros() {
        let version = version("1.2.3");
        assert_eq!(
            version.with_prerelease("bar.0123", false),
            Err(VersionError::Prerelease(IdentifierError::LeadingZero(
                String::from("0123")
            )))
        );
        assert_eq!(
            version.with_prerelease("bar.0123", true).unwrap().to_string(),
            "1.2.3-bar.123"
        );
    }

    // overflow fails under either leading-zero policy
    #[test_case(false)]
    #[test_case(true)]
    fn test_with_prerelease_overflow(allow_leading_zeros: bool) {
        assert_eq!(
            version("1.2.3").with_prerelease("99999999999999999", allow_leading_zeros),
            Err(VersionError::Prerelease(IdentifierError::TooLarge(
                String::from("99999999999999999")
            )))
        );
    }

    #[test]
    fn test_with_prerelease_parts() {
        let version = version("1.2.3");
        assert_eq!(
            version.with_prerelease_parts(vec!["rc", "1"]).unwrap().to_string(),
            "1.2.3-rc.1"
        );
        assert_eq!(
            version.with_prerelease_parts(Vec::<&str>::new()).unwrap().to_string(),
            "1.2.3"
        );
        assert_eq!(
            version.with_prerelease_parts(vec!["rc.1"]),
            Err(VersionError::Prerelease(IdentifierError::InvalidCharacter(
                String::from("rc.1")
            )))
        );
    }

    #[test]
    fn test_with_prerelease_identifiers() {
        let derived = version("1.2.3").with_prerelease_identifiers(vec![
            PrereleaseIdentifier::AlphaNumeric(String::from("beta")),
            PrereleaseIdentifier::Numeric(7),
        ]);
        assert_eq!(derived.to_string(), "1.2.3-beta.7");
    }

    #[test_case("build.42" => "1.2.3+build.42")]
    #[test_case("0123" => "1.2.3+0123"; "leading zeros preserved")]
    #[test_case("99999999999999999" => "1.2.3+99999999999999999"; "no numeric bound")]
    #[test_case("" => "1.2.3"; "empty string clears")]
    fn test_with_metadata(text: &str) -> String {
        version("1.2.3").with_metadata(text).unwrap().to_string()
    }

    #[test]
    fn test_without() {
        let version = version("1.2.3-rc.1+build");
        assert_eq!(version.without_prerelease().to_string(), "1.2.3+build");
        assert_eq!(version.without_metadata().to_string(), "1.2.3-rc.1");
        assert_eq!(version.without_prerelease_or_metadata().to_string(), "1.2.3");
        // idempotent
        assert_eq!(
            version.without_prerelease().without_prerelease(),
            version.without_prerelease()
        );
    }

    #[test_case("0.0.0")]
    #[test_case("1.2.3")]
    #[test_case("1.2.3-alpha.1")]
    #[test_case("1.2.3-rc-2.x-y")]
    #[test_case("1.2.3+build.42")]
    #[test_case("1.2.3-beta.11+20130313144700")]
    fn test_round_trip(input: &str) {
        assert_eq!(version(input).to_string(), input);
    }

    #[test]
    fn test_loose_parse_normalizes() {
        let version = Version::parse_with("v1.02.3-01", npm_semver_parser::Mode::Loose).unwrap();
        assert_eq!(version.to_string(), "1.2.3-1");
    }

    #[test]
    fn test_precedence_chain() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(
                version(pair[0]) < version(pair[1]),
                "{} should be less than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_equality_ignores_metadata() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let with_build = version("1.2.3+build.1");
        let other_build = version("1.2.3+build.2");
        assert_eq!(with_build, other_build);
        assert_eq!(with_build.cmp(&other_build), Ordering::Equal);

        let hash = |version: &Version| {
            let mut hasher = DefaultHasher::new();
            version.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&with_build), hash(&other_build));
    }

    #[test]
    fn test_is_prerelease() {
        assert!(version("1.2.3-rc.1").is_prerelease());
        assert!(!version("1.2.3").is_prerelease());
        assert!(!version("1.2.3+build").is_prerelease());
    }

    #[test]
    fn test_numeric_orders_before_alphanumeric() {
        assert!(version("1.0.0-1") < version("1.0.0-a"));
        assert!(version("1.0.0-2") < version("1.0.0-11"));
        assert!(version("1.0.0-rc.1") < version("1.0.0-rc.1.1"));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serialize() {
            let version = version("1.2.3-rc.1+build");
            assert_eq!(
                serde_json::to_string(&version).unwrap(),
                r#""1.2.3-rc.1+build""#
            );
        }

        #[test]
        fn test_deserialize() {
            let version: Version = serde_json::from_str(r#""1.2.3-rc.1+build""#).unwrap();
            assert_eq!(version.to_string(), "1.2.3-rc.1+build");
        }

        #[test]
        fn test_deserialize_rejects_invalid() {
            assert!(serde_json::from_str::<Version>(r#""1.2""#).is_err());
            assert!(serde_json::from_str::<Version>("42").is_err());
        }
    }

    #[cfg(feature = "semver")]
    mod semver_tests {
        use super::*;

        #[test]
        fn test_conversion() {
            let converted = semver::Version::from(version("1.2.3-rc.1+build.42"));
            assert_eq!(converted.to_string(), "1.2.3-rc.1+build.42");
        }
    }
}
