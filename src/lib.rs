//! Strict Semantic Version numbers with npm-compatible range matching.
//!
//! ## Overview
//!
//! This crate bundles three pieces:
//!
//! - a [`Version`] value type with validated derivations and SemVer
//!   precedence ordering,
//! - a strict/loose parser for version strings,
//! - npm-dialect [`Range`]s (caret, tilde, x-ranges, hyphen ranges, `||`)
//!   with npm's pre-release visibility rule.
//!
//! ## Examples
//!
//! ```rust
//! use npm_semver::{Range, Version};
//!
//! let version = npm_semver::parse("1.2.3-rc.1").unwrap();
//! assert!(version.is_prerelease());
//! assert!(version < Version::new(1, 2, 3).unwrap());
//!
//! // loose parsing normalizes instead of rejecting
//! assert!(npm_semver::parse("v1.02.3").is_err());
//! assert_eq!(
//!     npm_semver::parse_loose("v1.02.3").unwrap(),
//!     Version::new(1, 2, 3).unwrap()
//! );
//!
//! let range = Range::parse("^1.2.3").unwrap();
//! assert!(range.includes(&npm_semver::parse("1.9.0").unwrap()));
//! assert!(!range.includes(&npm_semver::parse("2.0.0").unwrap()));
//!
//! // the permissive entry point reports bad ranges as non-matches
//! assert!(npm_semver::satisfies(&version, "^1.2.3-rc"));
//! assert!(!npm_semver::satisfies(&version, "not a range"));
//! ```
//!
//! ## Features
//!
//! - `serde`: `Version` serializes as its string form and deserializes
//!   through the strict parser.
//! - `semver`: conversion from [`Version`] into [`semver::Version`].

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

pub use npm_semver_parser::{Error, ErrorKind, Identifier, Mode, OwnedError, VersionBuilder};
pub use npm_semver_range::{Comparator, ComparatorSet, Op, Range, RangeError, RangeOptions};
pub use npm_semver_version::{
    IdentifierError, MetadataIdentifier, Part, PrereleaseIdentifier, Version, VersionError,
};

/// Parse a string slice into a [`Version`], enforcing the strict SemVer
/// 2.0.0 grammar.
///
/// ## Examples
///
/// ```rust
/// let version = npm_semver::parse("1.2.3-rc.1+build").unwrap();
/// assert_eq!(version.to_string(), "1.2.3-rc.1+build");
///
/// assert!(npm_semver::parse("1.2").is_err());
/// assert!(npm_semver::parse("v1.2.3").is_err());
/// ```
pub fn parse(input: &str) -> Result<Version, Error<'_>> {
    npm_semver_parser::parse::<Version>(input)
}

/// Parse a string slice into a [`Version`], also accepting surrounding
/// whitespace, one leading `v`/`V`, and leading zeros on numeric components.
///
/// ## Examples
///
/// ```rust
/// let version = npm_semver::parse_loose("  v1.02.3-01 ").unwrap();
/// assert_eq!(version.to_string(), "1.2.3-1");
/// ```
pub fn parse_loose(input: &str) -> Result<Version, Error<'_>> {
    npm_semver_parser::parse_with::<Version>(input, Mode::Loose)
}

/// Parse a string slice into any [`VersionBuilder`] with the strict grammar.
///
/// Use this to validate or project a version without building a full
/// [`Version`].
///
/// ## Examples
///
/// ```rust
/// use npm_semver::{Identifier, VersionBuilder};
///
/// struct IsPreRelease(bool);
///
/// impl VersionBuilder<'_> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///         IsPreRelease(false)
///     }
///
///     fn add_pre_release(&mut self, _identifier: Identifier<'_>) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert_eq!(npm_semver::parse_into::<IsPreRelease>("1.2.3-pre"), Ok(true));
/// assert_eq!(npm_semver::parse_into::<IsPreRelease>("1.2.3"), Ok(false));
/// ```
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    npm_semver_parser::parse::<V>(input)
}

/// Parse npm range syntax into a [`Range`] with the default options.
///
/// ## Examples
///
/// ```rust
/// let range = npm_semver::parse_range("1.2.3 - 2.3").unwrap();
/// assert_eq!(range.to_string(), ">=1.2.3 <2.4.0");
/// ```
pub fn parse_range(input: &str) -> Result<Range, RangeError> {
    Range::parse(input)
}

/// Parse npm range syntax into a [`Range`] with the given options.
pub fn parse_range_with(input: &str, options: RangeOptions) -> Result<Range, RangeError> {
    Range::parse_with(input, options)
}

/// Parse npm range syntax, reporting failure as `None` instead of an error.
pub fn try_parse_range(input: &str, options: RangeOptions) -> Option<Range> {
    Range::try_parse(input, options)
}

/// Whether `version` satisfies the range written as `range`, with the
/// default options.
///
/// An unparseable range satisfies nothing; use [`parse_range`] to observe
/// the parse error.
pub fn satisfies(version: &Version, range: &str) -> bool {
    npm_semver_range::satisfies(version, range, RangeOptions::default())
}

/// Whether `version` satisfies the range written as `range`, with the given
/// options.
///
/// ## Examples
///
/// ```rust
/// use npm_semver::RangeOptions;
///
/// let version = npm_semver::parse("1.9.0-rc.1").unwrap();
/// assert!(!npm_semver::satisfies(&version, "^1.2.3"));
///
/// let options = RangeOptions {
///     include_all_prerelease: true,
///     ..RangeOptions::default()
/// };
/// assert!(npm_semver::satisfies_with(&version, "^1.2.3", options));
/// ```
pub fn satisfies_with(version: &Version, range: &str, options: RangeOptions) -> bool {
    npm_semver_range::satisfies(version, range, options)
}
