//! npm-dialect version ranges.
//!
//! A range is an OR of comparator sets, each set an AND of comparators.
//! The npm shorthands (caret, tilde, x-ranges, hyphen ranges, operators on
//! partial versions) are desugared at parse time into plain `>=`/`<`-style
//! comparators, so matching is a uniform walk over the expanded bounds.
//!
//! Matching applies npm's pre-release visibility rule: a candidate that
//! carries pre-release identifiers satisfies a comparator set only if some
//! comparator in that set has a pre-release bound on the identical
//! `major.minor.patch` triplet. [`RangeOptions::include_all_prerelease`]
//! disables the restriction.
//!
//! ## Examples
//!
//! ```rust
//! use npm_semver_range::Range;
//! use npm_semver_version::Version;
//!
//! let range = Range::parse("^1.2.3").unwrap();
//! assert_eq!(range.to_string(), ">=1.2.3 <2.0.0");
//!
//! assert!(range.includes(&Version::parse("1.9.0").unwrap()));
//! assert!(!range.includes(&Version::parse("2.0.0").unwrap()));
//! assert!(!range.includes(&Version::parse("1.9.0-rc.1").unwrap()));
//! ```
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

use npm_semver_version::{IdentifierError, PrereleaseIdentifier, Version};
use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

/// The comparison operator of a single comparator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    /// Strictly lower precedence than the bound.
    Lt,
    /// Lower or equal precedence.
    Lte,
    /// Strictly greater precedence.
    Gt,
    /// Greater or equal precedence.
    Gte,
    /// Equal precedence (metadata ignored, as always).
    Eq,
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Lt => f.pad("<"),
            Op::Lte => f.pad("<="),
            Op::Gt => f.pad(">"),
            Op::Gte => f.pad(">="),
            // exact comparators print as the bare version, npm style
            Op::Eq => Ok(()),
        }
    }
}

/// One operator+version bound inside a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    op: Op,
    version: Version,
}

impl Comparator {
    /// Constructs a comparator against the given bound.
    ///
    /// Bounds never carry build metadata; any metadata on `version` is
    /// dropped.
    pub fn new(op: Op, version: Version) -> Self {
        Comparator {
            op,
            version: version.without_metadata(),
        }
    }

    /// The comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The version bound.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Whether `version` satisfies this single comparator by ordinary
    /// precedence comparison. The pre-release visibility rule lives at the
    /// set level, not here.
    pub fn matches(&self, version: &Version) -> bool {
        match self.op {
            Op::Lt => version < &self.version,
            Op::Lte => version <= &self.version,
            Op::Gt => version > &self.version,
            Op::Gte => version >= &self.version,
            Op::Eq => version == &self.version,
        }
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut comparator = String::with_capacity(16);
        write!(comparator, "{}{}", self.op, self.version)?;
        f.pad(&comparator)
    }
}

/// A conjunction of comparators: every comparator must hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparatorSet {
    comparators: Vec<Comparator>,
}

impl ComparatorSet {
    /// The expanded comparators of this set.
    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    fn matches(&self, version: &Version, include_all_prerelease: bool) -> bool {
        if !self
            .comparators
            .iter()
            .all(|comparator| comparator.matches(version))
        {
            return false;
        }
        if version.is_prerelease() && !include_all_prerelease {
            return self.allows_prerelease_of(version);
        }
        true
    }

    // a pre-release is unstable for its own triplet only: the set must name
    // a pre-release bound on exactly that triplet to opt in
    fn allows_prerelease_of(&self, version: &Version) -> bool {
        self.comparators.iter().any(|comparator| {
            comparator.version.is_prerelease()
                && comparator.version.major() == version.major()
                && comparator.version.minor() == version.minor()
                && comparator.version.patch() == version.patch()
        })
    }
}

impl Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = String::with_capacity(32);
        for (index, comparator) in self.comparators.iter().enumerate() {
            if index > 0 {
                set.push(' ');
            }
            write!(set, "{}", comparator)?;
        }
        f.pad(&set)
    }
}

/// How a range is parsed and matched.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RangeOptions {
    /// Disables the pre-release visibility rule: all comparisons are purely
    /// by precedence.
    pub include_all_prerelease: bool,
    /// Allows leading zeros on numeric components and pre-release
    /// identifiers of the partial versions in the range text.
    pub loose: bool,
}

/// A disjunction of comparator sets, parsed from npm range syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    sets: Vec<ComparatorSet>,
    options: RangeOptions,
}

impl Range {
    /// Parses a range with the default [`RangeOptions`].
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        Self::parse_with(text, RangeOptions::default())
    }

    /// Parses a range with the given options.
    ///
    /// The text is split on `||` into comparator sets; an empty set matches
    /// everything. Within a set, tokens are whitespace-separated; a `-`
    /// token between two partial versions forms a hyphen range, and a bare
    /// operator applies to the following token.
    pub fn parse_with(text: &str, options: RangeOptions) -> Result<Self, RangeError> {
        let sets = text
            .split("||")
            .map(|set| parse_set(set, options.loose))
            .collect::<Result<_, _>>()?;
        Ok(Range { sets, options })
    }

    /// Parses a range, reporting failure as `None` instead of an error.
    pub fn try_parse(text: &str, options: RangeOptions) -> Option<Self> {
        Self::parse_with(text, options).ok()
    }

    /// Whether `version` is included in this range: at least one comparator
    /// set must be satisfied.
    pub fn includes(&self, version: &Version) -> bool {
        self.sets
            .iter()
            .any(|set| set.matches(version, self.options.include_all_prerelease))
    }

    /// The comparator sets of this range.
    pub fn sets(&self) -> &[ComparatorSet] {
        &self.sets
    }

    /// The options this range was parsed with.
    pub fn options(&self) -> RangeOptions {
        self.options
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut range = String::with_capacity(32);
        for (index, set) in self.sets.iter().enumerate() {
            if index > 0 {
                range.push_str(" || ");
            }
            write!(range, "{}", set)?;
        }
        f.pad(&range)
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Range::parse(text)
    }
}

/// Whether `version` satisfies the range written as `range`.
///
/// An unparseable range satisfies nothing: this entry point reports `false`
/// instead of failing, for callers that treat range strings from untrusted
/// sources as routine input. Use [`Range::parse_with`] to observe the parse
/// error.
pub fn satisfies(version: &Version, range: &str, options: RangeOptions) -> bool {
    Range::parse_with(range, options)
        .map(|range| range.includes(version))
        .unwrap_or(false)
}

/// Why a range could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A token is not a version, partial version, or operator+partial.
    InvalidPartial(String),
    /// An operator token had no version to apply to.
    MissingPartial(String),
    /// A numeric component has a disallowed leading zero.
    LeadingZero(String),
    /// A numeric component does not fit into a 32-bit integer, either as
    /// written or after computing the exclusive upper bound.
    NumberOverflow(String),
}

impl Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidPartial(token) => {
                write!(f, "not a valid version or partial version: `{}`", token)
            }
            RangeError::MissingPartial(op) => {
                write!(f, "the `{}` operator is missing a version to apply to", op)
            }
            RangeError::LeadingZero(literal) => write!(
                f,
                "leading zeros are not allowed on version components: `{}`",
                literal
            ),
            RangeError::NumberOverflow(literal) => write!(
                f,
                "version component does not fit into a 32-bit integer: `{}`",
                literal
            ),
        }
    }
}

impl std::error::Error for RangeError {}

fn parse_set(text: &str, loose: bool) -> Result<ComparatorSet, RangeError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut comparators = Vec::new();
    let mut index = 0;
    while index < tokens.len() {
        // hyphen ranges take precedence over independent tokens
        if index + 2 < tokens.len() && tokens[index + 1] == "-" {
            let lower = parse_partial(tokens[index], loose)?;
            let upper = parse_partial(tokens[index + 2], loose)?;
            hyphen_range(lower, upper, &mut comparators)?;
            index += 3;
            continue;
        }
        let token = tokens[index];
        let (op, partial_text) = split_operator(token);
        let partial_text = if partial_text.is_empty() && !op.is_empty() {
            // a bare operator consumes the next token
            index += 1;
            *tokens
                .get(index)
                .ok_or_else(|| RangeError::MissingPartial(op.into()))?
        } else {
            partial_text
        };
        let partial = parse_partial(partial_text, loose)?;
        desugar(op, partial, &mut comparators)?;
        index += 1;
    }
    if comparators.is_empty() {
        comparators.push(Comparator::new(Op::Gte, release(0, 0, 0)));
    }
    Ok(ComparatorSet { comparators })
}

fn split_operator(token: &str) -> (&str, &str) {
    for op in &["<=", ">=", "~>", "<", ">", "=", "^", "~"] {
        if let Some(rest) = token.strip_prefix(op) {
            return (op, rest);
        }
    }
    ("", token)
}

#[derive(Debug)]
struct Partial {
    precision: Precision,
    prerelease: Vec<PrereleaseIdentifier>,
}

#[derive(Debug, Copy, Clone)]
enum Precision {
    Wildcard,
    Major(i32),
    MajorMinor(i32, i32),
    Full(i32, i32, i32),
}

fn parse_partial(token: &str, loose: bool) -> Result<Partial, RangeError> {
    let text = token
        .strip_prefix('v')
        .or_else(|| token.strip_prefix('V'))
        .unwrap_or(token);
    let (text, build) = match text.split_once('+') {
        Some((text, build)) => (text, Some(build)),
        None => (text, None),
    };
    // build metadata is validated, then discarded: it never affects bounds
    if let Some(build) = build {
        let valid = !build.is_empty()
            && build.split('.').all(|part| {
                !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            });
        if !valid {
            return Err(RangeError::InvalidPartial(token.into()));
        }
    }
    let (core, prerelease) = match text.split_once('-') {
        Some((core, prerelease)) => (core, Some(prerelease)),
        None => (text, None),
    };
    let mut components = Vec::new();
    let mut wildcard = false;
    for segment in core.split('.') {
        if components.len() == 3 {
            return Err(RangeError::InvalidPartial(token.into()));
        }
        if matches!(segment, "x" | "X" | "*") {
            // `1.x.3` widens to `1.x`: everything after the wildcard is moot
            wildcard = true;
            break;
        }
        components.push(parse_component(segment, loose, token)?);
    }
    let precision = match *components.as_slice() {
        [] => {
            debug_assert!(wildcard);
            Precision::Wildcard
        }
        [major] => Precision::Major(major),
        [major, minor] => Precision::MajorMinor(major, minor),
        [major, minor, patch] => Precision::Full(major, minor, patch),
        _ => return Err(RangeError::InvalidPartial(token.into())),
    };
    let prerelease = match (precision, prerelease) {
        // a pre-release tag needs a concrete patch to attach to
        (Precision::Full(..), Some(prerelease)) => parse_prerelease(prerelease, loose, token)?,
        _ => Vec::new(),
    };
    Ok(Partial {
        precision,
        prerelease,
    })
}

fn parse_component(segment: &str, loose: bool, token: &str) -> Result<i32, RangeError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::InvalidPartial(token.into()));
    }
    let digits = if segment.len() > 1 && segment.starts_with('0') {
        if !loose {
            return Err(RangeError::LeadingZero(segment.into()));
        }
        let stripped = segment.trim_start_matches('0');
        if stripped.is_empty() {
            return Ok(0);
        }
        stripped
    } else {
        segment
    };
    digits
        .parse()
        .map_err(|_| RangeError::NumberOverflow(segment.into()))
}

fn parse_prerelease(
    text: &str,
    loose: bool,
    token: &str,
) -> Result<Vec<PrereleaseIdentifier>, RangeError> {
    text.split('.')
        .map(|part| {
            let identifier = if loose {
                PrereleaseIdentifier::with_leading_zeros(part)
            } else {
                PrereleaseIdentifier::new(part)
            };
            identifier.map_err(|error| match error {
                IdentifierError::TooLarge(literal) => RangeError::NumberOverflow(literal),
                IdentifierError::LeadingZero(literal) => RangeError::LeadingZero(literal),
                _ => RangeError::InvalidPartial(token.into()),
            })
        })
        .collect()
}

fn desugar(op: &str, partial: Partial, out: &mut Vec<Comparator>) -> Result<(), RangeError> {
    match op {
        "" | "=" => exact_range(partial, out),
        "^" => caret_range(partial, out),
        "~" | "~>" => tilde_range(partial, out),
        primitive => primitive_range(primitive, partial, out),
    }
}

fn exact_range(partial: Partial, out: &mut Vec<Comparator>) -> Result<(), RangeError> {
    match partial.precision {
        Precision::Wildcard => out.push(Comparator::new(Op::Gte, release(0, 0, 0))),
        Precision::Major(major) => {
            out.push(Comparator::new(Op::Gte, release(major, 0, 0)));
            out.push(Comparator::new(
                Op::Lt,
                release(bump(major)?, 0, 0),
            ));
        }
        Precision::MajorMinor(major, minor) => {
            out.push(Comparator::new(Op::Gte, release(major, minor, 0)));
            out.push(Comparator::new(
                Op::Lt,
                release(major, bump(minor)?, 0),
            ));
        }
        Precision::Full(major, minor, patch) => out.push(Comparator::new(
            Op::Eq,
            bound(major, minor, patch, partial.prerelease),
        )),
    }
    Ok(())
}

fn caret_range(partial: Partial, out: &mut Vec<Comparator>) -> Result<(), RangeError> {
    match partial.precision {
        Precision::Wildcard => out.push(Comparator::new(Op::Gte, release(0, 0, 0))),
        Precision::Major(major) => {
            out.push(Comparator::new(Op::Gte, release(major, 0, 0)));
            out.push(Comparator::new(
                Op::Lt,
                release(bump(major)?, 0, 0),
            ));
        }
        Precision::MajorMinor(major, minor) => {
            out.push(Comparator::new(Op::Gte, release(major, minor, 0)));
            let upper = if major > 0 {
                release(bump(major)?, 0, 0)
            } else {
                release(0, bump(minor)?, 0)
            };
            out.push(Comparator::new(Op::Lt, upper));
        }
        Precision::Full(major, minor, patch) => {
            // pin the leftmost non-zero component
            let upper = if major > 0 {
                release(bump(major)?, 0, 0)
            } else if minor > 0 {
                release(0, bump(minor)?, 0)
            } else {
                release(0, 0, bump(patch)?)
            };
            out.push(Comparator::new(
                Op::Gte,
                bound(major, minor, patch, partial.prerelease),
            ));
            out.push(Comparator::new(Op::Lt, upper));
        }
    }
    Ok(())
}

fn tilde_range(partial: Partial, out: &mut Vec<Comparator>) -> Result<(), RangeError> {
    match partial.precision {
        Precision::Wildcard => out.push(Comparator::new(Op::Gte, release(0, 0, 0))),
        Precision::Major(major) => {
            out.push(Comparator::new(Op::Gte, release(major, 0, 0)));
            out.push(Comparator::new(
                Op::Lt,
                release(bump(major)?, 0, 0),
            ));
        }
        Precision::MajorMinor(major, minor) | Precision::Full(major, minor, _) => {
            let lower = match partial.precision {
                Precision::Full(major, minor, patch) => {
                    bound(major, minor, patch, partial.prerelease)
                }
                _ => release(major, minor, 0),
            };
            out.push(Comparator::new(Op::Gte, lower));
            out.push(Comparator::new(
                Op::Lt,
                release(major, bump(minor)?, 0),
            ));
        }
    }
    Ok(())
}

fn primitive_range(op: &str, partial: Partial, out: &mut Vec<Comparator>) -> Result<(), RangeError> {
    let comparator = match partial.precision {
        Precision::Wildcard => match op {
            // nothing is below every version, so `>*` and `<*` match nothing
            ">" | "<" => Comparator::new(Op::Lt, release(0, 0, 0)),
            _ => Comparator::new(Op::Gte, release(0, 0, 0)),
        },
        Precision::Major(major) => match op {
            ">" => Comparator::new(Op::Gte, release(bump(major)?, 0, 0)),
            ">=" => Comparator::new(Op::Gte, release(major, 0, 0)),
            "<" => Comparator::new(Op::Lt, release(major, 0, 0)),
            "<=" => Comparator::new(Op::Lt, release(bump(major)?, 0, 0)),
            _ => unreachable!("split_operator only yields known operators"),
        },
        Precision::MajorMinor(major, minor) => match op {
            ">" => Comparator::new(Op::Gte, release(major, bump(minor)?, 0)),
            ">=" => Comparator::new(Op::Gte, release(major, minor, 0)),
            "<" => Comparator::new(Op::Lt, release(major, minor, 0)),
            "<=" => Comparator::new(Op::Lt, release(major, bump(minor)?, 0)),
            _ => unreachable!("split_operator only yields known operators"),
        },
        Precision::Full(major, minor, patch) => {
            let bound = bound(major, minor, patch, partial.prerelease);
            let op = match op {
                ">" => Op::Gt,
                ">=" => Op::Gte,
                "<" => Op::Lt,
                "<=" => Op::Lte,
                _ => unreachable!("split_operator only yields known operators"),
            };
            Comparator::new(op, bound)
        }
    };
    out.push(comparator);
    Ok(())
}

fn hyphen_range(
    lower: Partial,
    upper: Partial,
    out: &mut Vec<Comparator>,
) -> Result<(), RangeError> {
    match lower.precision {
        Precision::Wildcard => {}
        Precision::Major(major) => out.push(Comparator::new(Op::Gte, release(major, 0, 0))),
        Precision::MajorMinor(major, minor) => {
            out.push(Comparator::new(Op::Gte, release(major, minor, 0)))
        }
        Precision::Full(major, minor, patch) => out.push(Comparator::new(
            Op::Gte,
            bound(major, minor, patch, lower.prerelease),
        )),
    }
    match upper.precision {
        Precision::Wildcard => {}
        // a partial upper end is exclusive at the next version of its precision
        Precision::Major(major) => out.push(Comparator::new(
            Op::Lt,
            release(bump(major)?, 0, 0),
        )),
        Precision::MajorMinor(major, minor) => out.push(Comparator::new(
            Op::Lt,
            release(major, bump(minor)?, 0),
        )),
        Precision::Full(major, minor, patch) => out.push(Comparator::new(
            Op::Lte,
            bound(major, minor, patch, upper.prerelease),
        )),
    }
    Ok(())
}

// the error names the component whose upper bound cannot be represented
fn bump(value: i32) -> Result<i32, RangeError> {
    value
        .checked_add(1)
        .ok_or_else(|| RangeError::NumberOverflow(value.to_string()))
}

fn release(major: i32, minor: i32, patch: i32) -> Version {
    bound(major, minor, patch, Vec::new())
}

fn bound(major: i32, minor: i32, patch: i32, prerelease: Vec<PrereleaseIdentifier>) -> Version {
    let version = match Version::new(major, minor, patch) {
        Ok(version) => version,
        Err(_) => unreachable!("bounds are built from validated non-negative components"),
    };
    if prerelease.is_empty() {
        version
    } else {
        version.with_prerelease_identifiers(prerelease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn v(input: &str) -> Version {
        Version::parse(input).unwrap()
    }

    fn loose() -> RangeOptions {
        RangeOptions {
            include_all_prerelease: false,
            loose: true,
        }
    }

    fn all_prerelease() -> RangeOptions {
        RangeOptions {
            include_all_prerelease: true,
            loose: false,
        }
    }

    #[test_case("" => ">=0.0.0"; "empty string")]
    #[test_case("*" => ">=0.0.0"; "lone star")]
    #[test_case("x" => ">=0.0.0"; "lowercase x")]
    #[test_case("X" => ">=0.0.0"; "uppercase x")]
    #[test_case("1" => ">=1.0.0 <2.0.0")]
    #[test_case("1.2" => ">=1.2.0 <1.3.0")]
    #[test_case("1.2.x" => ">=1.2.0 <1.3.0")]
    #[test_case("1.x" => ">=1.0.0 <2.0.0")]
    #[test_case("1.x.3" => ">=1.0.0 <2.0.0"; "wildcard truncates the rest")]
    #[test_case("1.2.3" => "1.2.3")]
    #[test_case("=1.2.3" => "1.2.3"; "leading equals sign")]
    #[test_case("v1.2.3" => "1.2.3")]
    #[test_case("1.2.3-rc.1" => "1.2.3-rc.1")]
    #[test_case("1.2.3+build.5" => "1.2.3"; "build metadata is discarded")]
    fn test_xrange_desugar(range: &str) -> String {
        Range::parse(range).unwrap().to_string()
    }

    #[test_case("^1.2.3" => ">=1.2.3 <2.0.0")]
    #[test_case("^0.2.3" => ">=0.2.3 <0.3.0")]
    #[test_case("^0.0.3" => ">=0.0.3 <0.0.4")]
    #[test_case("^1.2.3-rc.1" => ">=1.2.3-rc.1 <2.0.0")]
    #[test_case("^0.0" => ">=0.0.0 <0.1.0")]
    #[test_case("^0.2" => ">=0.2.0 <0.3.0")]
    #[test_case("^1.2" => ">=1.2.0 <2.0.0")]
    #[test_case("^1" => ">=1.0.0 <2.0.0")]
    #[test_case("^*" => ">=0.0.0")]
    #[test_case("^ 1.2.3" => ">=1.2.3 <2.0.0"; "operator detached from version")]
    fn test_caret_desugar(range: &str) -> String {
        Range::parse(range).unwrap().to_string()
    }

    #[test_case("~1.2.3" => ">=1.2.3 <1.3.0")]
    #[test_case("~1.2" => ">=1.2.0 <1.3.0")]
    #[test_case("~1" => ">=1.0.0 <2.0.0")]
    #[test_case("~0.2.3" => ">=0.2.3 <0.3.0")]
    #[test_case("~1.2.3-beta.2" => ">=1.2.3-beta.2 <1.3.0")]
    #[test_case("~*" => ">=0.0.0")]
    #[test_case("~>1.2.3" => ">=1.2.3 <1.3.0"; "twiddle arrow is tilde")]
    fn test_tilde_desugar(range: &str) -> String {
        Range::parse(range).unwrap().to_string()
    }

    #[test_case(">1.2.3" => ">1.2.3"; "gt full")]
    #[test_case(">=1.2.3" => ">=1.2.3"; "gte full")]
    #[test_case("<1.2.3" => "<1.2.3"; "lt full")]
    #[test_case("<=1.2.3" => "<=1.2.3"; "lte full")]
    #[test_case(">1" => ">=2.0.0"; "gt major")]
    #[test_case(">1.2" => ">=1.3.0"; "gt major minor")]
    #[test_case(">=1" => ">=1.0.0"; "gte major")]
    #[test_case(">=1.2" => ">=1.2.0"; "gte major minor")]
    #[test_case("<1" => "<1.0.0"; "lt major")]
    #[test_case("<1.2" => "<1.2.0"; "lt major minor")]
    #[test_case("<=1" => "<2.0.0"; "lte major")]
    #[test_case("<=1.2" => "<1.3.0"; "lte major minor")]
    #[test_case(">*" => "<0.0.0"; "gt star")]
    #[test_case("<*" => "<0.0.0"; "lt star")]
    #[test_case(">=*" => ">=0.0.0"; "gte star")]
    #[test_case("<=*" => ">=0.0.0"; "lte star")]
    #[test_case(">=1.2.3 <2.0.0" => ">=1.2.3 <2.0.0")]
    fn test_primitive_desugar(range: &str) -> String {
        Range::parse(range).unwrap().to_string()
    }

    #[test_case("1.2.3 - 2.3.4" => ">=1.2.3 <=2.3.4")]
    #[test_case("1.2 - 2.3.4" => ">=1.2.0 <=2.3.4")]
    #[test_case("1.2.3 - 2.3" => ">=1.2.3 <2.4.0")]
    #[test_case("1.2.3 - 2" => ">=1.2.3 <3.0.0")]
    #[test_case("* - 2.3.4" => "<=2.3.4")]
    #[test_case("1.2.3 - *" => ">=1.2.3")]
    #[test_case("* - *" => ">=0.0.0")]
    #[test_case("1.2.4-beta - 1.3.0" => ">=1.2.4-beta <=1.3.0")]
    fn test_hyphen_desugar(range: &str) -> String {
        Range::parse(range).unwrap().to_string()
    }

    #[test_case("1.2.3 || 4.5.6" => "1.2.3 || 4.5.6")]
    #[test_case("^1 || ^2" => ">=1.0.0 <2.0.0 || >=2.0.0 <3.0.0")]
    #[test_case("||" => ">=0.0.0 || >=0.0.0"; "empty sets match everything")]
    fn test_or_sets(range: &str) -> String {
        Range::parse(range).unwrap().to_string()
    }

    #[test_case("foo" => RangeError::InvalidPartial(String::from("foo")))]
    #[test_case("1.2.3.4" => RangeError::InvalidPartial(String::from("1.2.3.4")))]
    #[test_case("1..3" => RangeError::InvalidPartial(String::from("1..3")))]
    #[test_case("1.2.3-" => RangeError::InvalidPartial(String::from("1.2.3-")); "trailing hyphen")]
    #[test_case("1.2.3+" => RangeError::InvalidPartial(String::from("1.2.3+")); "trailing plus")]
    #[test_case("1.2.3 - " => RangeError::InvalidPartial(String::from("-")); "dangling hyphen")]
    #[test_case(">=" => RangeError::MissingPartial(String::from(">=")); "bare gte")]
    #[test_case("^" => RangeError::MissingPartial(String::from("^")); "bare caret")]
    #[test_case("01.2.3" => RangeError::LeadingZero(String::from("01")))]
    #[test_case("1.2.3-01" => RangeError::LeadingZero(String::from("01")))]
    #[test_case("2147483648" => RangeError::NumberOverflow(String::from("2147483648")))]
    #[test_case("1.2.3-99999999999999999" => RangeError::NumberOverflow(String::from("99999999999999999")))]
    #[test_case(">2147483647" => RangeError::NumberOverflow(String::from("2147483647")); "bound arithmetic overflows")]
    #[test_case("^2147483647.0.0" => RangeError::NumberOverflow(String::from("2147483647")); "the offending component is named")]
    #[test_case("<=1.2147483647" => RangeError::NumberOverflow(String::from("2147483647")); "overflow on the minor bound")]
    fn test_parse_errors(range: &str) -> RangeError {
        Range::parse(range).unwrap_err()
    }

    #[test_case("01.2.3" => "1.2.3"; "leading zero on a full version")]
    #[test_case("v01.02.3" => "1.2.3"; "leading v and zeros")]
    #[test_case("01.2" => ">=1.2.0 <1.3.0"; "leading zero on a partial")]
    #[test_case("1.2.3-01" => "1.2.3-1"; "leading zero on a pre-release")]
    fn test_loose_parsing(range: &str) -> String {
        Range::parse_with(range, loose()).unwrap().to_string()
    }

    #[test]
    fn test_loose_does_not_excuse_overflow() {
        assert_eq!(
            Range::parse_with("099999999999999999", loose()),
            Err(RangeError::NumberOverflow(String::from(
                "099999999999999999"
            )))
        );
    }

    #[test_case("^1.2.3", "1.9.0" => true)]
    #[test_case("^1.2.3", "1.2.3" => true; "caret matches its own base")]
    #[test_case("^1.2.3", "1.2.2" => false)]
    #[test_case("^1.2.3", "2.0.0" => false)]
    #[test_case("^0.2.3", "0.2.9" => true)]
    #[test_case("^0.2.3", "0.3.0" => false)]
    #[test_case("~1.2.3", "1.2.9" => true)]
    #[test_case("~1.2.3", "1.3.0" => false)]
    #[test_case("1.2.3 - 2.3.0", "2.3.0" => true)]
    #[test_case("1.2.3 - 2.3.0", "2.4.0" => false)]
    #[test_case("1.2.x", "1.2.99" => true)]
    #[test_case("1.2.x", "1.3.0" => false)]
    #[test_case("*", "99.99.99" => true)]
    #[test_case(">1", "2.0.0" => true)]
    #[test_case(">1", "1.9.9" => false)]
    #[test_case("1.2.3 || 4.5.6", "4.5.6" => true)]
    #[test_case("1.2.3 || 4.5.6", "3.0.0" => false)]
    #[test_case("=1.2.3", "1.2.3" => true)]
    #[test_case("1.2.3", "1.2.3+build.7" => true; "candidate metadata is ignored")]
    fn test_includes(range: &str, version: &str) -> bool {
        Range::parse(range).unwrap().includes(&v(version))
    }

    #[test_case("^1.2.3", "1.2.4-beta" => false; "no prerelease bound on that triplet")]
    #[test_case("^1.2.3", "1.9.0-rc.1" => false)]
    #[test_case("^1.2.3-rc", "1.2.3-rc.2" => true; "same triplet opts in")]
    #[test_case("^1.2.3-rc", "1.2.4-rc" => false; "different triplet stays hidden")]
    #[test_case("1.2.4-beta - 1.3.0", "1.2.4-beta" => true)]
    #[test_case(">1.2.3-alpha", "1.2.3-beta" => true)]
    #[test_case(">1.2.3-alpha", "3.4.5-alpha.9" => false)]
    fn test_prerelease_visibility(range: &str, version: &str) -> bool {
        Range::parse(range).unwrap().includes(&v(version))
    }

    #[test_case("^1.2.3", "1.2.4-beta" => true)]
    #[test_case("^1.2.3", "1.9.0-rc.1" => true)]
    #[test_case("^1.2.3", "2.0.0-rc.1" => true; "below the exclusive bound by precedence")]
    #[test_case("^1.2.3", "2.0.0" => false)]
    fn test_include_all_prerelease(range: &str, version: &str) -> bool {
        Range::parse_with(range, all_prerelease())
            .unwrap()
            .includes(&v(version))
    }

    // the rule applies per set: only the satisfied set needs the opt-in
    #[test]
    fn test_prerelease_visibility_is_per_set() {
        let range = Range::parse("^1.2.3-rc || ^2.0.0").unwrap();
        assert!(range.includes(&v("1.2.3-rc.5")));
        assert!(!range.includes(&v("2.0.1-rc.1")));
    }

    #[test]
    fn test_try_parse() {
        assert!(Range::try_parse("^1.2.3", RangeOptions::default()).is_some());
        assert!(Range::try_parse("not a range", RangeOptions::default()).is_none());
    }

    #[test]
    fn test_satisfies() {
        let version = v("1.9.0");
        assert!(satisfies(&version, "^1.2.3", RangeOptions::default()));
        assert!(!satisfies(&version, "^2.0.0", RangeOptions::default()));
        // unparseable ranges satisfy nothing instead of failing
        assert!(!satisfies(&version, "not a range", RangeOptions::default()));
    }

    #[test]
    fn test_comparator_accessors() {
        let range = Range::parse("^1.2.3").unwrap();
        let comparators = range.sets()[0].comparators();
        assert_eq!(comparators[0].op(), Op::Gte);
        assert_eq!(comparators[0].version(), &v("1.2.3"));
        assert_eq!(comparators[1].op(), Op::Lt);
        assert_eq!(comparators[1].version(), &v("2.0.0"));
    }

    #[test]
    fn test_comparator_drops_metadata() {
        let comparator = Comparator::new(Op::Eq, v("1.2.3+build"));
        assert!(comparator.version().metadata().is_empty());
    }
}
