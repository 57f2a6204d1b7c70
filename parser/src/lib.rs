//! Strict parser for Semantic Version numbers.
//!
//! The grammar is SemVer 2.0.0, character for character:
//! `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
//!
//! [`Mode::Loose`] additionally accepts surrounding ASCII whitespace, one
//! leading `v` or `V`, and leading zeros on numeric components and numeric
//! pre-release identifiers. Leading zeros are normalized away, the numeric
//! value is kept.
//!
//! ## Examples
//!
//! ```rust
//! use npm_semver_parser::{Identifier, Mode, VersionBuilder};
//!
//! /// Simple version struct that only tracks the numbers.
//! #[derive(Debug, Default, PartialEq, Eq)]
//! struct Triplet(i32, i32, i32);
//!
//! impl VersionBuilder<'_> for Triplet {
//!     type Out = Self;
//!
//!     fn new() -> Self {
//!         Self::default()
//!     }
//!
//!     fn set_major(&mut self, major: i32) {
//!         self.0 = major;
//!     }
//!
//!     fn set_minor(&mut self, minor: i32) {
//!         self.1 = minor;
//!     }
//!
//!     fn set_patch(&mut self, patch: i32) {
//!         self.2 = patch;
//!     }
//!
//!     fn build(self) -> Self::Out {
//!         self
//!     }
//! }
//!
//! assert_eq!(
//!     npm_semver_parser::parse::<Triplet>("1.2.3-rc.1+build.42"),
//!     Ok(Triplet(1, 2, 3))
//! );
//!
//! // strict mode rejects what loose mode normalizes
//! assert!(npm_semver_parser::parse::<Triplet>("v1.02.3").is_err());
//! assert_eq!(
//!     npm_semver_parser::parse_with::<Triplet>("v1.02.3", Mode::Loose),
//!     Ok(Triplet(1, 2, 3))
//! );
//!
//! // errors carry the offending input
//! let error = npm_semver_parser::parse::<Triplet>("1.2.3-01").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "The pre-release identifier must not have a leading zero: `01`"
//! );
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

use std::{
    fmt::{self, Display},
    ops::Range,
};

/// How strictly the input grammar is enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Character-for-character SemVer 2.0.0.
    Strict,
    /// Also accepts surrounding ASCII whitespace, one leading `v` or `V`,
    /// and leading zeros on numeric components and numeric pre-release
    /// identifiers. The leading zeros are stripped, the numeric value is kept.
    Loose,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Strict
    }
}

/// Parse a string slice into a version, enforcing the strict grammar.
///
/// Equivalent to [`parse_with`] with [`Mode::Strict`].
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    parse_with::<V>(input, Mode::Strict)
}

/// Parse a string slice into a version with the given [`Mode`].
pub fn parse_with<'input, V>(input: &'input str, mode: Mode) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    Parser::new(input, mode)
        .run::<V>()
        .map_err(|ErrorSpan { error, span }| Error { input, span, error })
}

/// A single validated pre-release identifier, classified by the parser.
///
/// All-digits identifiers are parsed into their numeric value, which has
/// already been checked against the leading-zero and overflow policy.
/// Everything else is passed through as a slice of the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Identifier<'input> {
    /// An all-digits identifier; compares by magnitude.
    Numeric(i32),
    /// Any other identifier; compares by ASCII ordinal string order.
    AlphaNumeric(&'input str),
}

impl Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => Display::fmt(value, f),
            Identifier::AlphaNumeric(text) => f.pad(text),
        }
    }
}

/// Trait to abstract over version building.
///
/// The trait is generic over the lifetime of the input string, so that one
/// can parse into a version without having to allocate.
///
/// Most methods have a default implementation that does nothing and ignores
/// the input. This can be used to implement some form of validation without
/// needing to keep the result.
///
/// ## Example
///
/// ```rust
/// # use npm_semver_parser::{Identifier, VersionBuilder};
///
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///        IsPreRelease(false)
///     }
///
///     fn add_pre_release(&mut self, _identifier: Identifier<'input>) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// fn is_pre_release(v: &str) -> bool {
///     npm_semver_parser::parse::<IsPreRelease>(v).unwrap_or_default()
/// }
///
/// assert!(is_pre_release("1.2.3-pre"));
/// assert!(!is_pre_release("1.2.3"));
/// assert!(!is_pre_release("1.2.3+build"));
/// ```
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from
    /// [`VersionBuilder::build`] at this point) should represent "0.0.0".
    fn new() -> Self;

    /// Set the major version component.
    ///
    /// The component has been validated as a non-negative number
    /// without a disallowed leading zero.
    #[allow(unused)]
    fn set_major(&mut self, major: i32) {}

    /// Set the minor version component.
    ///
    /// The component has been validated as a non-negative number
    /// without a disallowed leading zero.
    #[allow(unused)]
    fn set_minor(&mut self, minor: i32) {}

    /// Set the patch version component.
    ///
    /// The component has been validated as a non-negative number
    /// without a disallowed leading zero.
    #[allow(unused)]
    fn set_patch(&mut self, patch: i32) {}

    /// Add a pre-release identifier.
    ///
    /// The identifier has been fully validated, including the leading-zero
    /// and 32-bit overflow policy for numeric identifiers.
    ///
    /// This method might be called multiple times, once per dot-separated
    /// identifier in input order.
    #[allow(unused)]
    fn add_pre_release(&mut self, identifier: Identifier<'input>) {}

    /// Add a build metadata identifier.
    ///
    /// The string is a non-empty run of `[0-9A-Za-z-]`. Build identifiers
    /// are never treated as numbers, so no leading-zero or overflow policy
    /// applies.
    ///
    /// This method might be called multiple times, once per dot-separated
    /// identifier in input order.
    #[allow(unused)]
    fn add_build(&mut self, build: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Possible errors that happen during parsing
/// and the location of the token where the error occurred.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorType,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use npm_semver_parser::{ErrorKind, VersionBuilder};
    /// # #[derive(Debug)] struct V;
    /// # impl VersionBuilder<'_> for V {
    /// #     type Out = ();
    /// #     fn new() -> Self { V }
    /// #     fn build(self) -> Self::Out {}
    /// # }
    /// assert_eq!(
    ///     npm_semver_parser::parse::<V>("").unwrap_err().error_kind(),
    ///     ErrorKind::MissingMajorNumber
    /// );
    /// assert_eq!(
    ///     npm_semver_parser::parse::<V>("1.2").unwrap_err().error_kind(),
    ///     ErrorKind::MissingPatchNumber
    /// );
    /// assert_eq!(
    ///     npm_semver_parser::parse::<V>("1.2.3-").unwrap_err().error_kind(),
    ///     ErrorKind::MissingPreRelease
    /// );
    /// assert_eq!(
    ///     npm_semver_parser::parse::<V>("1.2.03").unwrap_err().error_kind(),
    ///     ErrorKind::LeadingZero
    /// );
    /// assert_eq!(
    ///     npm_semver_parser::parse::<V>("1.2.9999999999").unwrap_err().error_kind(),
    ///     ErrorKind::NumberOverflow
    /// );
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        match self.error {
            ErrorType::Missing(segment) => match segment {
                Segment::Part(part) => match part {
                    Part::Major => ErrorKind::MissingMajorNumber,
                    Part::Minor => ErrorKind::MissingMinorNumber,
                    Part::Patch => ErrorKind::MissingPatchNumber,
                },
                Segment::PreRelease => ErrorKind::MissingPreRelease,
                Segment::Build => ErrorKind::MissingBuild,
            },
            ErrorType::NotANumber(part) => match part {
                Part::Major => ErrorKind::MajorNotANumber,
                Part::Minor => ErrorKind::MinorNotANumber,
                Part::Patch => ErrorKind::PatchNotANumber,
            },
            ErrorType::LeadingZero(_) => ErrorKind::LeadingZero,
            ErrorType::Overflow(_) => ErrorKind::NumberOverflow,
            ErrorType::Unexpected => ErrorKind::UnexpectedInput,
        }
    }

    /// Returns a slice from the original input line that triggered the error.
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        &self.input[self.error_span()]
    }

    /// Returns a text representation of the error.
    ///
    /// This is equivalent to the [`Display`] implementation, which can be
    /// further customized with format specifiers.
    pub fn error_line(&self) -> String {
        match &self.error {
            ErrorType::Missing(segment) => {
                format!("Could not parse the {} identifier: No input", segment)
            }
            ErrorType::NotANumber(part) => format!(
                "Could not parse the {} identifier: `{}` is not a number",
                part,
                self.erroneous_input()
            ),
            ErrorType::LeadingZero(segment) => format!(
                "The {} identifier must not have a leading zero: `{}`",
                segment,
                self.erroneous_input()
            ),
            ErrorType::Overflow(segment) => format!(
                "The {} identifier does not fit into a 32-bit integer: `{}`",
                segment,
                self.erroneous_input()
            ),
            ErrorType::Unexpected => format!("Unexpected `{}`", self.erroneous_input()),
        }
    }

    /// Returns a caret line indicating the erroneous input if it was written
    /// under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use npm_semver_parser::VersionBuilder;
    /// # #[derive(Debug)] struct V;
    /// # impl VersionBuilder<'_> for V {
    /// #     type Out = ();
    /// #     fn new() -> Self { V }
    /// #     fn build(self) -> Self::Out {}
    /// # }
    /// let error = npm_semver_parser::parse::<V>("a.b.c").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^");
    ///
    /// let error = npm_semver_parser::parse::<V>("1.2.3-").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~^");
    /// ```
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = self.span.end - self.span.start
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorType,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.borrowed().error_kind()
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

/// Possible errors that can happen.
/// These don't include any information as those are covered by various
/// error methods like [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Expected to parse the major number part, but nothing was found
    MissingMajorNumber,
    /// Expected to parse the minor number part, but nothing was found
    MissingMinorNumber,
    /// Expected to parse the patch number part, but nothing was found
    MissingPatchNumber,
    /// Expected to parse a pre-release identifier part, but nothing was found
    MissingPreRelease,
    /// Expected to parse a build identifier part, but nothing was found
    MissingBuild,
    /// Trying to parse the major number part, but the input was not a number
    MajorNotANumber,
    /// Trying to parse the minor number part, but the input was not a number
    MinorNotANumber,
    /// Trying to parse the patch number part, but the input was not a number
    PatchNotANumber,
    /// A numeric component or pre-release identifier has a disallowed leading zero
    LeadingZero,
    /// A numeric component or pre-release identifier does not fit into a 32-bit integer
    NumberOverflow,
    /// Found an unexpected input
    UnexpectedInput,
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

#[derive(Debug, PartialEq, Eq)]
struct ErrorSpan {
    error: ErrorType,
    span: Span,
}

impl ErrorSpan {
    fn missing_part(part: Part, span: Span) -> Self {
        Self {
            error: ErrorType::Missing(Segment::Part(part)),
            span,
        }
    }

    fn missing_pre(span: Span) -> Self {
        Self {
            error: ErrorType::Missing(Segment::PreRelease),
            span,
        }
    }

    fn missing_build(span: Span) -> Self {
        Self {
            error: ErrorType::Missing(Segment::Build),
            span,
        }
    }

    fn not_a_number(part: Part, span: Span) -> Self {
        Self {
            error: ErrorType::NotANumber(part),
            span,
        }
    }

    fn leading_zero(segment: Segment, span: Span) -> Self {
        Self {
            error: ErrorType::LeadingZero(segment),
            span,
        }
    }

    fn overflow(segment: Segment, span: Span) -> Self {
        Self {
            error: ErrorType::Overflow(segment),
            span,
        }
    }

    fn unexpected(span: Span) -> Self {
        Self {
            error: ErrorType::Unexpected,
            span,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ErrorType {
    Missing(Segment),
    NotANumber(Part),
    LeadingZero(Segment),
    Overflow(Segment),
    Unexpected,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Part {
    Major,
    Minor,
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

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Segment {
    Part(Part),
    PreRelease,
    Build,
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Part(part) => part.fmt(f),
            Segment::PreRelease => f.pad("pre-release"),
            Segment::Build => f.pad("build"),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}

#[derive(Debug)]
struct Parser<'input> {
    input: &'input str,
    bytes: &'input [u8],
    pos: usize,
    mode: Mode,
}

impl<'input> Parser<'input> {
    fn new(input: &'input str, mode: Mode) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            mode,
        }
    }

    fn run<V>(mut self) -> Result<V::Out, ErrorSpan>
    where
        V: VersionBuilder<'input>,
    {
        let mut version = V::new();
        if self.mode == Mode::Loose {
            self.skip_whitespace();
            // `v` is only a prefix when a number follows
            if matches!(self.peek(), Some(b'v') | Some(b'V'))
                && self.bytes.get(self.pos + 1).map_or(false, u8::is_ascii_digit)
            {
                self.pos += 1;
            }
        }
        version.set_major(self.number(Part::Major)?);
        self.dot(Part::Minor)?;
        version.set_minor(self.number(Part::Minor)?);
        self.dot(Part::Patch)?;
        version.set_patch(self.number(Part::Patch)?);
        if self.eat(b'-') {
            let mut separator = self.pos - 1;
            loop {
                version.add_pre_release(self.pre_release_identifier(separator)?);
                if !self.eat(b'.') {
                    break;
                }
                separator = self.pos - 1;
            }
        }
        if self.eat(b'+') {
            let mut separator = self.pos - 1;
            loop {
                version.add_build(self.build_identifier(separator)?);
                if !self.eat(b'.') {
                    break;
                }
                separator = self.pos - 1;
            }
        }
        if self.mode == Mode::Loose {
            self.skip_whitespace();
        }
        if self.pos < self.bytes.len() {
            return Err(ErrorSpan::unexpected(self.token_span()));
        }
        Ok(version.build())
    }

    fn number(&mut self, part: Part) -> Result<i32, ErrorSpan> {
        let start = self.pos;
        let end = self.scan(|b| b.is_ascii_alphanumeric());
        if end == start {
            return Err(if start == self.bytes.len() {
                ErrorSpan::missing_part(part, Span::new(start, start))
            } else {
                ErrorSpan::not_a_number(part, self.char_span(start))
            });
        }
        let span = Span::new(start, end);
        let text = &self.input[start..end];
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErrorSpan::not_a_number(part, span));
        }
        self.parse_digits(text, Segment::Part(part), span)
    }

    fn pre_release_identifier(
        &mut self,
        separator: usize,
    ) -> Result<Identifier<'input>, ErrorSpan> {
        let start = self.pos;
        let end = self.scan(|b| b.is_ascii_alphanumeric() || b == b'-');
        if end == start {
            // an empty segment is missing; anything else is a stray character
            return Err(match self.peek() {
                None | Some(b'.') | Some(b'+') => {
                    ErrorSpan::missing_pre(Span::new(separator, separator + 1))
                }
                Some(_) => ErrorSpan::unexpected(self.token_span()),
            });
        }
        let span = Span::new(start, end);
        let text = &self.input[start..end];
        if text.bytes().all(|b| b.is_ascii_digit()) {
            let value = self.parse_digits(text, Segment::PreRelease, span)?;
            return Ok(Identifier::Numeric(value));
        }
        Ok(Identifier::AlphaNumeric(text))
    }

    fn build_identifier(&mut self, separator: usize) -> Result<&'input str, ErrorSpan> {
        let start = self.pos;
        let end = self.scan(|b| b.is_ascii_alphanumeric() || b == b'-');
        if end == start {
            return Err(match self.peek() {
                None | Some(b'.') => ErrorSpan::missing_build(Span::new(
                    separator,
                    separator + 1,
                )),
                Some(_) => ErrorSpan::unexpected(self.token_span()),
            });
        }
        Ok(&self.input[start..end])
    }

    // overflow applies even where loose mode forgives the leading zero
    fn parse_digits(&self, text: &str, segment: Segment, span: Span) -> Result<i32, ErrorSpan> {
        let text = if text.len() > 1 && text.starts_with('0') {
            if self.mode == Mode::Strict {
                return Err(ErrorSpan::leading_zero(segment, span));
            }
            let stripped = text.trim_start_matches('0');
            if stripped.is_empty() {
                return Ok(0);
            }
            stripped
        } else {
            text
        };
        text.parse()
            .map_err(|_| ErrorSpan::overflow(segment, span))
    }

    fn dot(&mut self, next: Part) -> Result<(), ErrorSpan> {
        match self.peek() {
            Some(b'.') => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(ErrorSpan::unexpected(self.token_span())),
            None => Err(ErrorSpan::missing_part(
                next,
                Span::new(self.pos, self.pos),
            )),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn scan<F>(&mut self, accept: F) -> usize
    where
        F: Fn(u8) -> bool,
    {
        while self.pos < self.bytes.len() && accept(self.bytes[self.pos]) {
            self.pos += 1;
        }
        self.pos
    }

    fn skip_whitespace(&mut self) {
        let _ = self.scan(|b| b.is_ascii_whitespace());
    }

    // the remaining input up to any trailing whitespace,
    // or the single char at the cursor if only whitespace remains
    fn token_span(&self) -> Span {
        let end = self.input.trim_end().len();
        if end <= self.pos {
            self.char_span(self.pos)
        } else {
            Span::new(self.pos, end)
        }
    }

    fn char_span(&self, start: usize) -> Span {
        let width = self.input[start..].chars().next().map_or(1, char::len_utf8);
        Span::new(start, start + width)
    }
}
