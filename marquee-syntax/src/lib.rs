//! # Marquee's free-text filter compiler
//!
//! `marquee-syntax` turns an unstructured sentence such as
//! "action movies from 2020 on Netflix rated above 7" into typed,
//! individually removable filter [`Fragment`]s. The editing surface shows
//! each fragment's label as a chip, lets the user discard any of them, and
//! hands the survivors to the reducer in the `marquee` crate.
//!
//! Recognition is a fixed [`PatternTable`]: an ordered list of
//! case-insensitive regular-expression rules, each paired with an extractor
//! that either produces a typed value or rejects the match. Earlier rules
//! win conflicts — every accepted match is excised from the working text so
//! later rules never see claimed characters.
//!
//! Compilation never fails. A sentence with nothing recognizable in it
//! yields an empty fragment list.
//!
//! ## Example
//! ```
//! use marquee_syntax::{compile, FragmentKind};
//!
//! let fragments = compile("action movies on netflix rated above 7");
//! let kinds: Vec<_> = fragments.iter().map(|f| f.value.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         FragmentKind::Genre,
//!         FragmentKind::ContentType,
//!         FragmentKind::RatingMin,
//!         FragmentKind::Provider,
//!     ]
//! );
//! assert_eq!(fragments[3].label, "On: Netflix");
//! ```

use std::fmt;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Compiles a sentence against the built-in pattern table.
///
/// ```
/// use marquee_syntax::compile;
///
/// let fragments = compile("rated 7+");
/// assert_eq!(fragments.len(), 1);
/// assert_eq!(fragments[0].label, "Rating: 7+");
///
/// assert!(compile("the quick brown fox").is_empty());
/// ```
pub fn compile(text: &str) -> Vec<Fragment> {
    builtin_table().compile(text)
}

/// The process-wide immutable pattern table.
///
/// Built once on first use; rule definitions are a programming artifact, so
/// a malformed built-in table aborts instead of limping along.
pub fn builtin_table() -> &'static PatternTable {
    &BUILTIN_TABLE
}

static BUILTIN_TABLE: Lazy<PatternTable> = Lazy::new(|| {
    let rules = builtin_rules().expect("built-in pattern rules should compile");
    PatternTable::new(rules).expect("built-in pattern table should contain no duplicate rules")
});

/// Search context: movie catalog or episodic/TV catalog. Decides which
/// date-range field a year fragment targets during reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Tv,
}

/// Identifies a fragment within one compile pass. Ids are never persisted;
/// a fresh pass over new input starts numbering again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FragmentId(pub u32);

/// One recognized phrase, typed and labeled, pending user confirmation.
///
/// Fragments are created fresh on every compile pass, never mutated, and
/// discarded wholesale when the input string changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub id: FragmentId,
    pub value: FragmentValue,
    /// The exact substring the rule matched, as typed by the user.
    pub source: String,
    /// Human-readable description of the fragment's effect ("Rating: 7+").
    pub label: String,
    /// Every fragment may be discarded by the user before reduction.
    pub removable: bool,
}

/// Typed payload of a recognized phrase. The variant is the fragment kind;
/// consumers match exhaustively, so adding a kind breaks them at compile
/// time instead of falling through silently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FragmentValue {
    /// "movies", "films" / "tv shows", "series".
    ///
    /// ```
    /// use marquee_syntax::{compile, ContentType, FragmentValue};
    /// let fragments = compile("movies");
    /// assert!(matches!(fragments[0].value, FragmentValue::ContentType(ContentType::Movie)));
    /// assert_eq!(fragments[0].label, "Movies");
    /// ```
    ContentType(ContentType),
    /// A bare year: "2015".
    ///
    /// ```
    /// use marquee_syntax::{compile, FragmentValue};
    /// let fragments = compile("2015");
    /// assert!(matches!(&fragments[0].value, FragmentValue::YearExact { year } if year == "2015"));
    /// assert_eq!(fragments[0].label, "Year: 2015");
    /// ```
    YearExact { year: String },
    /// "2010-2019", "from 2010 to 2019".
    ///
    /// ```
    /// use marquee_syntax::{compile, FragmentValue};
    /// let fragments = compile("2010-2019");
    /// assert!(matches!(&fragments[0].value,
    ///     FragmentValue::YearRange { start, end } if start == "2010" && end == "2019"));
    /// assert_eq!(fragments[0].label, "Years: 2010-2019");
    /// ```
    YearRange { start: String, end: String },
    /// "since 2015", "after 2015".
    ///
    /// ```
    /// use marquee_syntax::compile;
    /// assert_eq!(compile("since 2015")[0].label, "Since: 2015");
    /// ```
    YearFrom { start: String },
    /// "until 2020", "before 2020".
    ///
    /// ```
    /// use marquee_syntax::compile;
    /// assert_eq!(compile("until 2020")[0].label, "Until: 2020");
    /// ```
    YearTo { end: String },
    /// "rated above 7", "rated 7+".
    ///
    /// ```
    /// use marquee_syntax::{compile, FragmentValue};
    /// let fragments = compile("rated above 7");
    /// assert!(matches!(fragments[0].value, FragmentValue::RatingMin { min } if min == 7.0));
    /// assert_eq!(fragments[0].label, "Rating: 7+");
    /// ```
    RatingMin { min: f32 },
    /// "rated below 5", "rated under 5".
    ///
    /// ```
    /// use marquee_syntax::compile;
    /// assert_eq!(compile("rated below 5")[0].label, "Rating: <5");
    /// ```
    RatingMax { max: f32 },
    /// A bare floor without the rating keyword: "8+".
    ///
    /// ```
    /// use marquee_syntax::{compile, FragmentValue};
    /// let fragments = compile("8+");
    /// assert!(matches!(fragments[0].value, FragmentValue::RatingFloor { min } if min == 8.0));
    /// assert_eq!(fragments[0].label, "Rating: 8+");
    /// ```
    RatingFloor { min: f32 },
    /// "rated between 6 and 8", "rating 6-8".
    ///
    /// ```
    /// use marquee_syntax::compile;
    /// assert_eq!(compile("rated between 6 and 8")[0].label, "Rating: 6-8");
    /// ```
    RatingRange { min: f32, max: f32 },
    /// A streaming service by name; carries the catalog's provider id and
    /// canonical display name.
    ///
    /// ```
    /// use marquee_syntax::{compile, FragmentValue};
    /// let fragments = compile("on hulu");
    /// assert!(matches!(fragments[0].value, FragmentValue::Provider { id: 15, name: "Hulu" }));
    /// assert_eq!(fragments[0].label, "On: Hulu");
    /// ```
    Provider { id: u32, name: &'static str },
    /// A genre by name; carries the catalog's numeric genre id. The label
    /// keeps the text as the user typed it.
    ///
    /// ```
    /// use marquee_syntax::{compile, FragmentValue};
    /// let fragments = compile("horror");
    /// assert!(matches!(fragments[0].value, FragmentValue::Genre { id: 27 }));
    /// assert_eq!(fragments[0].label, "Genre: horror");
    /// ```
    Genre { id: u32 },
    /// A production country by name; carries the ISO region code.
    ///
    /// ```
    /// use marquee_syntax::{compile, FragmentValue};
    /// let fragments = compile("in japan");
    /// assert!(matches!(fragments[0].value, FragmentValue::Country { code: "JP" }));
    /// assert_eq!(fragments[0].label, "Region: JP");
    /// ```
    Country { code: &'static str },
}

impl FragmentValue {
    pub fn kind(&self) -> FragmentKind {
        match self {
            FragmentValue::ContentType(_) => FragmentKind::ContentType,
            FragmentValue::YearExact { .. } => FragmentKind::YearExact,
            FragmentValue::YearRange { .. } => FragmentKind::YearRange,
            FragmentValue::YearFrom { .. } => FragmentKind::YearFrom,
            FragmentValue::YearTo { .. } => FragmentKind::YearTo,
            FragmentValue::RatingMin { .. } => FragmentKind::RatingMin,
            FragmentValue::RatingMax { .. } => FragmentKind::RatingMax,
            FragmentValue::RatingFloor { .. } => FragmentKind::RatingFloor,
            FragmentValue::RatingRange { .. } => FragmentKind::RatingRange,
            FragmentValue::Provider { .. } => FragmentKind::Provider,
            FragmentValue::Genre { .. } => FragmentKind::Genre,
            FragmentValue::Country { .. } => FragmentKind::Country,
        }
    }
}

/// Payload-free view of a fragment's kind, used for rule bookkeeping and
/// assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    ContentType,
    YearFrom,
    YearTo,
    YearExact,
    YearRange,
    RatingMin,
    RatingMax,
    RatingFloor,
    RatingRange,
    Provider,
    Genre,
    Country,
}

fn label_for(value: &FragmentValue, source: &str) -> String {
    match value {
        FragmentValue::ContentType(ContentType::Movie) => "Movies".to_string(),
        FragmentValue::ContentType(ContentType::Tv) => "TV Shows".to_string(),
        FragmentValue::YearExact { year } => format!("Year: {year}"),
        FragmentValue::YearRange { start, end } => format!("Years: {start}-{end}"),
        FragmentValue::YearFrom { start } => format!("Since: {start}"),
        FragmentValue::YearTo { end } => format!("Until: {end}"),
        FragmentValue::RatingRange { min, max } => format!("Rating: {min}-{max}"),
        FragmentValue::RatingMin { min } | FragmentValue::RatingFloor { min } => {
            format!("Rating: {min}+")
        }
        FragmentValue::RatingMax { max } => format!("Rating: <{max}"),
        FragmentValue::Provider { name, .. } => format!("On: {name}"),
        FragmentValue::Genre { .. } => format!("Genre: {source}"),
        FragmentValue::Country { code } => format!("Region: {code}"),
    }
}

/// Errors surfaced while assembling a [`PatternTable`]. These are
/// programming errors in rule definitions, not runtime conditions; the
/// built-in table treats them as fatal.
#[derive(Debug, Clone)]
pub enum TableError {
    /// Two rules share both the same kind and an identical pattern. The
    /// table refuses to guess which one should win.
    DuplicateRule { kind: FragmentKind, pattern: String },
    /// A rule's pattern failed to compile as a regular expression.
    BadPattern { pattern: String, error: regex::Error },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicateRule { kind, pattern } => {
                write!(f, "duplicate {kind:?} rule with pattern {pattern:?}")
            }
            TableError::BadPattern { pattern, error } => {
                write!(f, "pattern {pattern:?} failed to compile: {error}")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Extractor signature for capture-derived rules. Returning `None` means
/// the text matched syntactically but produced no usable value; the match
/// is skipped and the characters stay available to later rules.
pub type ExtractFn = fn(&Captures<'_>) -> Option<FragmentValue>;

#[derive(Debug, Clone)]
enum Extract {
    Constant(FragmentValue),
    Captures(ExtractFn),
}

/// One declarative recognition rule: a case-insensitive pattern paired with
/// a value extractor.
#[derive(Debug, Clone)]
pub struct PatternRule {
    kind: FragmentKind,
    pattern: String,
    matcher: Regex,
    extract: Extract,
}

impl PatternRule {
    /// A rule whose every match yields the same value ("movies" always
    /// means the movie content type).
    pub fn constant(pattern: &str, value: FragmentValue) -> Result<Self, TableError> {
        Ok(Self {
            kind: value.kind(),
            matcher: compile_matcher(pattern)?,
            pattern: pattern.to_string(),
            extract: Extract::Constant(value),
        })
    }

    /// A rule whose value derives from capture groups. The extractor must
    /// be total: reject with `None`, never panic.
    pub fn capturing(
        pattern: &str,
        kind: FragmentKind,
        extract: ExtractFn,
    ) -> Result<Self, TableError> {
        Ok(Self {
            kind,
            matcher: compile_matcher(pattern)?,
            pattern: pattern.to_string(),
            extract: Extract::Captures(extract),
        })
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn extract(&self, caps: &Captures<'_>) -> Option<FragmentValue> {
        match &self.extract {
            Extract::Constant(value) => Some(value.clone()),
            Extract::Captures(extract) => {
                let value = extract(caps)?;
                debug_assert_eq!(value.kind(), self.kind, "extractor produced a foreign kind");
                Some(value)
            }
        }
    }
}

fn compile_matcher(pattern: &str) -> Result<Regex, TableError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|error| TableError::BadPattern {
            pattern: pattern.to_string(),
            error,
        })
}

/// An ordered, immutable list of [`PatternRule`]s. Table order is the
/// conflict-resolution policy: earlier rules claim text first.
///
/// The built-in table is reachable through [`builtin_table`] and the
/// module-level [`compile`]; tests pass alternate tables explicitly.
///
/// ```
/// use marquee_syntax::{FragmentKind, PatternRule, PatternTable, TableError};
///
/// let rule = || {
///     PatternRule::capturing(r"\b((?:19|20)\d{2})\b", FragmentKind::YearExact, |_| None).unwrap()
/// };
/// let err = PatternTable::new(vec![rule(), rule()]).unwrap_err();
/// assert!(matches!(err, TableError::DuplicateRule { kind: FragmentKind::YearExact, .. }));
/// ```
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<PatternRule>,
}

impl PatternTable {
    pub fn new(rules: Vec<PatternRule>) -> Result<Self, TableError> {
        for (index, rule) in rules.iter().enumerate() {
            let duplicated = rules[..index]
                .iter()
                .any(|prior| prior.kind == rule.kind && prior.pattern == rule.pattern);
            if duplicated {
                return Err(TableError::DuplicateRule {
                    kind: rule.kind,
                    pattern: rule.pattern.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Runs every rule, in table order, against the progressively consumed
    /// input and returns the accepted fragments in creation order (table
    /// order, then left to right within a rule).
    ///
    /// Each accepted match is excised from the working text, so a
    /// character belongs to at most one fragment. Excision is literal
    /// substring removal: a rule that matches inside a larger phrase a
    /// later rule wanted will steal those characters. Table order is the
    /// only arbiter.
    pub fn compile(&self, text: &str) -> Vec<Fragment> {
        let mut remaining = text.to_string();
        let mut fragments: Vec<Fragment> = Vec::new();
        for rule in &self.rules {
            let mut claimed: Vec<Range<usize>> = Vec::new();
            for caps in rule.matcher.captures_iter(&remaining) {
                let matched = caps.get(0).expect("group 0 is the whole match");
                let Some(value) = rule.extract(&caps) else {
                    trace!(kind = ?rule.kind, matched = matched.as_str(), "extractor rejected match");
                    continue;
                };
                let source = matched.as_str().to_string();
                let label = label_for(&value, &source);
                fragments.push(Fragment {
                    id: FragmentId(fragments.len() as u32),
                    value,
                    source,
                    label,
                    removable: true,
                });
                claimed.push(matched.range());
            }
            if !claimed.is_empty() {
                remaining = excise(&remaining, &claimed);
            }
        }
        debug!(fragments = fragments.len(), "compiled free-text query");
        fragments
    }
}

/// Removes the claimed byte ranges from `text`. Ranges come from a single
/// leftmost-first match pass, so they are sorted and non-overlapping.
fn excise(text: &str, claimed: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in claimed {
        out.push_str(&text[cursor..range.start]);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

// ---------------------------------------------------------------------------
// Built-in rules.
//
// Order is load-bearing. Lexicon rules (genre, content type) run before the
// numeric rules so their words are claimed as whole phrases; rating rules
// run before year rules so a "rated 2010-2019" capture gets rejected by the
// 0-10 bound and falls through to the year rules; providers and countries
// go last because their phrases never contain digits.

const RATING_RANGE_PATTERN: &str =
    r"\brat(?:ed|ing)s?\s+(?:between\s+)?(\d+(?:\.\d+)?)\s*(?:-|to|and)\s*(\d+(?:\.\d+)?)";
const RATING_MIN_PATTERN: &str =
    r"\brat(?:ed|ing)s?\s+(?:above|over|at\s+least|higher\s+than|better\s+than)\s+(\d+(?:\.\d+)?)";
const RATING_MIN_PLUS_PATTERN: &str = r"\brat(?:ed|ing)s?\s+(\d+(?:\.\d+)?)\s*\+";
const RATING_MAX_PATTERN: &str =
    r"\brat(?:ed|ing)s?\s+(?:below|under|at\s+most|less\s+than|lower\s+than)\s+(\d+(?:\.\d+)?)";
const RATING_FLOOR_PATTERN: &str = r"\b(\d+(?:\.\d+)?)\s*\+";
const YEAR_RANGE_FROM_TO_PATTERN: &str =
    r"\bfrom\s+((?:19|20)\d{2})\s+(?:to|until|through)\s+((?:19|20)\d{2})\b";
const YEAR_RANGE_PATTERN: &str = r"\b((?:19|20)\d{2})\s*(?:-|to|through)\s*((?:19|20)\d{2})\b";
const YEAR_FROM_PATTERN: &str = r"\b(?:since|after|from|starting)\s+((?:19|20)\d{2})\b";
const YEAR_TO_PATTERN: &str = r"\b(?:until|till|before|up\s+to|through)\s+((?:19|20)\d{2})\b";
const YEAR_EXACT_PATTERN: &str = r"\b((?:19|20)\d{2})\b";
const CONTENT_MOVIE_PATTERN: &str = r"\b(?:movies?|films?|flicks?)\b";
const CONTENT_TV_PATTERN: &str = r"\b(?:tv\s+shows?|tv\s+series|television|tv|series|shows?)\b";

fn builtin_rules() -> Result<Vec<PatternRule>, TableError> {
    Ok(vec![
        PatternRule::capturing(&genre_pattern(), FragmentKind::Genre, extract_genre)?,
        PatternRule::constant(
            CONTENT_MOVIE_PATTERN,
            FragmentValue::ContentType(ContentType::Movie),
        )?,
        PatternRule::constant(
            CONTENT_TV_PATTERN,
            FragmentValue::ContentType(ContentType::Tv),
        )?,
        PatternRule::capturing(
            RATING_RANGE_PATTERN,
            FragmentKind::RatingRange,
            extract_rating_range,
        )?,
        PatternRule::capturing(
            RATING_MIN_PATTERN,
            FragmentKind::RatingMin,
            extract_rating_min,
        )?,
        PatternRule::capturing(
            RATING_MIN_PLUS_PATTERN,
            FragmentKind::RatingMin,
            extract_rating_min,
        )?,
        PatternRule::capturing(
            RATING_MAX_PATTERN,
            FragmentKind::RatingMax,
            extract_rating_max,
        )?,
        PatternRule::capturing(
            RATING_FLOOR_PATTERN,
            FragmentKind::RatingFloor,
            extract_rating_floor,
        )?,
        PatternRule::capturing(
            YEAR_RANGE_FROM_TO_PATTERN,
            FragmentKind::YearRange,
            extract_year_range,
        )?,
        PatternRule::capturing(
            YEAR_RANGE_PATTERN,
            FragmentKind::YearRange,
            extract_year_range,
        )?,
        PatternRule::capturing(YEAR_FROM_PATTERN, FragmentKind::YearFrom, extract_year_from)?,
        PatternRule::capturing(YEAR_TO_PATTERN, FragmentKind::YearTo, extract_year_to)?,
        PatternRule::capturing(
            YEAR_EXACT_PATTERN,
            FragmentKind::YearExact,
            extract_year_exact,
        )?,
        PatternRule::capturing(&provider_pattern(), FragmentKind::Provider, extract_provider)?,
        PatternRule::capturing(&country_pattern(), FragmentKind::Country, extract_country)?,
    ])
}

fn extract_rating_range(caps: &Captures<'_>) -> Option<FragmentValue> {
    let min = rating_capture(caps, 1)?;
    let max = rating_capture(caps, 2)?;
    if min > max {
        return None;
    }
    Some(FragmentValue::RatingRange { min, max })
}

fn extract_rating_min(caps: &Captures<'_>) -> Option<FragmentValue> {
    Some(FragmentValue::RatingMin {
        min: rating_capture(caps, 1)?,
    })
}

fn extract_rating_max(caps: &Captures<'_>) -> Option<FragmentValue> {
    Some(FragmentValue::RatingMax {
        max: rating_capture(caps, 1)?,
    })
}

fn extract_rating_floor(caps: &Captures<'_>) -> Option<FragmentValue> {
    Some(FragmentValue::RatingFloor {
        min: rating_capture(caps, 1)?,
    })
}

/// Parses a rating capture; ratings live on the catalog's 0-10 scale, so
/// anything outside it is rejected and the text stays unclaimed.
fn rating_capture(caps: &Captures<'_>, group: usize) -> Option<f32> {
    let raw = caps.get(group)?.as_str();
    let value: f32 = raw.parse().ok()?;
    (0.0..=10.0).contains(&value).then_some(value)
}

fn extract_year_range(caps: &Captures<'_>) -> Option<FragmentValue> {
    Some(FragmentValue::YearRange {
        start: year_capture(caps, 1)?,
        end: year_capture(caps, 2)?,
    })
}

fn extract_year_from(caps: &Captures<'_>) -> Option<FragmentValue> {
    Some(FragmentValue::YearFrom {
        start: year_capture(caps, 1)?,
    })
}

fn extract_year_to(caps: &Captures<'_>) -> Option<FragmentValue> {
    Some(FragmentValue::YearTo {
        end: year_capture(caps, 1)?,
    })
}

fn extract_year_exact(caps: &Captures<'_>) -> Option<FragmentValue> {
    Some(FragmentValue::YearExact {
        year: year_capture(caps, 1)?,
    })
}

fn year_capture(caps: &Captures<'_>, group: usize) -> Option<String> {
    Some(caps.get(group)?.as_str().to_string())
}

fn extract_genre(caps: &Captures<'_>) -> Option<FragmentValue> {
    let name = caps.get(1)?.as_str().to_ascii_lowercase();
    let id = lookup_genre(&name)?;
    Some(FragmentValue::Genre { id })
}

fn extract_provider(caps: &Captures<'_>) -> Option<FragmentValue> {
    let name = caps.get(1)?.as_str().to_ascii_lowercase();
    let (id, canonical) = lookup_provider(&name)?;
    Some(FragmentValue::Provider {
        id,
        name: canonical,
    })
}

fn extract_country(caps: &Captures<'_>) -> Option<FragmentValue> {
    let name = caps.get(1)?.as_str().to_ascii_lowercase();
    let code = lookup_country(&name)?;
    Some(FragmentValue::Country { code })
}

// ---------------------------------------------------------------------------
// Lexicons. Alias lists feed the rule alternations; lookups map the matched
// (case-folded) alias to catalog ids. A word in an alternation but missing
// from its lookup is rejected by the extractor rather than crashing.

const GENRE_ALIASES: &[&str] = &[
    "science fiction",
    "science-fiction",
    "sci-fi",
    "scifi",
    "action",
    "adventure",
    "animation",
    "animated",
    "comedy",
    "comedies",
    "crime",
    "documentary",
    "documentaries",
    "drama",
    "dramas",
    "family",
    "fantasy",
    "history",
    "historical",
    "horror",
    "music",
    "musical",
    "mystery",
    "romance",
    "romantic",
    "thriller",
    "thrillers",
    "war",
    "western",
    "westerns",
];

fn lookup_genre(name: &str) -> Option<u32> {
    let id = match name {
        "action" => 28,
        "adventure" => 12,
        "animation" | "animated" => 16,
        "comedy" | "comedies" => 35,
        "crime" => 80,
        "documentary" | "documentaries" => 99,
        "drama" | "dramas" => 18,
        "family" => 10751,
        "fantasy" => 14,
        "history" | "historical" => 36,
        "horror" => 27,
        "music" | "musical" => 10402,
        "mystery" => 9648,
        "romance" | "romantic" => 10749,
        "science fiction" | "science-fiction" | "sci-fi" | "scifi" => 878,
        "thriller" | "thrillers" => 53,
        "war" => 10752,
        "western" | "westerns" => 37,
        _ => return None,
    };
    Some(id)
}

const PROVIDER_ALIASES: &[&str] = &[
    "netflix",
    "hulu",
    "amazon prime video",
    "amazon prime",
    "prime video",
    "amazon",
    "disney+",
    "disney plus",
    "disney",
    "hbo max",
    "hbo",
    "apple tv+",
    "apple tv",
    "appletv",
    "paramount+",
    "paramount plus",
    "paramount",
    "peacock",
];

fn lookup_provider(name: &str) -> Option<(u32, &'static str)> {
    let provider = match name {
        "netflix" => (8, "Netflix"),
        "hulu" => (15, "Hulu"),
        "amazon prime video" | "amazon prime" | "prime video" | "amazon" => (9, "Prime Video"),
        "disney+" | "disney plus" | "disney" => (337, "Disney+"),
        "hbo max" | "hbo" => (384, "HBO Max"),
        "apple tv+" | "apple tv" | "appletv" => (350, "Apple TV+"),
        "paramount+" | "paramount plus" | "paramount" => (531, "Paramount+"),
        "peacock" => (386, "Peacock"),
        _ => return None,
    };
    Some(provider)
}

const COUNTRY_ALIASES: &[&str] = &[
    "united states",
    "usa",
    "u.s.",
    "america",
    "united kingdom",
    "great britain",
    "britain",
    "uk",
    "canada",
    "france",
    "germany",
    "japan",
    "south korea",
    "korea",
    "india",
    "spain",
    "italy",
    "australia",
    "brazil",
    "mexico",
    "china",
    "russia",
];

fn lookup_country(name: &str) -> Option<&'static str> {
    let code = match name {
        "united states" | "usa" | "u.s." | "america" => "US",
        "united kingdom" | "great britain" | "britain" | "uk" => "GB",
        "canada" => "CA",
        "france" => "FR",
        "germany" => "DE",
        "japan" => "JP",
        "south korea" | "korea" => "KR",
        "india" => "IN",
        "spain" => "ES",
        "italy" => "IT",
        "australia" => "AU",
        "brazil" => "BR",
        "mexico" => "MX",
        "china" => "CN",
        "russia" => "RU",
        _ => return None,
    };
    Some(code)
}

fn genre_pattern() -> String {
    format!(r"\b({})", alias_alternation(GENRE_ALIASES))
}

fn provider_pattern() -> String {
    format!(r"\b(?:on\s+|via\s+)?({})", alias_alternation(PROVIDER_ALIASES))
}

fn country_pattern() -> String {
    format!(
        r"\b(?:in\s+)?(?:the\s+)?({})",
        alias_alternation(COUNTRY_ALIASES)
    )
}

/// Builds an alternation over literal aliases. Longest aliases go first so
/// multiword names win over their own prefixes ("amazon prime video" over
/// "amazon"). Aliases ending in a word character get a closing `\b`; ones
/// ending in punctuation ("disney+", "u.s.") self-delimit.
fn alias_alternation(aliases: &[&str]) -> String {
    let mut sorted: Vec<&str> = aliases.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let mut parts = Vec::with_capacity(sorted.len());
    for alias in sorted {
        let mut part = regex::escape(alias);
        if alias
            .chars()
            .last()
            .is_some_and(|ch| ch.is_ascii_alphanumeric())
        {
            part.push_str(r"\b");
        }
        parts.push(part);
    }
    parts.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excise_removes_claimed_ranges_and_joins_the_rest() {
        assert_eq!(excise("action movies 2020", &[7..13]), "action  2020");
        assert_eq!(excise("abcdef", &[0..2, 4..6]), "cd");
        assert_eq!(excise("abc", &[]), "abc");
        assert_eq!(excise("abc", &[0..3]), "");
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_fragments() {
        assert!(compile("").is_empty());
        assert!(compile("   \t\n").is_empty());
    }

    #[test]
    fn ratings_outside_the_scale_are_rejected() {
        // 11 is no rating and no year, so nothing claims it
        assert!(compile("rated above 11").is_empty());
        // the rejected rating leaves the year text available to later rules
        let fragments = compile("rated above 2015");
        assert_eq!(fragments.len(), 1);
        assert!(matches!(
            &fragments[0].value,
            FragmentValue::YearExact { year } if year == "2015"
        ));
    }

    #[test]
    fn backwards_rating_range_is_rejected() {
        assert!(compile("rated 9 to 2").is_empty());
    }

    #[test]
    fn decimal_ratings_keep_their_fraction_in_labels() {
        let fragments = compile("rated 7.5+");
        assert_eq!(fragments.len(), 1);
        assert!(matches!(
            fragments[0].value,
            FragmentValue::RatingMin { min } if min == 7.5
        ));
        assert_eq!(fragments[0].label, "Rating: 7.5+");
    }

    #[test]
    fn longest_provider_alias_wins() {
        let fragments = compile("on amazon prime video");
        assert_eq!(fragments.len(), 1);
        assert!(matches!(
            fragments[0].value,
            FragmentValue::Provider { id: 9, .. }
        ));
        assert_eq!(fragments[0].source, "on amazon prime video");
    }

    #[test]
    fn provider_aliases_with_trailing_punctuation_match() {
        let fragments = compile("disney+");
        assert_eq!(fragments.len(), 1);
        assert!(matches!(
            fragments[0].value,
            FragmentValue::Provider { id: 337, name: "Disney+" }
        ));
    }

    #[test]
    fn fragment_ids_are_sequential_within_a_pass() {
        let fragments = compile("comedy movies on netflix since 2018");
        let ids: Vec<u32> = fragments.iter().map(|f| f.id.0).collect();
        assert_eq!(ids, (0..fragments.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn builtin_table_is_well_formed() {
        let table = builtin_table();
        assert!(!table.is_empty());
        // every rule kind that the reducer handles appears at least once
        let kinds: Vec<FragmentKind> = table.rules().iter().map(|r| r.kind()).collect();
        for kind in [
            FragmentKind::Genre,
            FragmentKind::ContentType,
            FragmentKind::RatingRange,
            FragmentKind::RatingMin,
            FragmentKind::RatingMax,
            FragmentKind::RatingFloor,
            FragmentKind::YearRange,
            FragmentKind::YearFrom,
            FragmentKind::YearTo,
            FragmentKind::YearExact,
            FragmentKind::Provider,
            FragmentKind::Country,
        ] {
            assert!(kinds.contains(&kind), "missing {kind:?} rule");
        }
    }
}
