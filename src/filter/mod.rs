use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ListError;
use crate::records::{FieldMatch, FieldValue, FilterField, Record};

const CHOICE_WILDCARD: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pattern {
    raw: String,
    needle: String,
}

/// Per-field patterns, combined with AND. Empty patterns match everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria<F: FilterField> {
    patterns: BTreeMap<F, Pattern>,
}

impl<F: FilterField> Default for FilterCriteria<F> {
    fn default() -> Self {
        Self {
            patterns: BTreeMap::new(),
        }
    }
}

impl<F: FilterField> FilterCriteria<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: F, pattern: impl Into<String>) -> Self {
        self.set(field, pattern);
        self
    }

    pub fn set(&mut self, field: F, pattern: impl Into<String>) {
        let raw = pattern.into();
        let needle = raw.to_lowercase();
        self.patterns.insert(field, Pattern { raw, needle });
    }

    pub fn clear(&mut self, field: F) {
        self.patterns.remove(&field);
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.patterns.get(&field).map(|p| p.raw.as_str())
    }

    /// Fields with a non-empty pattern, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.patterns
            .iter()
            .filter(|(_, p)| !p.raw.is_empty())
            .map(|(f, p)| (*f, p.raw.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        self.patterns
            .iter()
            .all(|(field, p)| field_matches(field.matching(), &record.value(*field), &p.needle))
    }

    /// Parses `FIELD=PATTERN` pairs against the field set of `R`.
    pub fn parse_pairs<R, S>(pairs: &[S]) -> Result<Self, ListError>
    where
        R: Record<Field = F>,
        S: AsRef<str>,
    {
        let mut criteria = Self::new();
        for raw in pairs {
            let (field, pattern) = parse_filter_pair::<R>(raw.as_ref())?;
            criteria.set(field, pattern);
        }
        Ok(criteria)
    }
}

fn filter_pair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=(.*)$").unwrap())
}

pub fn parse_filter_pair<R: Record>(raw: &str) -> Result<(R::Field, String), ListError> {
    let caps = filter_pair_regex()
        .captures(raw)
        .ok_or_else(|| ListError::MalformedFilter {
            raw: raw.to_string(),
        })?;
    let key = &caps[1];
    let field = R::Field::parse(key).ok_or_else(|| ListError::UnknownField {
        list: R::LIST,
        field: key.to_string(),
        expected: R::Field::keys().join(", "),
    })?;
    Ok((field, caps[2].to_string()))
}

/// `needle` must already be lowercased.
pub fn field_matches(matching: FieldMatch, value: &FieldValue<'_>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match matching {
        FieldMatch::Substring => value.to_lowercase().contains(needle),
        FieldMatch::SubstringOrAll => {
            needle == CHOICE_WILDCARD || value.to_lowercase().contains(needle)
        }
        FieldMatch::Choice => needle == CHOICE_WILDCARD || value.to_lowercase() == needle,
    }
}

fn iso_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap()
    })
}

pub fn is_iso_date(value: &str) -> bool {
    iso_date_regex().is_match(value)
}

/// Inclusive window over a record's ISO date.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<String>,
    to: Option<String>,
}

impl DateRange {
    pub fn new(from: Option<&str>, to: Option<&str>) -> Result<Self, ListError> {
        let from = normalize_date(from)?;
        let to = normalize_date(to)?;
        if let (Some(f), Some(t)) = (from.as_deref(), to.as_deref()) {
            if f > t {
                return Err(ListError::InvertedDateRange {
                    from: f.to_string(),
                    to: t.to_string(),
                });
            }
        }
        Ok(Self { from, to })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    // ISO dates order lexicographically; undated records are never excluded
    pub fn contains(&self, date: Option<&str>) -> bool {
        let date = match date {
            Some(d) if is_iso_date(d) => d,
            _ => return true,
        };
        if let Some(from) = self.from.as_deref() {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to.as_deref() {
            if date > to {
                return false;
            }
        }
        true
    }
}

fn normalize_date(value: Option<&str>) -> Result<Option<String>, ListError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if is_iso_date(v) => Ok(Some(v.to_string())),
        Some(v) => Err(ListError::InvalidDate {
            value: v.to_string(),
        }),
    }
}
