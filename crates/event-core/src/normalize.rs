//! Row normalization: raw sheet cells into validated event records.

use std::str::FromStr;

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexSet;
use pure_rust_locales::locale_match;
use tracing::{debug, info, warn};

use crate::error::EventError;
use crate::layout::ColumnLayout;
use crate::record::{EventRecord, EventSchedule, RawRow, Tag};
use crate::terms::{normalize_term, split_terms, TAG_SEPARATOR};
use crate::validation::{require, Field, ValidationError};

/// Locale used when no preference resolves.
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

const CLOCK_24H: &str = "%H:%M";
const CLOCK_12H: &str = "%-I:%M %p";
const CLOCK_12H_MARKER_FIRST: &str = "%p %-I:%M";

/// Day-of-month rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayPadding {
    /// `1`, `15`
    Unpadded,
    /// `01`, `15`
    #[default]
    ZeroPadded,
}

impl DayPadding {
    fn format_spec(&self) -> &'static str {
        match self {
            Self::Unpadded => "%-d",
            Self::ZeroPadded => "%d",
        }
    }
}

impl FromStr for DayPadding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" | "padded" | "zero-padded" => Ok(Self::ZeroPadded),
            "none" | "unpadded" => Ok(Self::Unpadded),
            other => Err(format!("unknown day padding: {}", other)),
        }
    }
}

/// Options for [`Normalizer`].
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub layout: ColumnLayout,
    /// Ordered locale preference list, e.g. `["en-US", "fr"]`.
    pub locales: Vec<String>,
    pub day_padding: DayPadding,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            layout: ColumnLayout::default(),
            locales: vec!["en-US".to_string()],
            day_padding: DayPadding::default(),
        }
    }
}

/// Builds [`EventRecord`]s from raw rows.
#[derive(Debug, Clone)]
pub struct Normalizer {
    layout: ColumnLayout,
    locale: Locale,
    clock: &'static str,
    day_padding: DayPadding,
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        let locale = resolve_locale(&options.locales);
        Self {
            layout: options.layout,
            locale,
            clock: clock_format(locale),
            day_padding: options.day_padding,
        }
    }

    /// The locale used for weekday, month and time strings.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Normalize one row. Checks run in column order and stop at the first failure.
    pub fn normalize(&self, row: &RawRow) -> Result<EventRecord, EventError> {
        let layout = &self.layout;

        let date_cell = self.required(row, Field::DateTime, layout.date_time)?;
        let title = self.required(row, Field::Title, layout.title)?;
        let link = self.required(row, Field::Link, layout.link)?;
        let address = self.required(row, Field::Address, layout.address)?;
        let tag_cell = self.required(row, Field::Tags, layout.tags)?;

        let start = parse_date_time(date_cell)?;
        // Split before trimming: a trimmed " / " no longer contains the separator.
        let tags = parse_tags(row.cell(layout.tags));
        require(
            tags.as_slice(),
            ValidationError::NoTags {
                column: layout.tags + 1,
            },
        )?;

        Ok(EventRecord {
            start,
            title: title.to_uppercase(),
            link: link.to_string(),
            region: optional_cell(row, layout.position(Field::Region)),
            sub_region: optional_cell(row, layout.position(Field::SubRegion)),
            address: address.to_uppercase(),
            tags_display: tag_cell.to_uppercase(),
            tags,
            when: self.schedule(start),
        })
    }

    /// Normalize a whole load. The first invalid row aborts it.
    pub fn normalize_all(&self, rows: &[RawRow]) -> Result<Vec<EventRecord>, EventError> {
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            debug!("ROW {:?}", row.0);
            let record = self.normalize(row).map_err(|e| match e {
                EventError::Validation(source) => EventError::InvalidRow {
                    row: index + 1,
                    source,
                },
                other => other,
            })?;
            records.push(record);
        }

        info!("Normalized {} events", records.len());
        Ok(records)
    }

    fn required<'r>(
        &self,
        row: &'r RawRow,
        field: Field,
        index: usize,
    ) -> Result<&'r str, ValidationError> {
        require(row.cell(index), ValidationError::missing(field, index + 1)).map(str::trim)
    }

    fn schedule(&self, start: NaiveDateTime) -> EventSchedule {
        let at: DateTime<Utc> = Utc.from_utc_datetime(&start);
        let locale = self.locale;

        EventSchedule {
            weekday: at.format_localized("%A", locale).to_string().to_uppercase(),
            month: at.format_localized("%B", locale).to_string().to_uppercase(),
            day_of_month: at.format(self.day_padding.format_spec()).to_string(),
            time: at.format_localized(self.clock, locale).to_string(),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

fn optional_cell(row: &RawRow, index: Option<usize>) -> Option<String> {
    index
        .map(|i| row.cell(i))
        .filter(|cell| !cell.trim().is_empty())
        .map(normalize_term)
}

fn parse_tags(cell: &str) -> Vec<Tag> {
    let mut seen = IndexSet::new();
    split_terms(cell, TAG_SEPARATOR)
        .filter_map(|token| {
            let key = normalize_term(token);
            seen.insert(key.clone()).then(|| Tag {
                display: token.to_uppercase(),
                key,
            })
        })
        .collect()
}

/// Parse a date/time cell as written in the sheet.
///
/// Values with a UTC offset keep their own wall-clock time.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, EventError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Some(dt) = NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(dt);
        }
    }

    Err(EventError::Parse {
        value: value.to_string(),
        reason: "expected an ISO 8601 or M/D/YYYY date".to_string(),
    })
}

/// Hour-and-minute format following the locale's own time format.
///
/// 12-hour only when the locale's `T_FMT` uses a 12-hour hour; the AM/PM
/// marker goes where `T_FMT_AMPM` puts it.
pub fn clock_format(locale: Locale) -> &'static str {
    let time_format = locale_match!(locale => LC_TIME::T_FMT);
    if !["%I", "%l", "%r"].iter().any(|spec| time_format.contains(spec)) {
        return CLOCK_24H;
    }

    let ampm_format = match locale_match!(locale => LC_TIME::T_FMT_AMPM) {
        "" => time_format,
        other => other,
    };
    let marker = ["%p", "%P"].iter().filter_map(|spec| ampm_format.find(spec)).min();
    let hour = ["%I", "%l"].iter().filter_map(|spec| ampm_format.find(spec)).min();
    match (marker, hour) {
        (Some(marker), Some(hour)) if marker < hour => CLOCK_12H_MARKER_FIRST,
        _ => CLOCK_12H,
    }
}

/// Pick the first preference that names a known locale.
pub fn resolve_locale(preferences: &[String]) -> Locale {
    for preference in preferences {
        if let Some(locale) = lookup_locale(preference) {
            return locale;
        }
        warn!("Unknown locale {:?}, trying next preference", preference);
    }
    DEFAULT_LOCALE
}

fn lookup_locale(tag: &str) -> Option<Locale> {
    let tag = tag.trim().replace('-', "_");
    let mut parts = tag.splitn(2, '_');
    let language = parts.next()?.to_lowercase();
    if language.is_empty() {
        return None;
    }

    let mut candidates = Vec::new();
    if let Some(region) = parts.next() {
        candidates.push(format!("{}_{}", language, region.to_uppercase()));
    }
    candidates.push(match language.as_str() {
        "en" => "en_US".to_string(),
        "ja" => "ja_JP".to_string(),
        "ko" => "ko_KR".to_string(),
        "zh" => "zh_CN".to_string(),
        _ => format!("{}_{}", language, language.to_uppercase()),
    });

    candidates
        .iter()
        .find_map(|name| Locale::try_from(name.as_str()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        RawRow::new(cells.iter().copied())
    }

    fn full_row() -> RawRow {
        row(&[
            "2024-05-01T18:00:00",
            "Spring Clash",
            "http://example.com",
            "US",
            "CA",
            "123 Main St",
            "Street Fighter 6 / Tekken 8",
        ])
    }

    #[test]
    fn test_normalize_full_layout() {
        let record = Normalizer::default().normalize(&full_row()).unwrap();

        assert_eq!(record.title(), "SPRING CLASH");
        assert_eq!(record.link(), "http://example.com");
        assert_eq!(record.region(), Some("us"));
        assert_eq!(record.sub_region(), Some("ca"));
        assert_eq!(record.address(), "123 MAIN ST");
        assert_eq!(record.tags_display(), "STREET FIGHTER 6 / TEKKEN 8");
        let keys: Vec<_> = record.tag_keys().collect();
        assert_eq!(keys, vec!["street fighter 6", "tekken 8"]);
        assert_eq!(record.tags()[1].display, "TEKKEN 8");
    }

    #[test]
    fn test_schedule_en_us() {
        let record = Normalizer::default().normalize(&full_row()).unwrap();
        let when = record.when();

        assert_eq!(when.weekday, "WEDNESDAY");
        assert_eq!(when.month, "MAY");
        assert_eq!(when.day_of_month, "01");
        assert_eq!(when.time, "6:00 PM");
    }

    #[test]
    fn test_unpadded_day() {
        let normalizer = Normalizer::new(NormalizeOptions {
            day_padding: DayPadding::Unpadded,
            ..NormalizeOptions::default()
        });
        let record = normalizer.normalize(&full_row()).unwrap();
        assert_eq!(record.when().day_of_month, "1");
    }

    #[test]
    fn test_24_hour_locale() {
        let normalizer = Normalizer::new(NormalizeOptions {
            locales: vec!["de-DE".to_string()],
            ..NormalizeOptions::default()
        });
        let record = normalizer.normalize(&full_row()).unwrap();
        assert_eq!(record.when().time, "18:00");
        assert_eq!(record.when().weekday, "MITTWOCH");
    }

    #[test]
    fn test_locale_time_formats() {
        for (locale, expected) in [("en-GB", "18:00"), ("ja-JP", "18:00"), ("ko-KR", "18:00")] {
            let normalizer = Normalizer::new(NormalizeOptions {
                locales: vec![locale.to_string()],
                ..NormalizeOptions::default()
            });
            let record = normalizer.normalize(&full_row()).unwrap();
            assert_eq!(record.when().time, expected, "locale {}", locale);
        }
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(clock_format(Locale::en_US), CLOCK_12H);
        assert_eq!(clock_format(Locale::en_GB), CLOCK_24H);
        assert_eq!(clock_format(Locale::de_DE), CLOCK_24H);
        assert_eq!(clock_format(Locale::ja_JP), CLOCK_24H);
    }

    #[test]
    fn test_basic_layout_has_no_regions() {
        let normalizer = Normalizer::new(NormalizeOptions {
            layout: ColumnLayout::basic(),
            ..NormalizeOptions::default()
        });
        let record = normalizer
            .normalize(&row(&[
                "2024-05-01 18:00",
                "Weekly",
                "https://example.com/w",
                "1 Arcade Way",
                "Tekken 8",
            ]))
            .unwrap();
        assert_eq!(record.region(), None);
        assert_eq!(record.sub_region(), None);
        assert_eq!(record.address(), "1 ARCADE WAY");
    }

    #[test]
    fn test_missing_address_fails() {
        let mut cells = full_row().0;
        cells[5] = String::new();
        let err = Normalizer::default().normalize(&RawRow(cells)).unwrap_err();

        let validation = err.validation().expect("validation error");
        assert_eq!(validation.field(), Some(Field::Address));
        assert!(err.to_string().contains("Address"));
    }

    #[test]
    fn test_short_row_fails_on_first_missing_field() {
        let err = Normalizer::default()
            .normalize(&row(&["2024-05-01T18:00:00", "Title", "http://x"]))
            .unwrap_err();
        assert_eq!(err.validation().and_then(|v| v.field()), Some(Field::Address));
    }

    #[test]
    fn test_blank_region_is_none() {
        let mut cells = full_row().0;
        cells[3] = " ".to_string();
        let record = Normalizer::default().normalize(&RawRow(cells)).unwrap();
        assert_eq!(record.region(), None);
        assert_eq!(record.sub_region(), Some("ca"));
    }

    #[test]
    fn test_separator_only_tags_fail() {
        let mut cells = full_row().0;
        cells[6] = " / ".to_string();
        let err = Normalizer::default().normalize(&RawRow(cells)).unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::NoTags { column: 7 })
        );
    }

    #[test]
    fn test_dangling_separators_are_dropped() {
        for cell in ["Tekken 8 / ", " / Tekken 8", " / Tekken 8 / "] {
            let mut cells = full_row().0;
            cells[6] = cell.to_string();
            let record = Normalizer::default().normalize(&RawRow(cells)).unwrap();
            let keys: Vec<_> = record.tag_keys().collect();
            assert_eq!(keys, vec!["tekken 8"], "cell {:?}", cell);
            assert_eq!(record.tags()[0].display, "TEKKEN 8");
        }
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let mut cells = full_row().0;
        cells[6] = "Tekken 8 / TEKKEN 8 / Street Fighter 6".to_string();
        let record = Normalizer::default().normalize(&RawRow(cells)).unwrap();
        assert_eq!(record.tags().len(), 2);
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let mut cells = full_row().0;
        cells[0] = "next tuesday".to_string();
        let err = Normalizer::default().normalize(&RawRow(cells)).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_date_time_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(parse_date_time("2024-05-01T18:00:00").unwrap(), expected);
        assert_eq!(parse_date_time("2024-05-01T18:00").unwrap(), expected);
        assert_eq!(parse_date_time("2024-05-01 18:00:00").unwrap(), expected);
        assert_eq!(parse_date_time("5/1/2024 18:00:00").unwrap(), expected);
        assert_eq!(parse_date_time("5/1/2024 6:00:00 PM").unwrap(), expected);
        assert_eq!(parse_date_time("2024-05-01T18:00:00-07:00").unwrap(), expected);
        assert_eq!(
            parse_date_time("2024-05-01").unwrap(),
            expected.date().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale(&[]), Locale::en_US);
        assert_eq!(resolve_locale(&["fr".to_string()]), Locale::fr_FR);
        assert_eq!(
            resolve_locale(&["xx-YY".to_string(), "en-GB".to_string()]),
            Locale::en_GB
        );
    }

    #[test]
    fn test_normalize_all_reports_row_number() {
        let mut bad = full_row().0;
        bad[2] = String::new();
        let rows = vec![full_row(), RawRow(bad)];

        let err = Normalizer::default().normalize_all(&rows).unwrap_err();
        match err {
            EventError::InvalidRow { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source.field(), Some(Field::Link));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
