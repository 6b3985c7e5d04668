//! Timetable extraction from the result page markup.
//!
//! The result page is a soup of data rows, headers, ads and spacers
//! inside one container table. Extraction is tolerant by design: a row
//! either yields a [`TimetableRow`] or is skipped, and skipping never
//! aborts the query. Two independent checks decide:
//!
//! 1. the row's flattened text must contain a departure and an arrival
//!    time bracketed by the site's marker words, and
//! 2. the row must carry a train icon whose alt-text is the label.
//!
//! The icon check is the discriminator between data rows and
//! decorative rows that happen to mention times. Rows passing (1) but
//! failing (2) are counted so callers can tell "no trains" apart from
//! "rows were dropped".

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::TimetableRow;

/// Rows of the results container.
static RESULT_ROWS: LazyLock<Selector> = LazyLock::new(|| {
    // Infallible: literal selector
    Selector::parse("#wyniki tr").expect("valid selector")
});

/// First embedded icon of a row carries the train label in its alt-text.
static ROW_ICON: LazyLock<Selector> = LazyLock::new(|| {
    // Infallible: literal selector
    Selector::parse("img").expect("valid selector")
});

/// Departure/arrival times, bracketed by the site's marker words.
/// Dotall so markup line breaks between the two markers don't matter.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Infallible: literal pattern
    Regex::new(r"(?s)ODJAZD(\d{2}:\d{2}).*PRZYJAZD(\d{2}:\d{2})").expect("valid pattern")
});

/// Ordered extraction result. `rows` follows document order and may be
/// empty; `unlabelled` counts rows that matched the time pattern but
/// carried no train-label icon and were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimetableResult {
    pub rows: Vec<TimetableRow>,
    pub unlabelled: usize,
}

/// Outcome of classifying a single table row.
enum RowParse {
    /// An actual train row.
    Data(TimetableRow),
    /// Header, ad, spacer: no time pair, not a data row.
    NotData,
    /// Time pair present but no icon to take the label from.
    MissingLabel,
}

/// Extract all timetable rows from the result page markup.
///
/// Never fails: markup without qualifying rows yields an empty result.
pub fn extract(markup: &str) -> TimetableResult {
    let document = Html::parse_document(markup);

    let mut result = TimetableResult::default();
    for row in document.select(&RESULT_ROWS) {
        match parse_row(row) {
            RowParse::Data(parsed) => result.rows.push(parsed),
            RowParse::NotData => {}
            RowParse::MissingLabel => result.unlabelled += 1,
        }
    }

    if result.unlabelled > 0 {
        tracing::warn!(
            count = result.unlabelled,
            "dropped rows with a time pair but no train label"
        );
    }

    result
}

fn parse_row(row: ElementRef<'_>) -> RowParse {
    let text: String = row.text().collect();

    let Some(caps) = TIME_PATTERN.captures(&text) else {
        return RowParse::NotData;
    };
    let (Some(departure), Some(arrival)) = (parse_time(&caps[1]), parse_time(&caps[2])) else {
        // Shaped like a time but out of range, e.g. 25:00
        return RowParse::NotData;
    };

    let Some(train) = train_label(row) else {
        return RowParse::MissingLabel;
    };

    RowParse::Data(TimetableRow {
        departure,
        arrival,
        train,
    })
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M").ok()
}

/// The alt-text of the row's first icon element, if any.
fn train_label(row: ElementRef<'_>) -> Option<String> {
    row.select(&ROW_ICON)
        .next()?
        .value()
        .attr("alt")
        .map(str::to_string)
}
