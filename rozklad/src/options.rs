//! Command-line options and their resolution into an immutable query.
//!
//! Everything user-facing (environment defaults, station reversal, day
//! shifting, date/hour defaulting) happens here, before the core ever
//! runs: the orchestrator only sees a fully resolved [`QueryOptions`].

use chrono::{Days, NaiveDate, NaiveTime};
use clap::Parser;

/// Date format the remote form expects, e.g. `01.06.24`.
const DATE_FORMAT: &str = "%d.%m.%y";

/// Hour format the remote form expects, e.g. `09:00`.
const HOUR_FORMAT: &str = "%H:%M";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "rozklad", version, about = "PKP timetable lookup")]
pub struct Cli {
    /// Departure station (default: $DEPARTURE_STATION)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Target station (default: $TARGET_STATION)
    #[arg(short, long)]
    pub to: Option<String>,

    /// Departure hour, HH:MM (default: current time)
    #[arg(long)]
    pub hour: Option<String>,

    /// Departure date, DD.MM.YY (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Swap departure and target stations
    #[arg(short, long)]
    pub reverse: bool,

    /// Query tomorrow instead of --date (wins over --previous-day)
    #[arg(long)]
    pub next_day: bool,

    /// Query yesterday instead of --date
    #[arg(long)]
    pub previous_day: bool,
}

/// Error resolving the command line into a runnable query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("no departure station given (use --from or set DEPARTURE_STATION)")]
    MissingFrom,

    #[error("no target station given (use --to or set TARGET_STATION)")]
    MissingTo,

    #[error("shifted date is out of range")]
    DateOutOfRange,
}

/// A fully resolved, immutable query: both station names, the date and
/// the hour, exactly as the core should use them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub from: String,
    pub to: String,
    pub date: String,
    pub hour: String,
}

impl QueryOptions {
    /// Resolve CLI arguments against environment defaults and the
    /// current date/time.
    ///
    /// `env_from`/`env_to` are the `DEPARTURE_STATION`/`TARGET_STATION`
    /// values; `--reverse` swaps the pair after defaulting. The day
    /// shift flags derive the date from `today`, overriding `--date`.
    pub fn resolve(
        cli: Cli,
        env_from: Option<String>,
        env_to: Option<String>,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Result<Self, OptionsError> {
        let mut from = cli
            .from
            .or(env_from)
            .filter(|s| !s.is_empty())
            .ok_or(OptionsError::MissingFrom)?;
        let mut to = cli
            .to
            .or(env_to)
            .filter(|s| !s.is_empty())
            .ok_or(OptionsError::MissingTo)?;

        if cli.reverse {
            std::mem::swap(&mut from, &mut to);
        }

        let date = if cli.next_day {
            shifted(today, 1)?
        } else if cli.previous_day {
            shifted(today, -1)?
        } else {
            cli.date
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| today.format(DATE_FORMAT).to_string())
        };

        let hour = cli
            .hour
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| now.format(HOUR_FORMAT).to_string());

        Ok(QueryOptions {
            from,
            to,
            date,
            hour,
        })
    }
}

fn shifted(today: NaiveDate, days: i64) -> Result<String, OptionsError> {
    let date = if days >= 0 {
        today.checked_add_days(Days::new(days as u64))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    date.map(|d| d.format(DATE_FORMAT).to_string())
        .ok_or(OptionsError::DateOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("rozklad").chain(args.iter().copied()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn now() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    fn resolve(args: &[&str]) -> Result<QueryOptions, OptionsError> {
        QueryOptions::resolve(cli(args), None, None, today(), now())
    }

    #[test]
    fn flags_fill_the_query() {
        let opts = resolve(&[
            "--from",
            "Warszawa Centralna",
            "--to",
            "Kraków Główny",
            "--date",
            "02.06.24",
            "--hour",
            "12:30",
        ])
        .unwrap();

        assert_eq!(opts.from, "Warszawa Centralna");
        assert_eq!(opts.to, "Kraków Główny");
        assert_eq!(opts.date, "02.06.24");
        assert_eq!(opts.hour, "12:30");
    }

    #[test]
    fn date_and_hour_default_to_now() {
        let opts = resolve(&["-f", "A", "-t", "B"]).unwrap();
        assert_eq!(opts.date, "01.06.24");
        assert_eq!(opts.hour, "09:00");
    }

    #[test]
    fn env_vars_fill_missing_stations() {
        let opts = QueryOptions::resolve(
            cli(&[]),
            Some("Warszawa Centralna".into()),
            Some("Kraków Główny".into()),
            today(),
            now(),
        )
        .unwrap();

        assert_eq!(opts.from, "Warszawa Centralna");
        assert_eq!(opts.to, "Kraków Główny");
    }

    #[test]
    fn flags_win_over_env_vars() {
        let opts = QueryOptions::resolve(
            cli(&["--from", "Gdańsk Główny"]),
            Some("Warszawa Centralna".into()),
            Some("Kraków Główny".into()),
            today(),
            now(),
        )
        .unwrap();

        assert_eq!(opts.from, "Gdańsk Główny");
        assert_eq!(opts.to, "Kraków Główny");
    }

    #[test]
    fn empty_env_var_counts_as_unset() {
        let err = QueryOptions::resolve(
            cli(&["--to", "B"]),
            Some(String::new()),
            None,
            today(),
            now(),
        )
        .unwrap_err();
        assert_eq!(err, OptionsError::MissingFrom);
    }

    #[test]
    fn missing_stations_are_errors() {
        assert_eq!(resolve(&["--to", "B"]).unwrap_err(), OptionsError::MissingFrom);
        assert_eq!(resolve(&["--from", "A"]).unwrap_err(), OptionsError::MissingTo);
    }

    #[test]
    fn reverse_swaps_after_defaulting() {
        let opts = QueryOptions::resolve(
            cli(&["--reverse"]),
            Some("A".into()),
            Some("B".into()),
            today(),
            now(),
        )
        .unwrap();

        assert_eq!(opts.from, "B");
        assert_eq!(opts.to, "A");
    }

    #[test]
    fn next_day_overrides_date() {
        let opts = resolve(&["-f", "A", "-t", "B", "--date", "15.08.24", "--next-day"]).unwrap();
        assert_eq!(opts.date, "02.06.24");
    }

    #[test]
    fn previous_day_shifts_back() {
        let opts = resolve(&["-f", "A", "-t", "B", "--previous-day"]).unwrap();
        assert_eq!(opts.date, "31.05.24");
    }

    #[test]
    fn next_day_wins_over_previous_day() {
        let opts = resolve(&["-f", "A", "-t", "B", "--next-day", "--previous-day"]).unwrap();
        assert_eq!(opts.date, "02.06.24");
    }

    #[test]
    fn day_shift_crosses_month_and_year() {
        let new_years_eve = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let opts = QueryOptions::resolve(
            cli(&["-f", "A", "-t", "B", "--next-day"]),
            None,
            None,
            new_years_eve,
            now(),
        )
        .unwrap();
        assert_eq!(opts.date, "01.01.25");
    }
}
