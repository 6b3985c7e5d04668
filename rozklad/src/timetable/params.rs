//! HAFAS query parameters for the timetable endpoint.

use std::collections::BTreeMap;

use crate::domain::StationCode;

/// Path of the timetable endpoint.
pub const TIMETABLE_PATH: &str = "/pl/tp";

/// Form parameters that never vary per query. The endpoint's form
/// historically required all of them, including the localized day-name
/// list, for a request to be accepted.
const FIXED_PARAMS: &[(&str, &str)] = &[
    ("REQ0HafasChangeTime", "0:1"),
    ("REQ0HafasSearchForw", "1"),
    ("REQ0JourneyProduct_opt_section_0_list", "0:000000"),
    ("REQ0JourneyStopsS0A", "1"),
    ("REQ0JourneyStopsZ0A", "1"),
    ("came_from_form", "1"),
    ("existBikeEverywhere", "yes"),
    ("existHafasAttrExc", "yes"),
    ("existHafasAttrInc", "yes"),
    ("existOptimizePrice", "1"),
    ("existSkipLongChanges", "0"),
    ("existUnsharpSearch", "yes"),
    ("start", "start"),
    ("wDayExt0", "Pn|Wt|Śr|Cz|Pt|So|Nd"),
];

/// Error returned when constructing a request from empty fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must not be empty")]
pub struct InvalidRequest {
    field: &'static str,
}

/// A validated timetable query: two resolved station codes plus the
/// date (`DD.MM.YY`) and hour (`HH:MM`) as the remote form expects
/// them. The remote endpoint is the source of truth for acceptable
/// formats; only emptiness is rejected here.
#[derive(Debug, Clone)]
pub struct TimetableRequest {
    from: StationCode,
    to: StationCode,
    date: String,
    hour: String,
}

impl TimetableRequest {
    /// Create a new request. Fails if `date` or `hour` is empty.
    pub fn new(
        from: StationCode,
        to: StationCode,
        date: impl Into<String>,
        hour: impl Into<String>,
    ) -> Result<Self, InvalidRequest> {
        let date = date.into();
        let hour = hour.into();

        if date.is_empty() {
            return Err(InvalidRequest { field: "date" });
        }
        if hour.is_empty() {
            return Err(InvalidRequest { field: "hour" });
        }

        Ok(Self {
            from,
            to,
            date,
            hour,
        })
    }

    /// The full parameter mapping for the timetable GET.
    ///
    /// The date is written to a primary field plus a start/end range
    /// pair, and the hour to both `REQ0JourneyTime` and `time`, because
    /// the form accepts overlapping field names for the same value and
    /// requires them to be present and consistent. Deterministic for
    /// identical input.
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params: BTreeMap<String, String> = FIXED_PARAMS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        params.insert("REQ0JourneyStopsS0G".into(), self.from.as_str().into());
        params.insert("REQ0JourneyStopsZ0G".into(), self.to.as_str().into());
        params.insert("REQ0JourneyDate".into(), self.date.clone());
        params.insert("date".into(), self.date.clone());
        params.insert("dateStart".into(), self.date.clone());
        params.insert("dateEnd".into(), self.date.clone());
        params.insert("REQ0JourneyTime".into(), self.hour.clone());
        params.insert("time".into(), self.hour.clone());

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TimetableRequest {
        TimetableRequest::new(
            StationCode::parse("5100066").unwrap(),
            StationCode::parse("5100300").unwrap(),
            "01.06.24",
            "09:00",
        )
        .unwrap()
    }

    #[test]
    fn params_are_deterministic() {
        assert_eq!(request().params(), request().params());
    }

    #[test]
    fn date_is_written_to_all_date_fields() {
        let params = request().params();
        for field in ["REQ0JourneyDate", "date", "dateStart", "dateEnd"] {
            assert_eq!(params.get(field).map(String::as_str), Some("01.06.24"));
        }
    }

    #[test]
    fn hour_is_written_to_both_time_fields() {
        let params = request().params();
        for field in ["REQ0JourneyTime", "time"] {
            assert_eq!(params.get(field).map(String::as_str), Some("09:00"));
        }
    }

    #[test]
    fn station_codes_land_in_stop_fields() {
        let params = request().params();
        assert_eq!(
            params.get("REQ0JourneyStopsS0G").map(String::as_str),
            Some("5100066")
        );
        assert_eq!(
            params.get("REQ0JourneyStopsZ0G").map(String::as_str),
            Some("5100300")
        );
    }

    #[test]
    fn fixed_params_are_present() {
        let params = request().params();
        assert_eq!(
            params.get("wDayExt0").map(String::as_str),
            Some("Pn|Wt|Śr|Cz|Pt|So|Nd")
        );
        assert_eq!(params.get("start").map(String::as_str), Some("start"));
        assert_eq!(
            params.get("REQ0HafasSearchForw").map(String::as_str),
            Some("1")
        );
    }

    #[test]
    fn empty_date_is_rejected() {
        let err = TimetableRequest::new(
            StationCode::parse("1").unwrap(),
            StationCode::parse("2").unwrap(),
            "",
            "09:00",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "date must not be empty");
    }

    #[test]
    fn empty_hour_is_rejected() {
        let err = TimetableRequest::new(
            StationCode::parse("1").unwrap(),
            StationCode::parse("2").unwrap(),
            "01.06.24",
            "",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "hour must not be empty");
    }
}
