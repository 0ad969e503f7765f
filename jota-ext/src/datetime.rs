//! Date-time and ISO-8601 duration parsing
//!
//! Date-time parsing delegates to chrono: RFC 3339 first, then a short list
//! of common formats, then an explicit caller-supplied format when given.
//! Naive inputs are interpreted as UTC. Numeric inputs are epoch seconds, or
//! epoch milliseconds when the magnitude says so.

use crate::helpers::{self, optional_str, require_str};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Timelike, Utc,
};
use chrono::{Datelike, LocalResult};
use jota_core::{slot_type_name, ExtError, Json, Slot};
use jota_plugin::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};
use serde_json::json;

/// Auto-detected formats tried after RFC 3339, in order
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Epoch values at or above this magnitude are taken as milliseconds
const MILLIS_CUTOVER: i64 = 100_000_000_000;

fn utc_fixed(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).fixed_offset()
}

fn parse_text(input: &str, format: Option<&str>) -> Result<DateTime<FixedOffset>, ExtError> {
    let input = input.trim();

    if let Some(fmt) = format {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(utc_fixed(dt));
        }
        return NaiveDate::parse_from_str(input, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(utc_fixed)
            .ok_or_else(|| ExtError::date_parse_error(input));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt);
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(utc_fixed(dt));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(input, fmt) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(utc_fixed(dt));
            }
        }
    }

    Err(ExtError::date_parse_error(input))
}

fn parse_epoch(value: f64) -> Result<DateTime<FixedOffset>, ExtError> {
    let millis = if (value.abs() as i64) >= MILLIS_CUTOVER {
        value as i64
    } else {
        (value * 1000.0) as i64
    };
    match Utc.timestamp_millis_opt(millis) {
        LocalResult::Single(dt) => Ok(dt.fixed_offset()),
        _ => Err(ExtError::date_parse_error(&value.to_string())),
    }
}

fn to_object(dt: DateTime<FixedOffset>, format: Option<&str>) -> Json {
    let mut out = json!({
        "iso": dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        "epoch": dt.timestamp(),
        "millis": dt.timestamp_millis(),
        "year": dt.year(),
        "month": dt.month(),
        "day": dt.day(),
        "hour": dt.hour(),
        "minute": dt.minute(),
        "second": dt.second(),
        "millisecond": dt.timestamp_subsec_millis(),
        "weekday": dt.format("%A").to_string(),
        "offset": dt.offset().to_string(),
    });
    if let Some(fmt) = format {
        out["formatted"] = Json::String(dt.format(fmt).to_string());
    }
    out
}

/// ISO-8601 duration grammar, date part then optional time part
const DURATION_PATTERN: &str = r"^[Pp](?:(\d+(?:\.\d+)?)[Yy])?(?:(\d+(?:\.\d+)?)M)?(?:(\d+(?:\.\d+)?)[Ww])?(?:(\d+(?:\.\d+)?)[Dd])?(?:[Tt](?:(\d+(?:\.\d+)?)[Hh])?(?:(\d+(?:\.\d+)?)M)?(?:(\d+(?:\.\d+)?)[Ss])?)?$";

/// Parse an ISO-8601 duration into its components plus a nominal
/// `totalSeconds` (year = 365 days, month = 30 days).
pub fn parse_duration(input: &str) -> Result<Json, ExtError> {
    let re = helpers::get_regex(DURATION_PATTERN)?;
    let caps = re
        .captures(input.trim())
        .ok_or_else(|| ExtError::duration_parse_error(input))?;

    let field = |i: usize| -> f64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    // "P" with no components at all is not a duration
    if (1..=7).all(|i| caps.get(i).is_none()) {
        return Err(ExtError::duration_parse_error(input));
    }

    let (years, months, weeks, days) = (field(1), field(2), field(3), field(4));
    let (hours, minutes, seconds) = (field(5), field(6), field(7));

    let total_seconds = years * 365.0 * 86_400.0
        + months * 30.0 * 86_400.0
        + weeks * 7.0 * 86_400.0
        + days * 86_400.0
        + hours * 3_600.0
        + minutes * 60.0
        + seconds;

    Ok(json!({
        "years": years,
        "months": months,
        "weeks": weeks,
        "days": days,
        "hours": hours,
        "minutes": minutes,
        "seconds": seconds,
        "totalSeconds": total_seconds,
    }))
}

// ============ ParseDateTime ============

pub struct ParseDateTime;

static PARSE_DATETIME_PARAMS: [ParamSpec; 2] = [
    ParamSpec::required("value", ParamType::Any, "Date-time text or epoch number"),
    ParamSpec::optional("format", ParamType::String, "Explicit chrono format"),
];

static PARSE_DATETIME_EXAMPLES: [&str; 2] = [
    "parseDateTime(\"2017-01-30T12:00:00Z\") → {year: 2017, month: 1, ...}",
    "parseDateTime(\"30/01/2017\", \"%d/%m/%Y\") → parsed with the given format",
];

impl ExtensionFunction for ParseDateTime {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "parseDateTime",
            description: "Parse flexible date-time input into a field object",
            params: &PARSE_DATETIME_PARAMS,
            returns: ParamType::Object,
            examples: &PARSE_DATETIME_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let format = optional_str(args, 1, "parseDateTime", "format")?;
        let dt = match args.first() {
            Some(Some(Json::String(s))) => parse_text(s, format)?,
            Some(Some(Json::Number(n))) => {
                let v = n
                    .as_f64()
                    .ok_or_else(|| ExtError::date_parse_error(&n.to_string()))?;
                parse_epoch(v)?
            }
            other => {
                let got = other.map(slot_type_name).unwrap_or("Undefined");
                return Err(ExtError::arg_type("parseDateTime", "value", "String or Number", got));
            }
        };
        Ok(Some(to_object(dt, format)))
    }
}

// ============ ParseDuration ============

pub struct ParseDuration;

static PARSE_DURATION_PARAMS: [ParamSpec; 1] = [ParamSpec::required(
    "duration",
    ParamType::String,
    "ISO-8601 duration, e.g. P1DT2H30M",
)];

static PARSE_DURATION_EXAMPLES: [&str; 1] =
    ["parseDuration(\"P1DT2H\") → {days: 1, hours: 2, ..., totalSeconds: 93600}"];

impl ExtensionFunction for ParseDuration {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "parseDuration",
            description: "Parse an ISO-8601 duration into component fields",
            params: &PARSE_DURATION_PARAMS,
            returns: ParamType::Object,
            examples: &PARSE_DURATION_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let input = require_str(args, 0, "parseDuration", "duration")?;
        parse_duration(input).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rfc3339() {
        let dt = parse_text("2017-01-30T12:30:45Z", None).unwrap();
        let obj = to_object(dt, None);
        assert_eq!(obj["year"], 2017);
        assert_eq!(obj["month"], 1);
        assert_eq!(obj["day"], 30);
        assert_eq!(obj["hour"], 12);
        assert_eq!(obj["minute"], 30);
        assert_eq!(obj["second"], 45);
        assert_eq!(obj["weekday"], "Monday");
        assert_eq!(obj["epoch"], 1485779445_i64);
    }

    #[test]
    fn test_date_only() {
        let dt = parse_text("2024-03-15", None).unwrap();
        let obj = to_object(dt, None);
        assert_eq!(obj["year"], 2024);
        assert_eq!(obj["hour"], 0);
    }

    #[test]
    fn test_explicit_format() {
        let dt = parse_text("15/03/2024", Some("%d/%m/%Y")).unwrap();
        let obj = to_object(dt, Some("%d/%m/%Y"));
        assert_eq!(obj["month"], 3);
        assert_eq!(obj["formatted"], "15/03/2024");
    }

    #[test]
    fn test_invalid_datetime() {
        let err = parse_text("yesterday-ish", None).unwrap_err();
        assert_eq!(err.code, jota_core::codes::DATE_PARSE_ERROR);
    }

    #[test]
    fn test_epoch_seconds_and_millis() {
        let secs = parse_epoch(1485779445.0).unwrap();
        let millis = parse_epoch(1485779445000.0).unwrap();
        assert_eq!(secs, millis);
    }

    #[test]
    fn test_duration_full() {
        let out = parse_duration("P1Y2M3DT4H5M6S").unwrap();
        assert_eq!(out["years"], 1.0);
        assert_eq!(out["months"], 2.0);
        assert_eq!(out["days"], 3.0);
        assert_eq!(out["hours"], 4.0);
        assert_eq!(out["minutes"], 5.0);
        assert_eq!(out["seconds"], 6.0);
    }

    #[test]
    fn test_duration_time_only_and_total() {
        let out = parse_duration("P1DT2H").unwrap();
        assert_eq!(out["totalSeconds"], json!(93_600.0));
    }

    #[test]
    fn test_duration_fractional_seconds() {
        let out = parse_duration("PT0.5S").unwrap();
        assert_eq!(out["seconds"], 0.5);
    }

    #[test]
    fn test_duration_weeks() {
        let out = parse_duration("P4W").unwrap();
        assert_eq!(out["weeks"], 4.0);
        assert_eq!(out["totalSeconds"], json!(4.0 * 7.0 * 86_400.0));
    }

    #[test]
    fn test_duration_invalid() {
        for bad in ["P", "PT", "4 days", "P1H"] {
            let err = parse_duration(bad).unwrap_err();
            assert_eq!(err.code, jota_core::codes::DURATION_PARSE_ERROR, "{}", bad);
        }
    }

    #[test]
    fn test_plugin_accepts_number() {
        let out = ParseDateTime.call(&[Some(json!(1485779445))]).unwrap().unwrap();
        assert_eq!(out["year"], 2017);
    }

    #[test]
    fn test_plugin_rejects_bool() {
        let err = ParseDateTime.call(&[Some(json!(true))]).unwrap_err();
        assert_eq!(err.code, jota_core::codes::TYPE_ERROR);
    }
}
