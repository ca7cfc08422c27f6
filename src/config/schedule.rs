use std::{fmt::Formatter, time::Duration};

use chrono::{DateTime, TimeZone};
use croner::Cron;
use serde::{de::{self, Visitor}, Deserialize};
use snafu::{ResultExt, Snafu};

/// When the printers are polled: either every fixed interval or on a cron
/// schedule.
#[derive(Debug)]
pub enum TimeSchedule {
    Interval(Duration),
    Cron(Cron),
}

impl TimeSchedule {
    pub fn get_duration_till_next_occurrence(&self) -> Result<Duration, ScheduleError> {
        self.duration_till_next_occurrence_from(&chrono::Local::now())
    }

    fn duration_till_next_occurrence_from<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<Duration, ScheduleError> {
        match self {
            TimeSchedule::Cron(cron) => {
                let next_occurrence = cron.find_next_occurrence(now, false).with_whatever_context(|_| format!("Could not resolve next occurrence from cron {cron}"))?;
                (next_occurrence - now.clone()).to_std().with_whatever_context(|_| "Could not convert TimeDelta to Duration")
            },
            TimeSchedule::Interval(duration) => Ok(*duration),
        }
    }
}

impl<'de> Deserialize<'de> for TimeSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: serde::Deserializer<'de> {
        struct TimeScheduleVisitor;

        impl<'de> Visitor<'de> for TimeScheduleVisitor {
            type Value = TimeSchedule;

            fn expecting(&self, formatter: &mut Formatter) -> Result<(), std::fmt::Error> {
                formatter.write_str("a cron expression or a duration string")
            }

            fn visit_str<E>(self, value: &str) -> Result<TimeSchedule, E>
            where
                E: de::Error,
            {
                // Durations first, so '30s' is never mistaken for anything else.
                if let Ok(duration) = humantime::parse_duration(value) {
                    if duration.is_zero() {
                        return Err(E::custom("Poll interval must be greater than zero"));
                    }
                    return Ok(TimeSchedule::Interval(duration));
                }

                if let Ok(cron) = Cron::new(value).parse() {
                    return Ok(TimeSchedule::Cron(cron));
                }

                Err(E::custom(format!("Invalid time schedule string: '{}'", value)))
            }
        }

        deserializer.deserialize_str(TimeScheduleVisitor)
    }
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum ScheduleError {
    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde::de::{value::{Error as ValueError, StrDeserializer}, IntoDeserializer};

    use super::*;

    fn parse(value: &str) -> Result<TimeSchedule, ValueError> {
        let deserializer: StrDeserializer<ValueError> = value.into_deserializer();
        TimeSchedule::deserialize(deserializer)
    }

    #[test]
    fn humantime_strings_are_intervals() {
        let schedule = parse("1m 30s").unwrap();
        assert_eq!(schedule.get_duration_till_next_occurrence().unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn cron_expressions_are_cron_schedules() {
        let schedule = parse("0 * * * *").unwrap();
        assert!(matches!(schedule, TimeSchedule::Cron(_)));

        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 0).unwrap();
        let wait = schedule.duration_till_next_occurrence_from(&now).unwrap();
        assert_eq!(wait, Duration::from_secs(45 * 60));
    }

    #[test]
    fn cron_schedule_resolves_from_local_time() {
        let schedule = parse("*/5 * * * *").unwrap();
        let wait = schedule.get_duration_till_next_occurrence().unwrap();
        assert!(wait <= Duration::from_secs(5 * 60));
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(parse("0s").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse("every now and then").err().unwrap();
        assert!(err.to_string().contains("Invalid time schedule string"));
    }
}
