use std::time::Duration;

use clap::Args;

use crate::upstream::{DEFAULT_EVENTS_URL, DEFAULT_FAVORITES_URL};

/// Service configuration, from command line flags or environment variables.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// How long event metadata and schedules are cached, e.g. `1h` or `90m`
    #[arg(long = "ttl", default_value = "1h", value_parser = parse_ttl, env = "CACHE_TTL")]
    pub cache_ttl: Duration,

    /// Product identifier written to PRODID
    #[arg(long, default_value = "elphi-calendar", env = "ICS_CREATOR")]
    pub creator: String,

    /// Display name of the generated calendars
    #[arg(long, default_value = "Elbphilharmonie Merkliste", env = "CALENDAR_NAME")]
    pub name: String,

    /// Base URL of the favorites API
    #[arg(long, default_value = DEFAULT_FAVORITES_URL, env = "FAVORITES_URL")]
    pub favorites_url: String,

    /// Base URL of the event API
    #[arg(long, default_value = DEFAULT_EVENTS_URL, env = "EVENTS_URL")]
    pub events_url: String,

    /// Timeout of a single upstream request, in seconds
    #[arg(long, default_value_t = 30, env = "REQUEST_TIMEOUT_SECONDS")]
    pub request_timeout_seconds: u64,
}

/// Parses a duration made of `<number><unit>` parts, e.g. `1h`, `1h30m`,
/// `1.5h` or `500ms`. Units are `ms`, `s`, `m` and `h`.
fn parse_ttl(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("duration is empty".to_string());
    }

    let is_number = |c: char| c.is_ascii_digit() || c == '.';
    let mut total = Duration::ZERO;
    let mut rest = value;
    while !rest.is_empty() {
        let number_len = rest.find(|c: char| !is_number(c)).unwrap_or(rest.len());
        if number_len == 0 {
            return Err(format!("expected a number in {value:?}"));
        }
        let number: f64 = rest[..number_len]
            .parse()
            .map_err(|_| format!("invalid number {:?}", &rest[..number_len]))?;
        rest = &rest[number_len..];

        let unit_len = rest.find(is_number).unwrap_or(rest.len());
        let seconds = match &rest[..unit_len] {
            "ms" => number / 1_000.0,
            "s" => number,
            "m" => number * 60.0,
            "h" => number * 3_600.0,
            "" => return Err(format!("missing unit in {value:?}")),
            unit => return Err(format!("unknown unit {unit:?} in {value:?}")),
        };
        total += Duration::try_from_secs_f64(seconds).map_err(|err| err.to_string())?;
        rest = &rest[unit_len..];
    }

    if total.is_zero() {
        return Err("duration must be positive".to_string());
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn test_default_values() {
        let cli = TestCli::parse_from(["test"]);

        assert_eq!(cli.config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(cli.config.creator, "elphi-calendar");
        assert_eq!(cli.config.name, "Elbphilharmonie Merkliste");
        assert_eq!(cli.config.favorites_url, DEFAULT_FAVORITES_URL);
        assert_eq!(cli.config.events_url, DEFAULT_EVENTS_URL);
        assert_eq!(cli.config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_ttl_flag() {
        let cli = TestCli::parse_from(["test", "--ttl", "10m"]);
        assert_eq!(cli.config.cache_ttl, Duration::from_secs(600));
    }

    #[test]
    fn test_parse_ttl() {
        assert_eq!(parse_ttl("1h"), Ok(Duration::from_secs(3_600)));
        assert_eq!(parse_ttl("1h30m"), Ok(Duration::from_secs(5_400)));
        assert_eq!(parse_ttl("1.5h"), Ok(Duration::from_secs(5_400)));
        assert_eq!(parse_ttl("45s"), Ok(Duration::from_secs(45)));
        assert_eq!(parse_ttl("2m500ms"), Ok(Duration::from_millis(120_500)));
        assert_eq!(parse_ttl(" 90m "), Ok(Duration::from_secs(5_400)));
    }

    #[test]
    fn test_parse_ttl_rejects_malformed_values() {
        assert!(parse_ttl("").is_err());
        assert!(parse_ttl("3600").is_err());
        assert!(parse_ttl("1d").is_err());
        assert!(parse_ttl("h").is_err());
        assert!(parse_ttl("1..5h").is_err());
        assert!(parse_ttl("0s").is_err());
        assert!(parse_ttl("99999999999999999999999h").is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "--creator",
            "my-calendar",
            "--name",
            "Konzerte",
            "--favorites-url",
            "http://localhost:9000/api",
            "--events-url",
            "http://localhost:9000/evis",
            "--request-timeout-seconds",
            "5",
        ]);

        assert_eq!(cli.config.creator, "my-calendar");
        assert_eq!(cli.config.name, "Konzerte");
        assert_eq!(cli.config.favorites_url, "http://localhost:9000/api");
        assert_eq!(cli.config.events_url, "http://localhost:9000/evis");
        assert_eq!(cli.config.request_timeout_seconds, 5);
    }

    #[test]
    fn test_rejects_invalid_ttl() {
        assert!(TestCli::try_parse_from(["test", "--ttl", "soon"]).is_err());
    }
}
