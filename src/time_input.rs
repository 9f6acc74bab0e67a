/*!
 * Time window input parsing for the command line.
 *
 * Accepted forms, tried in order:
 * - plain seconds: `120`, `12.5`
 * - hours or minutes with a suffix: `2h`, `1.5h`, `90m`
 * - combined units: `1h30m15s`, `30m15s`, `2h15s`
 * - clock notation: `HH:MM:SS` and `MM:SS`, seconds may be fractional
 */

use anyhow::{Result, anyhow};

/// Parse a time given on the command line into seconds
pub fn parse_time_input(input: &str) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Time value is empty"));
    }

    if let Some(seconds) = parse_finite(input) {
        return Ok(seconds);
    }

    if let Some(hours) = input.strip_suffix('h').and_then(parse_finite) {
        return Ok(hours * 3600.0);
    }

    if let Some(minutes) = input.strip_suffix('m').and_then(parse_finite) {
        return Ok(minutes * 60.0);
    }

    if input.contains(['h', 'm', 's']) {
        return parse_units(input);
    }

    parse_clock(input)
}

/// Render seconds as `HH:MM:SS.mmm`
pub fn format_seconds(seconds: f64) -> String {
    let whole = seconds.max(0.0) as u64;
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let secs = seconds.max(0.0) - (hours * 3600 + minutes * 60) as f64;
    format!("{:02}:{:02}:{:06.3}", hours, minutes, secs)
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `XhYmZs` with every unit optional but in that order and at most once
fn parse_units(input: &str) -> Result<f64> {
    let mut total = 0.0;
    let mut rest = input;
    let mut last_rank = 0;

    while !rest.is_empty() {
        let Some(pos) = rest.find(['h', 'm', 's']) else {
            return Err(anyhow!("Missing unit in time value: {}", input));
        };
        let (number, unit) = rest.split_at(pos);
        let (rank, factor) = match &unit[..1] {
            "h" => (1, 3600.0),
            "m" => (2, 60.0),
            _ => (3, 1.0),
        };
        if rank <= last_rank {
            return Err(anyhow!("Invalid time format: {}", input));
        }
        let value = parse_finite(number)
            .filter(|v| *v >= 0.0)
            .ok_or_else(|| anyhow!("Invalid time format: {}", input))?;

        total += value * factor;
        last_rank = rank;
        rest = &unit[1..];
    }

    if total > 0.0 {
        Ok(total)
    } else {
        Err(anyhow!("Time value must be greater than zero: {}", input))
    }
}

fn parse_clock(input: &str) -> Result<f64> {
    let parts: Vec<&str> = input.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => ("0", *m, *s),
        _ => return Err(anyhow!("Invalid time format: {}", input)),
    };

    let hours: u64 = hours
        .parse()
        .map_err(|e| anyhow!("Invalid hours '{}': {}", hours, e))?;
    let minutes: u64 = minutes
        .parse()
        .map_err(|e| anyhow!("Invalid minutes '{}': {}", minutes, e))?;
    let seconds = parse_finite(seconds)
        .filter(|s| *s >= 0.0)
        .ok_or_else(|| anyhow!("Invalid seconds '{}'", seconds))?;

    Ok((hours * 3600 + minutes * 60) as f64 + seconds)
}
