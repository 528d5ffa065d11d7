//! Duration token parsing.
//!
//! Plan files write step lengths as short tokens: `"5km"`, `"10m"`,
//! `"30s"` or a bare `"45"`. Kilometer tokens are distances and come back
//! in meters; all other tokens come back in seconds.

use crate::workouts::types::{Step, StepLength, WorkoutParseError};

const KILOMETERS: &str = "km";
const MINUTES: char = 'm';
const SECONDS: char = 's';

/// Parse a duration token into a [`StepLength`].
///
/// Units are checked in order: `km`, then `m`, then `s`, then a bare
/// integer. The unit is stripped wherever it occurs in the token.
pub fn parse_duration(token: &str) -> Result<StepLength, WorkoutParseError> {
    if token.contains(KILOMETERS) {
        let km: f64 = token
            .replace(KILOMETERS, "")
            .trim()
            .parse()
            .map_err(|_| WorkoutParseError::invalid("duration", token))?;

        if !km.is_finite() || km < 0.0 {
            return Err(WorkoutParseError::invalid("duration", token));
        }

        return Ok(StepLength::Meters(km * 1000.0));
    }

    if token.contains(MINUTES) {
        let minutes = parse_whole(&token.replace(MINUTES, ""), token)?;
        return minutes
            .checked_mul(60)
            .map(StepLength::Seconds)
            .ok_or_else(|| WorkoutParseError::invalid("duration", token));
    }

    if token.contains(SECONDS) {
        return parse_whole(&token.replace(SECONDS, ""), token).map(StepLength::Seconds);
    }

    parse_whole(token, token).map(StepLength::Seconds)
}

fn parse_whole(text: &str, token: &str) -> Result<u64, WorkoutParseError> {
    text.trim()
        .parse()
        .map_err(|_| WorkoutParseError::invalid("duration", token))
}

/// Sum the lengths of a sequence of steps into one number.
///
/// Seconds and meters are added together as plain numbers, so a workout
/// that mixes timed and distance steps gets a total in no single unit.
/// Callers that need a pure time figure must filter distance steps first.
pub fn sum_step_lengths(steps: &[Step]) -> Result<f64, WorkoutParseError> {
    steps.iter().try_fold(0.0, |total, step| {
        let length = parse_duration(&step.duration)?;
        if length.is_distance() {
            tracing::debug!(duration = %step.duration, "adding distance step into moving time");
        }
        Ok(total + length.value())
    })
}
