//! Repeat block expansion.
//!
//! A plan can write intervals compactly: a pseudo-step whose description
//! is `"4x"` followed by the one or two steps to repeat. Expansion turns
//! that into a flat list of genuine steps.

use crate::workouts::types::{RawStep, Step, WorkoutParseError};

/// Maximum number of steps a repeat marker pulls into its template.
pub const TEMPLATE_LEN: usize = 2;

/// Upper bound on the number of steps a single repeat block may produce.
pub const MAX_EXPANDED_STEPS: usize = 10_000;

/// Expand every repeat block in `steps`.
///
/// The template of a marker at index `i` is `steps[i + 1..i + 3]`, taken
/// by position. Template steps are consumed by the block and not emitted
/// again on their own. Steps without a duration that are not markers are
/// dropped.
pub fn expand_repeats(steps: &[RawStep]) -> Result<Vec<Step>, WorkoutParseError> {
    let mut expanded = Vec::with_capacity(steps.len());
    let mut i = 0;

    while i < steps.len() {
        let step = &steps[i];

        if step.repeat_marker().is_some() {
            expanded.extend(expand_block(steps, i)?);
            i += 1 + template_range(steps, i).len();
            continue;
        }

        if step.duration.is_some() {
            expanded.push(Step::try_from(step.clone())?);
        } else {
            tracing::debug!(index = i, "skipping step without duration");
        }

        i += 1;
    }

    Ok(expanded)
}

/// Expand the single repeat block whose marker sits at `marker_index`.
///
/// Returns the template repeated back to back, e.g. `[A, B, A, B, A, B]`
/// for a `"3x"` marker followed by `A, B, C`.
pub fn expand_block(steps: &[RawStep], marker_index: usize) -> Result<Vec<Step>, WorkoutParseError> {
    let marker = steps
        .get(marker_index)
        .and_then(RawStep::repeat_marker)
        .ok_or_else(|| WorkoutParseError::MissingField("repeat marker".to_string()))?;

    let count = parse_repeat_count(marker)?;

    let template = steps[template_range(steps, marker_index)]
        .iter()
        .cloned()
        .map(Step::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count, template = template.len(), "expanding repeat block");

    if template.is_empty() {
        return Ok(Vec::new());
    }

    let total = count
        .checked_mul(template.len())
        .filter(|total| *total <= MAX_EXPANDED_STEPS)
        .ok_or_else(|| WorkoutParseError::invalid("repeat", &format!("{}x", marker)))?;

    let mut block = Vec::with_capacity(total);
    for _ in 0..count {
        block.extend(template.iter().cloned());
    }

    Ok(block)
}

fn template_range(steps: &[RawStep], marker_index: usize) -> std::ops::Range<usize> {
    let start = (marker_index + 1).min(steps.len());
    let end = (marker_index + 1 + TEMPLATE_LEN).min(steps.len());
    start..end
}

fn parse_repeat_count(text: &str) -> Result<usize, WorkoutParseError> {
    text.parse()
        .map_err(|_| WorkoutParseError::invalid("repeat", &format!("{}x", text)))
}
