use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ReadplanError, Result};
use crate::navigation::NavigationState;
use crate::plan::ReadingPlan;
use crate::progress::ProgressTracker;
use crate::store::KeyValueStore;
use std::str::FromStr;

use super::helpers::day_view;

/// How a user names a plan day: its ISO date id, or its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayTarget {
    Date(String),
    Position(usize),
}

impl FromStr for DayTarget {
    type Err = ReadplanError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReadplanError::Api("Empty day".to_string()));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            let position: usize = s
                .parse()
                .map_err(|_| ReadplanError::Api(format!("Invalid day number: {}", s)))?;
            if position == 0 {
                return Err(ReadplanError::Api("Day numbers start at 1".to_string()));
            }
            return Ok(DayTarget::Position(position));
        }
        Ok(DayTarget::Date(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// The current day in single-day form.
pub fn view<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &NavigationState,
    progress: &ProgressTracker<S>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match day_view(plan, nav, progress, nav.current_index()) {
        Some(day) => result = result.with_day(day),
        None => result.add_message(CmdMessage::warning("The reading plan has no days")),
    }
    Ok(result)
}

pub fn select<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &mut NavigationState,
    progress: &ProgressTracker<S>,
    target: &DayTarget,
) -> Result<CmdResult> {
    let index = match target {
        DayTarget::Date(date) => plan.find_index_by_date(date),
        DayTarget::Position(position) => position.checked_sub(1),
    };

    let moved = index.is_some_and(|i| nav.select_day(i));
    let mut result = view(plan, nav, progress)?;
    if !moved {
        let wanted = match target {
            DayTarget::Date(date) => date.clone(),
            DayTarget::Position(position) => format!("#{}", position),
        };
        result.add_message(CmdMessage::warning(format!(
            "No reading for {} in the plan",
            wanted
        )));
    }
    Ok(result)
}

pub fn step<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &mut NavigationState,
    progress: &ProgressTracker<S>,
    direction: Step,
) -> Result<CmdResult> {
    let moved = match direction {
        Step::Next => nav.next_day(),
        Step::Previous => nav.previous_day(),
    };
    let mut result = view(plan, nav, progress)?;
    if !moved {
        let edge = match direction {
            Step::Next => "Already at the last day of the plan",
            Step::Previous => "Already at the first day of the plan",
        };
        result.add_message(CmdMessage::info(edge));
    }
    Ok(result)
}
