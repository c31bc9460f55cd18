use crate::commands::{CmdMessage, CmdResult, ProgressReport};
use crate::error::Result;
use crate::navigation::NavigationState;
use crate::plan::ReadingPlan;
use crate::progress::ProgressTracker;
use crate::store::KeyValueStore;

use super::helpers::day_record_ids;

/// Read/total chapter counts for the current day and for the whole plan.
pub fn run<S: KeyValueStore>(
    plan: &ReadingPlan,
    nav: &NavigationState,
    progress: &ProgressTracker<S>,
) -> Result<CmdResult> {
    let Some(current) = plan.at(nav.current_index()) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("The reading plan has no days"));
        return Ok(result);
    };

    let count = |ids: &[String]| progress.completed_count(ids.iter().map(String::as_str));

    let day_ids = day_record_ids(current);
    let mut report = ProgressReport {
        day_id: current.id.clone(),
        day_label: current.display_label().to_string(),
        day_completed: count(&day_ids),
        day_total: day_ids.len(),
        plan_completed: 0,
        plan_total: 0,
        days_finished: 0,
        days_with_work: 0,
    };

    for day in plan.iter() {
        let ids = day_record_ids(day);
        if ids.is_empty() {
            continue;
        }
        let done = count(&ids);
        report.plan_completed += done;
        report.plan_total += ids.len();
        report.days_with_work += 1;
        if done == ids.len() {
            report.days_finished += 1;
        }
    }

    Ok(CmdResult::default().with_progress(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::Session;

    #[test]
    fn counts_day_and_plan() {
        let mut s = Session::on("2026-01-02");
        s.progress.toggle("2026-01-01|Genesis|1");
        s.progress.toggle("2026-01-02|Genesis|3");
        s.progress.toggle("2026-01-02|Genesis|4");
        s.progress.toggle("2026-01-02|Matthew|2");

        let report = run(&s.plan, &s.nav, &s.progress).unwrap().progress.unwrap();
        assert_eq!(report.day_id, "2026-01-02");
        assert_eq!((report.day_completed, report.day_total), (3, 3));
        assert_eq!((report.plan_completed, report.plan_total), (4, 7));
        assert_eq!((report.days_finished, report.days_with_work), (1, 2));
    }

    #[test]
    fn stale_records_are_not_counted() {
        let mut s = Session::on("2026-01-01");
        s.progress.toggle("2025-12-31|Malachi|4");
        let report = run(&s.plan, &s.nav, &s.progress).unwrap().progress.unwrap();
        assert_eq!(report.plan_completed, 0);
    }

    #[test]
    fn rest_day_has_nothing_to_read() {
        let s = Session::on("2026-01-04");
        let report = run(&s.plan, &s.nav, &s.progress).unwrap().progress.unwrap();
        assert_eq!(report.day_total, 0);
    }
}
