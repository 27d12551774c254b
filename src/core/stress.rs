use crate::models::MoodRecord;
use crate::ui::messages::alert;

/// Records of one employee, oldest first.
///
/// Sorting is stable, so records sharing a timestamp keep file order.
fn employee_timeline<'a>(employee_ref: &str, history: &'a [MoodRecord]) -> Vec<&'a MoodRecord> {
    let mut recs: Vec<&MoodRecord> = history
        .iter()
        .filter(|r| r.employee_ref == employee_ref)
        .collect();
    recs.sort_by_key(|r| r.timestamp);
    recs
}

/// Alert decision: true iff the last `threshold` records of the employee
/// all carry a stress-indicating mood.
///
/// Fewer records than `threshold` is not enough evidence, and a zero
/// threshold never alerts.
pub fn check_stress(employee_ref: &str, history: &[MoodRecord], threshold: usize) -> bool {
    if threshold == 0 {
        return false;
    }

    let timeline = employee_timeline(employee_ref, history);
    if timeline.len() < threshold {
        return false;
    }

    timeline[timeline.len() - threshold..]
        .iter()
        .all(|r| r.mood.is_stress_indicating())
}

/// Length of the trailing run of stress-indicating records.
pub fn stress_run(employee_ref: &str, history: &[MoodRecord]) -> usize {
    employee_timeline(employee_ref, history)
        .iter()
        .rev()
        .take_while(|r| r.mood.is_stress_indicating())
        .count()
}

/// HR notification stub: console banner plus a warn-level log line.
pub fn notify_hr(employee_ref: &str, run: usize) {
    log::warn!("stress alert for {employee_ref}: {run} consecutive stressed records");
    alert(format!(
        "ALERT: Prolonged stress detected for {employee_ref} ({run} consecutive records). Notifying HR."
    ));
}
