use chrono::NaiveDate;

use crate::domain::changelog::group_by_date;
use crate::domain::commit::CommitRecord;

const RULE_WIDTH: usize = 50;

/// Plain-text change log: one block per date, newest first, framed by `=` rules.
pub fn render_text(commits: &[CommitRecord], generated_on: NaiveDate) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("Change Logs - {}\n", generated_on.format("%Y-%m-%d")));
    out.push_str(&format!("{rule}\n"));

    for (date_key, group) in group_by_date(commits).descending() {
        out.push_str(&format!("{date_key}\n"));
        for commit in group {
            let entry = commit.entry();
            out.push_str(&format!("- {} (by {})\n", entry.message, entry.author));
        }
        out.push('\n');
    }

    out.push_str(&rule);
    out
}
