use chrono::NaiveDate;

use crate::domain::changelog::group_by_date;
use crate::domain::commit::{CommitEntry, CommitRecord};

/// Markdown change log that passes markdownlint heading and list spacing rules.
pub fn render_markdown(commits: &[CommitRecord], generated_on: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Change Logs - {}\n\n", generated_on.format("%Y-%m-%d")));

    for (idx, (date_key, group)) in group_by_date(commits).descending().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("## {date_key}\n\n"));
        for commit in group {
            push_bullet(&mut out, &commit.entry());
        }
        out.push('\n');
    }

    let mut document = out.trim_end().to_string();
    document.push('\n');
    document
}

fn push_bullet(out: &mut String, entry: &CommitEntry<'_>) {
    let message = entry.single_line_message();
    match entry.url {
        Some(url) => out.push_str(&format!("- [`{}`]({url}) **{message}**\n", entry.short_sha)),
        None => out.push_str(&format!("- **{message}**\n")),
    }
    out.push_str(&format!("  *by {}*\n", entry.author));
}
