//! Markdown renderer module
//!
//! Produces the text written into a day's journal file: the date header on
//! creation and a time subheading on every write.

use chrono::NaiveTime;

use crate::models::JournalDate;

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Render the first line of a new journal file, e.g.
/// `# September 10th, 2017 - Sunday\n`
pub fn render_header(date: JournalDate) -> String {
    let naive = date.naive();
    format!(
        "# {} {}{}, {} - {}\n",
        naive.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        naive.format("%Y"),
        naive.format("%A")
    )
}

/// Render a time subheading block, e.g. `\n\n## 3:07 pm\n\n`
pub fn render_time_entry(time: NaiveTime) -> String {
    format!("\n\n## {}\n\n", time.format("%-I:%M %P"))
}
