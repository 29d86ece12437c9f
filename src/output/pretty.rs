use std::fmt::Write;

use colored::Colorize;

use crate::features::expense::{Expense, MonthlyTotals};
use crate::features::nlp::ParsedEvent;
use crate::features::schedule::ScheduleEntry;

/// Format a parsed event for display (parse-only mode)
pub fn format_parsed_event_pretty(event: &ParsedEvent) -> String {
    let mut output = format!("{}\n", "Parsed Event (not saved)".yellow().bold());
    writeln!(output, "  {} {}", "Title:".cyan().bold(), event.title).ok();
    writeln!(output, "  {} {}", "When:".cyan(), event.datetime.format("%a %Y-%m-%d %H:%M")).ok();
    if let Some(note) = &event.note {
        writeln!(output, "  {} {note}", "Note:".dimmed()).ok();
    }
    output
}

/// Format a newly stored schedule entry
pub fn format_schedule_entry_pretty(entry: &ScheduleEntry) -> String {
    let mut output = format!(
        "{} {} (ID: {})\n",
        "Scheduled:".green().bold(),
        entry.title,
        entry.id.to_string().dimmed()
    );
    writeln!(output, "  {} {}", "When:".cyan(), entry.datetime.format("%a %Y-%m-%d %H:%M")).ok();
    if let Some(note) = &entry.note {
        writeln!(output, "  {} {note}", "Note:".dimmed()).ok();
    }
    output
}

/// Format a list of schedule entries
pub fn format_schedule_pretty(entries: &[ScheduleEntry]) -> String {
    if entries.is_empty() {
        return "Schedule (0 items)\n  No items".to_string();
    }

    let mut output = format!("Schedule ({} items)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let mut line = format!(
            "{}  {}",
            entry.datetime.format("%Y-%m-%d %H:%M").to_string().yellow(),
            entry.title.bold()
        );
        if let Some(note) = &entry.note {
            write!(line, "  {}", note.dimmed()).ok();
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a newly stored expense
pub fn format_expense_pretty(expense: &Expense) -> String {
    let mut output = format!(
        "{} {:.2} {} (ID: {})\n",
        "Recorded:".green().bold(),
        expense.amount,
        expense.category.cyan(),
        expense.id.to_string().dimmed()
    );
    if let Some(note) = &expense.note {
        writeln!(output, "  {} {note}", "Note:".dimmed()).ok();
    }
    if let Some(url) = &expense.image_url {
        writeln!(output, "  {} {url}", "Receipt:".dimmed()).ok();
    }
    output
}

/// Format monthly spending totals
pub fn format_monthly_totals_pretty(totals: &MonthlyTotals) -> String {
    let mut output = format!(
        "{}\n",
        format!("Expenses {:04}-{:02}", totals.year, totals.month).bold()
    );
    writeln!(output, "  {} {:>12.2}", "Personal:".cyan(), totals.personal).ok();
    writeln!(output, "  {} {:>12.2}", "Company: ".magenta(), totals.company).ok();
    writeln!(output, "  {} {:>12.2}", "Total:   ".green().bold(), totals.total).ok();
    output
}
