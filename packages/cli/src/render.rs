// ABOUTME: Terminal rendering for the bid tracking board
// ABOUTME: Kanban and deadline tables via comfy-table, notices via colored

use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};
use cotai_board::{
    classify_bid, BidAction, BidRecord, BoardView, DeadlineStatus, DeadlineThresholds, Notice, NoticeVariant,
    Severity,
};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Truncate to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn severity_label(status: &DeadlineStatus) -> ColoredString {
    let label = status.label();
    match status.severity {
        Severity::Critical => label.red(),
        Severity::Warning => label.yellow(),
        Severity::Normal => label.normal(),
    }
}

fn card_text(bid: &BidRecord, now: DateTime<Utc>, thresholds: &DeadlineThresholds) -> String {
    let mut card = format!(
        "{}\n{} #{}\n{}",
        truncate(&bid.title, 28).bold(),
        truncate(&bid.organization, 20).dimmed(),
        bid.number,
        bid.deadline.format(DATE_FORMAT),
    );

    // Won and lost bids have no urgency
    if !bid.status.is_terminal() {
        let deadline = classify_bid(bid, now, thresholds);
        card.push_str(&format!(" {}", severity_label(&deadline)));
    }

    // Card buttons, as accepted by `cotai act`
    let actions: Vec<&str> = BidAction::offered_for(bid.status)
        .into_iter()
        .map(|action| action.name())
        .collect();
    if !actions.is_empty() {
        card.push_str(&format!("\n{} {}", "→".cyan(), actions.join(" | ")));
    }

    card
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// The board as a table with one column per pipeline stage
pub fn board_table(view: &BoardView<'_>, now: DateTime<Utc>, thresholds: &DeadlineThresholds) -> Table {
    let mut table = styled_table();

    table.set_header(
        view.columns()
            .iter()
            .map(|bucket| Cell::new(format!("{} ({})", bucket.column.title, bucket.count())))
            .collect::<Vec<_>>(),
    );

    let depth = view.columns().iter().map(|b| b.count()).max().unwrap_or(0).max(1);
    for row in 0..depth {
        let cells: Vec<String> = view
            .columns()
            .iter()
            .map(|bucket| match bucket.bids.get(row) {
                Some(bid) => card_text(bid, now, thresholds),
                None if row == 0 => bucket.placeholder().unwrap_or_default().dimmed().to_string(),
                None => String::new(),
            })
            .collect();
        table.add_row(cells);
    }

    table
}

/// A flat list of bids with their deadline classification
pub fn deadlines_table(bids: &[&BidRecord], now: DateTime<Utc>, thresholds: &DeadlineThresholds) -> Table {
    let mut table = styled_table();

    table.set_header(vec!["ID", "Licitação", "Órgão", "Prazo", "Status", "Restante"]);

    for bid in bids {
        let deadline = classify_bid(bid, now, thresholds);
        table.add_row(vec![
            bid.id.clone(),
            truncate(&bid.title, 32),
            truncate(&bid.organization, 24),
            bid.deadline.format(DATE_FORMAT).to_string(),
            bid.status.title().to_string(),
            severity_label(&deadline).to_string(),
        ]);
    }

    table
}

pub fn render_notice(notice: &Notice) -> String {
    match notice.variant {
        NoticeVariant::Default => format!("{} {}", notice.title.green().bold(), notice.description),
        NoticeVariant::Destructive => format!("{} {}", notice.title.red().bold(), notice.description),
    }
}
