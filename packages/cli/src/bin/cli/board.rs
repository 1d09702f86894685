// ABOUTME: Board subcommands for the cotai binary
// ABOUTME: Each run loads the demo bids, applies one command and renders the result

use chrono::{DateTime, Utc};
use colored::*;
use cotai_board::{
    seed_store, upcoming_deadlines, BidStatus, BoardCommand, BoardSession, CommandEffect,
    CommandOutcome, DragCommand, DragLocation,
};
use cotai_cli::render::{board_table, deadlines_table, render_notice};
use cotai_cli::{resolve_now, CliError};
use cotai_config::BoardConfig;

fn open_session() -> anyhow::Result<BoardSession> {
    let config = BoardConfig::from_env()?;
    let store = seed_store()?;
    Ok(BoardSession::new(store, config))
}

fn print_board(session: &BoardSession, now: DateTime<Utc>, json: bool) -> anyhow::Result<()> {
    let view = session.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", "📋 Acompanhamento".blue().bold());
    if !session.query().is_empty() {
        println!("{} {}", "Filtro:".dimmed(), session.query());
    }
    println!("{}", board_table(&view, now, &session.thresholds()));
    println!("Total: {} licitações", view.total().to_string().cyan());

    Ok(())
}

fn report(outcome: &CommandOutcome) {
    if let Some(notice) = &outcome.notice {
        println!("{}", render_notice(notice));
    } else if let CommandEffect::Ignored(reason) = &outcome.effect {
        println!("{} {}", "Nada alterado:".yellow(), reason);
    }
}

/// Column and index of a bid on the current board
fn locate(session: &BoardSession, bid_id: &str) -> Option<(BidStatus, usize)> {
    let view = session.view();
    view.columns().iter().find_map(|bucket| {
        bucket
            .bids
            .iter()
            .position(|bid| bid.id == bid_id)
            .map(|index| (bucket.column.status, index))
    })
}

pub fn handle_board(query: Option<String>, json: bool, today: Option<&str>) -> anyhow::Result<()> {
    let now = resolve_now(today)?;
    let mut session = open_session()?;

    if let Some(query) = query {
        session.handle(BoardCommand::Search { query });
    }

    print_board(&session, now, json)
}

pub fn handle_deadlines(within: Option<i64>, today: Option<&str>) -> anyhow::Result<()> {
    let now = resolve_now(today)?;
    let session = open_session()?;

    let window = within.unwrap_or(session.config().upcoming_window_days);
    let bids = upcoming_deadlines(session.store().all(), now, window);

    if bids.is_empty() {
        println!("{}", format!("Nenhum prazo nos próximos {} dias", window).yellow());
        return Ok(());
    }

    println!("{}", format!("⏰ Prazos nos próximos {} dias", window).blue().bold());
    println!("{}", deadlines_table(&bids, now, &session.thresholds()));

    Ok(())
}

pub fn handle_act(
    bid_id: &str,
    action: &str,
    credential: Option<String>,
    today: Option<&str>,
) -> anyhow::Result<()> {
    let now = resolve_now(today)?;
    let mut session = open_session()?;

    if !session.store().contains(bid_id) {
        return Err(CliError::UnknownBid(bid_id.to_string()).into());
    }

    let outcome = session.handle(BoardCommand::Action {
        bid_id: bid_id.to_string(),
        action: action.to_string(),
    });
    report(&outcome);

    if let CommandEffect::SignOffPending { .. } = outcome.effect {
        match credential {
            Some(credential) => {
                let confirmation = session.handle(BoardCommand::ConfirmSignOff { credential });
                report(&confirmation);
            }
            None => {
                println!(
                    "{}",
                    "Assinatura pendente: informe a senha com --credential".yellow()
                );
                session.handle(BoardCommand::CancelSignOff);
            }
        }
    }

    print_board(&session, now, false)
}

pub fn handle_drag(
    bid_id: &str,
    column: &str,
    position: Option<usize>,
    today: Option<&str>,
) -> anyhow::Result<()> {
    let now = resolve_now(today)?;
    let mut session = open_session()?;

    let to: BidStatus = column.parse()?;
    let (from, index) =
        locate(&session, bid_id).ok_or_else(|| CliError::UnknownBid(bid_id.to_string()))?;
    let destination_index = position.unwrap_or_else(|| session.view().count(to));

    let outcome = session.handle(BoardCommand::Drag(DragCommand::new(
        bid_id,
        DragLocation::new(from, index),
        Some(DragLocation::new(to, destination_index)),
    )));
    report(&outcome);

    print_board(&session, now, false)
}
