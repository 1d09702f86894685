// ABOUTME: Synchronous command handler for the tracking board
// ABOUTME: Owns the store, search query and sign-off prompt; reports outcomes as notices

use chrono::{DateTime, Utc};
use cotai_config::BoardConfig;
use cotai_core::{BidRecord, BidStatus, BOARD_COLUMNS};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deadline::{upcoming_deadlines, DeadlineThresholds};
use crate::error::SignOffError;
use crate::filter::filter_bids;
use crate::notice::Notice;
use crate::projector::{project, BoardView};
use crate::signoff::SignOffPrompt;
use crate::store::BidStore;
use crate::transitions::{
    apply_action, apply_drag, ActionResult, BidAction, DragCommand, DragResult, IgnoreReason,
};

/// Everything a UI layer can ask the board to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardCommand {
    Search { query: String },
    /// `action` is the card-button name, e.g. "analisar"
    Action { bid_id: String, action: String },
    Drag(DragCommand),
    ConfirmSignOff { credential: String },
    CancelSignOff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    Updated {
        bid_id: String,
        from: BidStatus,
        to: BidStatus,
    },
    QueryChanged,
    SignOffPending { bid_id: String },
    SignOffRejected(SignOffError),
    SignOffCancelled,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub effect: CommandEffect,
    pub notice: Option<Notice>,
}

impl CommandOutcome {
    fn silent(effect: CommandEffect) -> Self {
        CommandOutcome {
            effect,
            notice: None,
        }
    }

    fn with_notice(effect: CommandEffect, notice: Notice) -> Self {
        CommandOutcome {
            effect,
            notice: Some(notice),
        }
    }

    pub fn changed_state(&self) -> bool {
        matches!(self.effect, CommandEffect::Updated { .. })
    }
}

/// Board state for one user. Commands are applied in arrival order to the
/// current snapshot; a later command simply overwrites an earlier one.
#[derive(Debug, Clone)]
pub struct BoardSession {
    store: BidStore,
    query: String,
    signoff: Option<SignOffPrompt>,
    config: BoardConfig,
}

impl BoardSession {
    pub fn new(store: BidStore, config: BoardConfig) -> Self {
        BoardSession {
            store,
            query: String::new(),
            signoff: None,
            config,
        }
    }

    pub fn store(&self) -> &BidStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn pending_signoff(&self) -> Option<&SignOffPrompt> {
        self.signoff.as_ref()
    }

    /// Bids matching the current query
    pub fn visible_bids(&self) -> Vec<&BidRecord> {
        filter_bids(&self.query, self.store.all())
    }

    /// Filtered board, one bucket per column
    pub fn view(&self) -> BoardView<'_> {
        project(self.visible_bids(), &BOARD_COLUMNS)
    }

    pub fn thresholds(&self) -> DeadlineThresholds {
        DeadlineThresholds::from(&self.config)
    }

    /// Bids due within the configured window, soonest first
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<&BidRecord> {
        upcoming_deadlines(self.store.all(), now, self.config.upcoming_window_days)
    }

    pub fn handle(&mut self, command: BoardCommand) -> CommandOutcome {
        match command {
            BoardCommand::Search { query } => {
                debug!(query = %query, "Search query changed");
                self.query = query;
                CommandOutcome::silent(CommandEffect::QueryChanged)
            }
            BoardCommand::Action { bid_id, action } => self.handle_action(bid_id, &action),
            BoardCommand::Drag(drag) => self.handle_drag(&drag),
            BoardCommand::ConfirmSignOff { credential } => self.handle_confirm(&credential),
            BoardCommand::CancelSignOff => {
                if let Some(prompt) = self.signoff.take() {
                    debug!(bid_id = prompt.bid_id(), "Sign-off cancelled");
                }
                CommandOutcome::silent(CommandEffect::SignOffCancelled)
            }
        }
    }

    fn handle_action(&mut self, bid_id: String, action_name: &str) -> CommandOutcome {
        let Some(action) = BidAction::from_name(action_name) else {
            debug!(bid_id = %bid_id, action = action_name, "Ignoring unknown action");
            return CommandOutcome::silent(CommandEffect::Ignored(IgnoreReason::UnknownAction {
                action: action_name.to_string(),
            }));
        };

        match apply_action(&self.store, &bid_id, action) {
            ActionResult::Applied { store, from, to } => {
                self.store = store;
                CommandOutcome::with_notice(
                    CommandEffect::Updated { bid_id, from, to },
                    Notice::action_applied(action),
                )
            }
            ActionResult::AwaitingSignOff => {
                self.signoff = Some(SignOffPrompt::open(
                    bid_id.clone(),
                    self.config.signoff_min_length,
                ));
                CommandOutcome::silent(CommandEffect::SignOffPending { bid_id })
            }
            ActionResult::Ignored(reason) => CommandOutcome::silent(CommandEffect::Ignored(reason)),
        }
    }

    fn handle_drag(&mut self, drag: &DragCommand) -> CommandOutcome {
        match apply_drag(&self.store, drag) {
            DragResult::Moved { store, from, to } => {
                self.store = store;
                CommandOutcome::with_notice(
                    CommandEffect::Updated {
                        bid_id: drag.bid_id.clone(),
                        from,
                        to,
                    },
                    Notice::moved(to),
                )
            }
            DragResult::Ignored(reason) => CommandOutcome::silent(CommandEffect::Ignored(reason)),
        }
    }

    fn handle_confirm(&mut self, credential: &str) -> CommandOutcome {
        let Some(prompt) = self.signoff.as_ref() else {
            debug!("Sign-off confirmation without an open prompt");
            return CommandOutcome::silent(CommandEffect::SignOffRejected(SignOffError::NotPending));
        };

        match prompt.confirm(&self.store, credential) {
            Ok(store) => {
                let bid_id = prompt.bid_id().to_string();
                self.store = store;
                self.signoff = None;
                CommandOutcome::with_notice(
                    CommandEffect::Updated {
                        bid_id,
                        from: BidStatus::ReadyToSign,
                        to: BidStatus::Sent,
                    },
                    Notice::signed(),
                )
            }
            // Prompt stays open so the user can retry
            Err(err @ SignOffError::CredentialTooShort { .. }) => CommandOutcome::with_notice(
                CommandEffect::SignOffRejected(err),
                Notice::invalid_credential(),
            ),
            Err(err) => {
                self.signoff = None;
                CommandOutcome::with_notice(
                    CommandEffect::SignOffRejected(err),
                    Notice::error("A licitação não está mais pronta para assinatura."),
                )
            }
        }
    }
}
