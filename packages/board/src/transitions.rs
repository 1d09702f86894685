// ABOUTME: Status transition rules for bids
// ABOUTME: Named-action table, drag-and-drop override and the commands that apply them

use cotai_core::BidStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::store::BidStore;

/// Named actions offered on a bid card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidAction {
    /// "analisar"
    #[serde(rename = "analisar")]
    Analyze,
    /// "revisado"
    #[serde(rename = "revisado")]
    MarkReviewed,
    /// "assinar", gated by the sign-off prompt
    #[serde(rename = "assinar")]
    Sign,
    /// "ganhou"
    #[serde(rename = "ganhou")]
    MarkWon,
    /// "perdeu"
    #[serde(rename = "perdeu")]
    MarkLost,
}

impl BidAction {
    pub const ALL: [BidAction; 5] = [
        BidAction::Analyze,
        BidAction::MarkReviewed,
        BidAction::Sign,
        BidAction::MarkWon,
        BidAction::MarkLost,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BidAction::Analyze => "analisar",
            BidAction::MarkReviewed => "revisado",
            BidAction::Sign => "assinar",
            BidAction::MarkWon => "ganhou",
            BidAction::MarkLost => "perdeu",
        }
    }

    /// Look up an action by its card-button name. Matching is exact.
    pub fn from_name(name: &str) -> Option<BidAction> {
        BidAction::ALL.into_iter().find(|action| action.name() == name)
    }

    /// The action a card in `status` offers, if any
    pub fn offered_for(status: BidStatus) -> Vec<BidAction> {
        BidAction::ALL
            .into_iter()
            .filter(|action| transition(status, *action) != Transition::Invalid)
            .collect()
    }
}

impl fmt::Display for BidAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of looking up (status, action) in the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Move(BidStatus),
    AwaitSignOff,
    Invalid,
}

/// Total transition table over every (status, action) pair
pub fn transition(from: BidStatus, action: BidAction) -> Transition {
    match (from, action) {
        (BidStatus::New, BidAction::Analyze) => Transition::Move(BidStatus::InReview),
        (BidStatus::InReview, BidAction::MarkReviewed) => Transition::Move(BidStatus::ReadyToSign),
        (BidStatus::ReadyToSign, BidAction::Sign) => Transition::AwaitSignOff,
        (BidStatus::Sent, BidAction::MarkWon) => Transition::Move(BidStatus::Won),
        (BidStatus::Sent, BidAction::MarkLost) => Transition::Move(BidStatus::Lost),
        _ => Transition::Invalid,
    }
}

/// Why a command left the board unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum IgnoreReason {
    UnknownBid { bid_id: String },
    UnknownAction { action: String },
    NotAllowed { action: BidAction, from: BidStatus },
    DragCancelled,
    SameColumn,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnknownBid { bid_id } => write!(f, "bid '{}' not found", bid_id),
            IgnoreReason::UnknownAction { action } => write!(f, "unknown action '{}'", action),
            IgnoreReason::NotAllowed { action, from } => {
                write!(f, "action '{}' not allowed from {}", action, from.key())
            }
            IgnoreReason::DragCancelled => write!(f, "drag cancelled"),
            IgnoreReason::SameColumn => write!(f, "dropped in the same column"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Applied {
        store: BidStore,
        from: BidStatus,
        to: BidStatus,
    },
    /// Transition to `sent` waits for the sign-off prompt
    AwaitingSignOff,
    Ignored(IgnoreReason),
}

/// Apply a named action to one bid of `store`
pub fn apply_action(store: &BidStore, bid_id: &str, action: BidAction) -> ActionResult {
    let Some(bid) = store.get(bid_id) else {
        debug!(bid_id, %action, "Ignoring action for unknown bid");
        return ActionResult::Ignored(IgnoreReason::UnknownBid {
            bid_id: bid_id.to_string(),
        });
    };

    let from = bid.status;
    match transition(from, action) {
        Transition::Move(to) => {
            info!(bid_id, %action, from = from.key(), to = to.key(), "Bid status changed");
            ActionResult::Applied {
                store: store.replace_status(bid_id, to),
                from,
                to,
            }
        }
        Transition::AwaitSignOff => {
            debug!(bid_id, "Sign-off requested");
            ActionResult::AwaitingSignOff
        }
        Transition::Invalid => {
            debug!(bid_id, %action, from = from.key(), "Action not allowed from current status");
            ActionResult::Ignored(IgnoreReason::NotAllowed { action, from })
        }
    }
}

/// A position on the board: column and index within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column: BidStatus,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: BidStatus, index: usize) -> Self {
        DragLocation { column, index }
    }
}

/// A completed drag gesture, decoupled from any pointer-event source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragCommand {
    pub bid_id: String,
    pub source: DragLocation,
    /// `None` when the drag was released outside any column
    pub destination: Option<DragLocation>,
}

impl DragCommand {
    pub fn new(
        bid_id: impl Into<String>,
        source: DragLocation,
        destination: Option<DragLocation>,
    ) -> Self {
        DragCommand {
            bid_id: bid_id.into(),
            source,
            destination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragResult {
    Moved {
        store: BidStore,
        from: BidStatus,
        to: BidStatus,
    },
    Ignored(IgnoreReason),
}

/// Apply a drag gesture.
///
/// The destination column becomes the bid's status with no pipeline-order
/// check. Drops inside the bid's current column do not reorder it. The
/// current column is the bid's stored status, not the drag's `source`.
pub fn apply_drag(store: &BidStore, command: &DragCommand) -> DragResult {
    let Some(destination) = command.destination else {
        debug!(bid_id = %command.bid_id, "Drag cancelled");
        return DragResult::Ignored(IgnoreReason::DragCancelled);
    };

    let Some(bid) = store.get(&command.bid_id) else {
        debug!(bid_id = %command.bid_id, "Ignoring drag for unknown bid");
        return DragResult::Ignored(IgnoreReason::UnknownBid {
            bid_id: command.bid_id.clone(),
        });
    };

    let from = bid.status;
    if destination.column == from {
        debug!(
            bid_id = %command.bid_id,
            column = destination.column.key(),
            from_index = command.source.index,
            to_index = destination.index,
            "Drop within the same column"
        );
        return DragResult::Ignored(IgnoreReason::SameColumn);
    }

    let to = destination.column;
    info!(bid_id = %command.bid_id, from = from.key(), to = to.key(), "Bid dragged to new column");
    DragResult::Moved {
        store: store.replace_status(&command.bid_id, to),
        from,
        to,
    }
}
