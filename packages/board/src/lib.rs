// ABOUTME: Bid tracking board for CotAi Licitação Hub
// ABOUTME: Store, status transitions, board projection, search, deadlines and sign-off

pub mod deadline;
pub mod error;
pub mod filter;
pub mod notice;
pub mod projector;
pub mod seed;
pub mod session;
pub mod signoff;
pub mod store;
pub mod transitions;

pub use deadline::{
    classify_bid, classify_deadline, classify_deadline_with, days_remaining, deadline_instant,
    upcoming_deadlines, DeadlineStatus, DeadlineThresholds, Severity,
};
pub use error::{BoardError, SignOffError};
pub use filter::filter_bids;
pub use notice::{Notice, NoticeVariant};
pub use projector::{project, BoardView, ColumnBucket, EMPTY_COLUMN_PLACEHOLDER};
pub use seed::{seed_bids, seed_store};
pub use session::{BoardCommand, BoardSession, CommandEffect, CommandOutcome};
pub use signoff::SignOffPrompt;
pub use store::BidStore;
pub use transitions::{
    apply_action, apply_drag, transition, ActionResult, BidAction, DragCommand, DragLocation,
    DragResult, IgnoreReason, Transition,
};

// Re-export the core model so callers need a single import
pub use cotai_core::{BidRecord, BidStatus, BoardColumn, BOARD_COLUMNS};
