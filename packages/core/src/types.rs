// ABOUTME: Bid type definitions
// ABOUTME: Bid records, pipeline statuses and the board column layout

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Pipeline stage of a bid. Doubles as the board column key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    #[serde(alias = "novos")]
    New,
    #[serde(alias = "em_analise")]
    InReview,
    #[serde(alias = "pronto_para_assinar")]
    ReadyToSign,
    #[serde(alias = "enviado")]
    Sent,
    Won,
    Lost,
}

impl BidStatus {
    /// All statuses in pipeline order
    pub const ALL: [BidStatus; 6] = [
        BidStatus::New,
        BidStatus::InReview,
        BidStatus::ReadyToSign,
        BidStatus::Sent,
        BidStatus::Won,
        BidStatus::Lost,
    ];

    /// Serialized key, e.g. `ready_to_sign`
    pub const fn key(&self) -> &'static str {
        match self {
            BidStatus::New => "new",
            BidStatus::InReview => "in_review",
            BidStatus::ReadyToSign => "ready_to_sign",
            BidStatus::Sent => "sent",
            BidStatus::Won => "won",
            BidStatus::Lost => "lost",
        }
    }

    /// Column title shown on the board
    pub const fn title(&self) -> &'static str {
        match self {
            BidStatus::New => "Novos",
            BidStatus::InReview => "Em análise",
            BidStatus::ReadyToSign => "Pronto para assinar",
            BidStatus::Sent => "Enviado",
            BidStatus::Won => "Ganhas",
            BidStatus::Lost => "Perdidas",
        }
    }

    /// Won and lost bids leave the pipeline
    pub fn is_terminal(&self) -> bool {
        matches!(self, BidStatus::Won | BidStatus::Lost)
    }
}

impl Default for BidStatus {
    fn default() -> Self {
        BidStatus::New
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for BidStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" | "novos" => Ok(BidStatus::New),
            "in_review" | "em_analise" => Ok(BidStatus::InReview),
            "ready_to_sign" | "pronto_para_assinar" => Ok(BidStatus::ReadyToSign),
            "sent" | "enviado" => Ok(BidStatus::Sent),
            "won" => Ok(BidStatus::Won),
            "lost" => Ok(BidStatus::Lost),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

/// A board column: a status key and its display title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub status: BidStatus,
    pub title: &'static str,
}

impl BoardColumn {
    /// Column for `status`, titled with [`BidStatus::title`]
    pub const fn new(status: BidStatus) -> Self {
        BoardColumn {
            status,
            title: status.title(),
        }
    }
}

/// Default column layout, one column per status in pipeline order
pub const BOARD_COLUMNS: [BoardColumn; 6] = [
    BoardColumn::new(BidStatus::New),
    BoardColumn::new(BidStatus::InReview),
    BoardColumn::new(BidStatus::ReadyToSign),
    BoardColumn::new(BidStatus::Sent),
    BoardColumn::new(BidStatus::Won),
    BoardColumn::new(BidStatus::Lost),
];

/// A tracked public-procurement bid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRecord {
    pub id: String,
    pub title: String,
    pub organization: String,
    /// Edital number; several bids may share one
    pub number: String,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub status: BidStatus,
}

impl BidRecord {
    /// Create a record in the `new` stage
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        organization: impl Into<String>,
        number: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        BidRecord {
            id: id.into(),
            title: title.into(),
            organization: organization.into(),
            number: number.into(),
            deadline,
            status: BidStatus::New,
        }
    }

    pub fn with_status(mut self, status: BidStatus) -> Self {
        self.status = status;
        self
    }
}
