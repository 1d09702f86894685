// ABOUTME: Demo bids for the tracking board
// ABOUTME: Mirrors the sample data shown on the tracking screen

use chrono::NaiveDate;
use cotai_core::{BidRecord, BidStatus};

use crate::error::BoardError;
use crate::store::BidStore;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, BoardError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(BoardError::InvalidDate { year, month, day })
}

/// The seven sample bids. Two of them share edital number 2025/078.
pub fn seed_bids() -> Result<Vec<BidRecord>, BoardError> {
    Ok(vec![
        BidRecord::new(
            "bid-1",
            "Aquisição de Equipamentos de TI",
            "Prefeitura de São Paulo",
            "2025/001",
            date(2025, 6, 15)?,
        ),
        BidRecord::new(
            "bid-2",
            "Serviços de Limpeza e Conservação",
            "Governo do Estado de Minas Gerais",
            "2025/045",
            date(2025, 5, 20)?,
        ),
        BidRecord::new(
            "bid-3",
            "Fornecimento de Material de Escritório",
            "Tribunal Regional do Trabalho",
            "2025/078",
            date(2025, 5, 10)?,
        )
        .with_status(BidStatus::InReview),
        BidRecord::new(
            "bid-4",
            "Serviços de Consultoria em TI",
            "Ministério da Educação",
            "2025/023",
            date(2025, 6, 5)?,
        )
        .with_status(BidStatus::InReview),
        BidRecord::new(
            "bid-5",
            "Construção de Escola Municipal",
            "Prefeitura de Curitiba",
            "2025/102",
            date(2025, 7, 25)?,
        )
        .with_status(BidStatus::ReadyToSign),
        BidRecord::new(
            "bid-6",
            "Fornecimento de Medicamentos",
            "Secretaria de Saúde de SP",
            "2025/125",
            date(2025, 5, 18)?,
        )
        .with_status(BidStatus::Sent),
        BidRecord::new(
            "bid-7",
            "Implementação de Sistema ERP",
            "Empresa de Transportes Públicos",
            "2025/078",
            date(2025, 6, 30)?,
        )
        .with_status(BidStatus::Won),
    ])
}

/// A store loaded with [`seed_bids`]
pub fn seed_store() -> Result<BidStore, BoardError> {
    BidStore::new(seed_bids()?)
}
