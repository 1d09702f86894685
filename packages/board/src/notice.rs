// ABOUTME: Transient user notices produced by board commands
// ABOUTME: Presentation-agnostic equivalent of a toast: title, description, variant

use cotai_core::BidStatus;
use serde::Serialize;

use crate::transitions::BidAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Notice {
            title: "Erro".to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }

    pub(crate) fn action_applied(action: BidAction) -> Self {
        Notice::info(
            "Ação executada",
            format!("A ação \"{}\" foi executada com sucesso.", action.name()),
        )
    }

    pub(crate) fn moved(to: BidStatus) -> Self {
        Notice::info(
            "Status atualizado",
            format!("Licitação movida para \"{}\".", to.title()),
        )
    }

    pub(crate) fn signed() -> Self {
        Notice::info("Documento assinado", "O documento foi assinado com sucesso.")
    }

    pub(crate) fn invalid_credential() -> Self {
        Notice::error("Senha inválida. Tente novamente.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_is_destructive() {
        let notice = Notice::invalid_credential();
        assert!(notice.is_error());
        assert_eq!(notice.title, "Erro");
    }

    #[test]
    fn test_action_notice_names_the_action() {
        let notice = Notice::action_applied(BidAction::MarkReviewed);
        assert!(!notice.is_error());
        assert!(notice.description.contains("\"revisado\""));
    }

    #[test]
    fn test_moved_notice_uses_column_title() {
        let notice = Notice::moved(BidStatus::ReadyToSign);
        assert_eq!(notice.description, "Licitação movida para \"Pronto para assinar\".");
    }
}
