use super::code_enum::CodeEnum;
use super::presentation::{Presentable, Presentation, Tone};
use serde::{Deserialize, Serialize};

/// Action buttons offered on records and page headers.
///
/// No command contract exists for any of them; the UI reports the request
/// and leaves the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordAction {
    View,
    Edit,
    Delete,
    Archive,
    Export,
    Schedule,
    Create,
}

impl RecordAction {
    /// Actions shown on every card and table row
    pub const ROW: &'static [RecordAction] =
        &[RecordAction::View, RecordAction::Edit, RecordAction::Delete];
}

impl CodeEnum for RecordAction {
    fn all() -> &'static [Self] {
        &[
            RecordAction::View,
            RecordAction::Edit,
            RecordAction::Delete,
            RecordAction::Archive,
            RecordAction::Export,
            RecordAction::Schedule,
            RecordAction::Create,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            RecordAction::View => "view",
            RecordAction::Edit => "edit",
            RecordAction::Delete => "delete",
            RecordAction::Archive => "archive",
            RecordAction::Export => "export",
            RecordAction::Schedule => "schedule",
            RecordAction::Create => "create",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RecordAction::View => "View",
            RecordAction::Edit => "Edit",
            RecordAction::Delete => "Delete",
            RecordAction::Archive => "Archive",
            RecordAction::Export => "Export",
            RecordAction::Schedule => "Schedule",
            RecordAction::Create => "New",
        }
    }
}

impl Presentable for RecordAction {
    fn presentation(&self) -> Presentation {
        match self {
            RecordAction::View => Presentation::new(Tone::Brand, "eye"),
            RecordAction::Edit => Presentation::new(Tone::Informative, "edit"),
            RecordAction::Delete => Presentation::new(Tone::Danger, "trash"),
            RecordAction::Archive => Presentation::new(Tone::Warning, "archive"),
            RecordAction::Export => Presentation::new(Tone::Informative, "download"),
            RecordAction::Schedule => Presentation::new(Tone::Brand, "calendar"),
            RecordAction::Create => Presentation::new(Tone::Brand, "plus"),
        }
    }
}
