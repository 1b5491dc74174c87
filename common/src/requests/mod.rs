use crate::model::fields::FormFields;
use crate::model::report::ReportDraft;

/// Validated output of the report form: which call to make and with what body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCommand {
    /// `POST /api/reports`
    Create(ReportDraft),
    /// `PUT /api/reports/serial/{serial}`
    Update { serial: String, draft: ReportDraft },
}

impl ReportCommand {
    pub fn draft(&self) -> &ReportDraft {
        match self {
            ReportCommand::Create(draft) | ReportCommand::Update { draft, .. } => draft,
        }
    }
}

/// Validated output of an account form: a same-origin, form-encoded `POST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRequest {
    pub action: &'static str,
    pub fields: FormFields,
}
