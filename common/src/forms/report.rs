//! The radiology report form, in create or edit mode.

use crate::error::ValidationError;
use crate::model::fields::FormFields;
use crate::model::report::ReportDraft;
use crate::model::response::ServerResponse;
use crate::navigation::{FollowUp, REPORT_REDIRECT_DELAY, REPORTS_PAGE};
use crate::requests::ReportCommand;
use crate::submission::{FormSchema, SubmitLabels};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportMode {
    Create,
    Edit { serial: String },
}

impl ReportMode {
    /// Edit mode when the page was opened with a non-blank `serial`.
    pub fn from_serial(serial: Option<&str>) -> Self {
        match serial.map(str::trim) {
            Some(serial) if !serial.is_empty() => ReportMode::Edit {
                serial: serial.to_string(),
            },
            _ => ReportMode::Create,
        }
    }

    pub fn serial(&self) -> Option<&str> {
        match self {
            ReportMode::Create => None,
            ReportMode::Edit { serial } => Some(serial),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ReportMode::Create => "Create Report",
            ReportMode::Edit { .. } => "Update Report",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSchema {
    pub mode: ReportMode,
}

impl ReportSchema {
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }
}

impl FormSchema for ReportSchema {
    type Request = ReportCommand;

    fn validate(&self, fields: &FormFields) -> Result<ReportCommand, ValidationError> {
        let patient_name = fields.required("patient_name", "Patient name is required!")?;
        let draft = ReportDraft::from_fields(patient_name, fields);
        Ok(match &self.mode {
            ReportMode::Create => ReportCommand::Create(draft),
            ReportMode::Edit { serial } => ReportCommand::Update {
                serial: serial.clone(),
                draft,
            },
        })
    }

    fn labels(&self) -> SubmitLabels {
        match self.mode {
            ReportMode::Create => SubmitLabels {
                idle: "Create Report",
                pending: "Saving...",
            },
            ReportMode::Edit { .. } => SubmitLabels {
                idle: "Update Report",
                pending: "Updating...",
            },
        }
    }

    fn success_message(&self, response: &ServerResponse) -> String {
        match (&self.mode, response.serial_number.as_deref()) {
            (ReportMode::Edit { .. }, _) => "Report updated successfully!".to_string(),
            (ReportMode::Create, Some(serial)) => {
                format!("Report created! Serial Number: {serial}")
            }
            (ReportMode::Create, None) => response
                .message
                .clone()
                .unwrap_or_else(|| "Report saved successfully!".to_string()),
        }
    }

    fn failure_message(&self, _response: &ServerResponse) -> String {
        "Error saving report".to_string()
    }

    fn follow_up(&self, _response: &ServerResponse) -> Option<FollowUp> {
        Some(FollowUp::after(REPORTS_PAGE, REPORT_REDIRECT_DELAY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::NETWORK_FAILURE;
    use crate::error::NetworkError;
    use crate::submission::{Attempt, FormController, SubmissionState};
    use serde_json::json;

    fn report_fields(patient_name: &str) -> FormFields {
        [
            ("patient_name", patient_name),
            ("uhid", "U-17"),
            ("scan_type", "MRI"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn blank_patient_name_blocks_before_any_request() {
        for name in ["", "   ", "\t"] {
            let mut controller = FormController::new(ReportSchema::new(ReportMode::Create));
            match controller.submit(&report_fields(name)) {
                Attempt::Blocked { error, .. } => {
                    assert_eq!(error.field, "patient_name");
                    assert_eq!(error.reason, "Patient name is required!");
                }
                other => panic!("expected Blocked, got {other:?}"),
            }
            assert_eq!(
                controller.banner().map(|b| b.text.as_str()),
                Some("Patient name is required!")
            );
        }
    }

    #[test]
    fn created_report_message_carries_the_serial_and_redirects() {
        let mut controller = FormController::new(ReportSchema::new(ReportMode::Create));
        let Attempt::Send { ticket, request } = controller.submit(&report_fields("Ana Ruiz"))
        else {
            panic!("expected Send");
        };
        assert!(matches!(request, ReportCommand::Create(ref d) if d.patient_name == "Ana Ruiz"));

        let response = serde_json::from_value(json!({
            "success": true,
            "serial_number": "R1001"
        }))
        .unwrap();
        let completion = controller.complete(ticket, Ok(response)).unwrap();

        assert_eq!(
            controller.banner().unwrap().text,
            "Report created! Serial Number: R1001"
        );
        let follow_up = completion.follow_up.unwrap();
        assert_eq!(follow_up.target, "reports.html");
        assert_eq!(follow_up.delay, REPORT_REDIRECT_DELAY);
    }

    #[test]
    fn edit_mode_updates_by_serial() {
        let schema = ReportSchema::new(ReportMode::from_serial(Some("R1001")));
        assert_eq!(schema.labels().idle, "Update Report");
        let mut controller = FormController::new(schema);

        let Attempt::Send { ticket, request } = controller.submit(&report_fields("Ana"))
        else {
            panic!("expected Send");
        };
        assert!(matches!(request, ReportCommand::Update { ref serial, .. } if serial == "R1001"));
        assert_eq!(controller.button_label(), "Updating...");

        controller.complete(ticket, Ok(ServerResponse::ok()));
        assert_eq!(
            controller.banner().unwrap().text,
            "Report updated successfully!"
        );
    }

    #[test]
    fn backend_error_body_is_a_server_failure() {
        let mut controller = FormController::new(ReportSchema::new(ReportMode::Create));
        let Attempt::Send { ticket, .. } = controller.submit(&report_fields("Ana")) else {
            panic!("expected Send");
        };
        let response = serde_json::from_value(json!({ "detail": "database locked" })).unwrap();
        let completion = controller.complete(ticket, Ok(response)).unwrap();

        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(controller.banner().unwrap().text, "Error saving report");
        assert!(completion.follow_up.is_none());
    }

    #[test]
    fn unreachable_backend_shows_network_message() {
        let mut controller = FormController::new(ReportSchema::new(ReportMode::Create));
        let Attempt::Send { ticket, .. } = controller.submit(&report_fields("Ana")) else {
            panic!("expected Send");
        };
        controller.complete(ticket, Err(NetworkError::Unreachable("failed to fetch".into())));
        assert_eq!(controller.banner().unwrap().text, NETWORK_FAILURE);
    }

    #[test]
    fn blank_serial_means_create_mode() {
        assert_eq!(ReportMode::from_serial(Some("  ")), ReportMode::Create);
        assert_eq!(ReportMode::from_serial(None).heading(), "Create Report");
    }
}
