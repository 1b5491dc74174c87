use std::collections::HashMap;

use common::forms::report::{ReportMode, ReportSchema};
use common::model::fields::FormFields;
use common::model::report::{Report, REPORT_FIELDS};
use common::submission::FormController;

use crate::api::reports::ReportsApi;
use crate::config::client_config;

pub struct ReportFormComponent {
    pub controller: FormController<ReportSchema>,

    /// Current input values keyed by field name.
    pub values: HashMap<&'static str, String>,

    pub api: ReportsApi,

    /// First-render initialization already ran.
    pub loaded: bool,
}

impl ReportFormComponent {
    pub fn new(serial: Option<&str>) -> Self {
        Self {
            controller: FormController::new(ReportSchema::new(ReportMode::from_serial(serial))),
            values: HashMap::new(),
            api: ReportsApi::from_config(client_config()),
            loaded: false,
        }
    }

    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    pub fn fields(&self) -> FormFields {
        REPORT_FIELDS
            .iter()
            .map(|&name| (name, self.value(name)))
            .collect()
    }

    pub fn fill(&mut self, report: &Report) {
        for name in REPORT_FIELDS {
            self.values.insert(name, report.field_value(name));
        }
    }
}
