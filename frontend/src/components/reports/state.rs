use common::model::report::ReportSummary;
use yew::NodeRef;

use crate::api::reports::ReportsApi;
use crate::components::confirm_dialog::ConfirmationRequest;
use crate::config::client_config;

/// Shown when an upload or delete is requested while another one is still running.
pub const BUSY_NOTICE: &str = "Please wait for the current action to finish";

pub enum LoadState {
    Loading,
    Loaded(Vec<ReportSummary>),
    Failed,
}

pub struct ReportsComponent {
    pub api: ReportsApi,

    pub reports: LoadState,

    /// Open confirmation dialog, if any.
    pub confirmation: Option<ConfirmationRequest>,

    /// An upload or delete is in flight; further ones are ignored until it resolves.
    pub busy: bool,

    /// Serial the file picker was opened for.
    pub upload_serial: Option<String>,

    /// Hidden `<input type="file">` reused for every upload.
    pub file_input_ref: NodeRef,
}

impl ReportsComponent {
    pub fn new() -> Self {
        Self {
            api: ReportsApi::from_config(client_config()),
            reports: LoadState::Loading,
            confirmation: None,
            busy: false,
            upload_serial: None,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Takes the action slot. Returns `false` if an upload or delete already holds it.
    pub fn begin_action(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish_action(&mut self) {
        self.busy = false;
    }
}
