use common::config::ClientConfig;
use common::endpoints::ReportEndpoints;
use common::error::NetworkError;
use common::model::report::{Report, ReportSummary};
use common::model::response::ServerResponse;
use common::requests::ReportCommand;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::{into_network_error, read_json, read_ok_json, send};

/// Client of the radiology reports backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportsApi {
    endpoints: ReportEndpoints,
    timeout_ms: u32,
}

impl ReportsApi {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            endpoints: config.endpoints(),
            timeout_ms: config.timeout_ms(),
        }
    }

    pub fn endpoints(&self) -> &ReportEndpoints {
        &self.endpoints
    }

    /// `GET /api/reports`
    pub async fn list(&self) -> Result<Vec<ReportSummary>, NetworkError> {
        let request = Request::get(&self.endpoints.reports())
            .build()
            .map_err(into_network_error)?;
        read_ok_json(send(request, self.timeout_ms).await?).await
    }

    /// `GET /api/reports/serial/{serial}`
    pub async fn get(&self, serial: &str) -> Result<Report, NetworkError> {
        let request = Request::get(&self.endpoints.by_serial(serial))
            .build()
            .map_err(into_network_error)?;
        read_ok_json(send(request, self.timeout_ms).await?).await
    }

    /// `POST /api/reports` or `PUT /api/reports/serial/{serial}`, depending on the command.
    pub async fn save(&self, command: &ReportCommand) -> Result<ServerResponse, NetworkError> {
        let builder = match command {
            ReportCommand::Create(_) => Request::post(&self.endpoints.reports()),
            ReportCommand::Update { serial, .. } => Request::put(&self.endpoints.by_serial(serial)),
        };
        let request = builder
            .json(command.draft())
            .map_err(into_network_error)?;
        read_json(send(request, self.timeout_ms).await?).await
    }

    /// `DELETE /api/reports/serial/{serial}`
    pub async fn delete(&self, serial: &str) -> Result<ServerResponse, NetworkError> {
        let request = Request::delete(&self.endpoints.by_serial(serial))
            .build()
            .map_err(into_network_error)?;
        read_json(send(request, self.timeout_ms).await?).await
    }

    /// `POST /api/reports/serial/{serial}/upload` with the file in the `file` field.
    pub async fn upload(&self, serial: &str, file: &File) -> Result<ServerResponse, NetworkError> {
        let form = FormData::new()
            .map_err(|err| NetworkError::Unreachable(format!("{err:?}")))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|err| NetworkError::Unreachable(format!("{err:?}")))?;

        let request = Request::post(&self.endpoints.upload(serial))
            .body(form)
            .map_err(into_network_error)?;
        read_json(send(request, self.timeout_ms).await?).await
    }
}
