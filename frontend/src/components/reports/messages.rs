use common::error::NetworkError;
use common::model::report::ReportSummary;
use common::model::response::ServerResponse;

pub enum Msg {
    Load,
    Loaded(Result<Vec<ReportSummary>, NetworkError>),
    ViewQr(String),
    PickFile(String),
    FileChosen(Option<web_sys::File>),
    UploadFinished(Result<ServerResponse, NetworkError>),
    Edit(String),
    Delete(String),
    ConfirmDelete(String),
    CloseConfirmation,
    DeleteFinished(Result<ServerResponse, NetworkError>),
    Export(i64),
}
