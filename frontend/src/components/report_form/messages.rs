use common::error::NetworkError;
use common::model::report::Report;
use common::model::response::ServerResponse;
use common::submission::{DisplayToken, Ticket};

pub enum Msg {
    SetField(&'static str, String),
    Submit,
    Completed(Ticket, Result<ServerResponse, NetworkError>),
    Expire(DisplayToken),
    ReportLoaded(Result<Report, NetworkError>),
    Reset,
}
