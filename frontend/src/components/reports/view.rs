use common::model::report::ReportSummary;
use common::navigation::REPORT_FORM_PAGE;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{LoadState, ReportsComponent};
use crate::components::confirm_dialog::ConfirmDialog;

pub fn view(component: &ReportsComponent, ctx: &Context<ReportsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container">
            <div class="header-row">
                <h2>{"Radiology Reports"}</h2>
                <a class="btn-link" href={REPORT_FORM_PAGE}>{"New Report"}</a>
            </div>

            { body(component, link) }

            <input
                type="file"
                accept=".docx"
                style="display:none;"
                ref={component.file_input_ref.clone()}
                onchange={link.callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                })}
            />

            <ConfirmDialog
                request={component.confirmation.clone()}
                on_close={link.callback(|_| Msg::CloseConfirmation)}
            />
        </div>
    }
}

fn body(component: &ReportsComponent, link: &Scope<ReportsComponent>) -> Html {
    match &component.reports {
        LoadState::Loading => html! { <div id="loading">{"Loading reports..."}</div> },
        LoadState::Failed => html! {
            <div id="loading">{"Error loading reports. Make sure backend is running."}</div>
        },
        LoadState::Loaded(reports) if reports.is_empty() => html! {
            <div id="noReports">{"No reports yet."}</div>
        },
        LoadState::Loaded(reports) => html! {
            <div id="reportsContainer">
                <table>
                    <thead>
                        <tr>
                            <th>{"Serial"}</th>
                            <th>{"Patient"}</th>
                            <th>{"Age / Sex"}</th>
                            <th>{"Scan Type"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody id="reportsTable">
                        { for reports.iter().map(|report| row(report, link)) }
                    </tbody>
                </table>
            </div>
        },
    }
}

fn row(report: &ReportSummary, link: &Scope<ReportsComponent>) -> Html {
    let serial = report.serial_number.clone();
    let id = report.id;
    let action = |label: &'static str, make: fn(String) -> Msg| {
        let serial = serial.clone();
        html! {
            <button class="btn-export" onclick={link.callback(move |_| make(serial.clone()))}>
                { label }
            </button>
        }
    };

    html! {
        <tr key={report.serial_number.clone()}>
            <td>{ report.serial_number.clone() }</td>
            <td>{ report.patient_name.clone() }</td>
            <td>{ report.age_sex.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ report.scan_type.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td>
                { action("QR Code", Msg::ViewQr) }
                { action("Upload", Msg::PickFile) }
                { action("Update", Msg::Edit) }
                { action("Delete", Msg::Delete) }
                <button class="btn-export" onclick={link.callback(move |_| Msg::Export(id))}>
                    {"Export"}
                </button>
            </td>
        </tr>
    }
}
