//! View rendering for the report form.
//!
//! Inputs are controlled: each keeps its value in the component and reports edits as
//! `Msg::SetField`. The submit button mirrors the controller (disabled while guarded,
//! in-progress label while pending).

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ReportFormComponent;
use crate::components::banner::banner_view;
use common::navigation::REPORTS_PAGE;

#[derive(Clone, Copy)]
enum Input {
    Text,
    Date,
    Area,
}

const LAYOUT: [(&str, &str, Input); 16] = [
    ("uhid", "UHID", Input::Text),
    ("sl_no", "SL No", Input::Text),
    ("reg_no", "Reg No", Input::Text),
    ("patient_no", "Patient No", Input::Text),
    ("patient_name", "Patient Name *", Input::Text),
    ("report_date", "Report Date", Input::Date),
    ("age_sex", "Age / Sex", Input::Text),
    ("origin_ethe", "Origin / Ethnicity", Input::Text),
    ("ref_by", "Referred By", Input::Text),
    ("film_no", "Film No", Input::Text),
    ("scan_time", "Scan Time", Input::Text),
    ("report_time", "Report Time", Input::Text),
    ("tat", "TAT", Input::Text),
    ("scan_type", "Scan Type", Input::Text),
    ("doctor_description", "Doctor Description", Input::Area),
    ("impression", "Impression", Input::Area),
];

pub fn view(component: &ReportFormComponent, ctx: &Context<ReportFormComponent>) -> Html {
    let link = ctx.link();
    let controller = &component.controller;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="container">
            <h2>{ controller.schema().mode.heading() }</h2>
            { banner_view(controller.banner()) }
            <form id="reportForm" {onsubmit} novalidate={true}>
                <div class="form-grid">
                    { for LAYOUT.iter().map(|&(name, label, input)| field(component, link, name, label, input)) }
                </div>
                <div class="form-actions">
                    <button type="submit" disabled={controller.button_disabled()}>
                        { controller.button_label() }
                    </button>
                    <button type="button" class="btn-secondary" onclick={link.callback(|_| Msg::Reset)}>
                        {"Reset"}
                    </button>
                    <a class="btn-link" href={REPORTS_PAGE}>{"View Reports"}</a>
                </div>
            </form>
        </div>
    }
}

fn field(
    component: &ReportFormComponent,
    link: &Scope<ReportFormComponent>,
    name: &'static str,
    label: &'static str,
    input: Input,
) -> Html {
    let value = component.value(name);
    let body = match input {
        Input::Area => html! {
            <textarea
                {name}
                rows="4"
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(name, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        },
        Input::Text | Input::Date => html! {
            <input
                type={if matches!(input, Input::Date) { "date" } else { "text" }}
                {name}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(name, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        },
    };

    html! {
        <div class={classes!("form-group", matches!(input, Input::Area).then_some("full-width"))}>
            <label>{ label }</label>
            { body }
        </div>
    }
}
