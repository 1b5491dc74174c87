//! Update function for the report form.
//!
//! Every DOM event arrives here as a `Msg` and is applied to the controller in one step;
//! async work (the request, display timers, navigation) is spawned and reports back
//! through the component link.

use common::banner::{BannerKind, BANNER_TIMEOUT};
use common::submission::{Attempt, DisplayToken};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ReportFormComponent;
use crate::browser::{after, follow};

const LOAD_FAILURE: &str = "Error loading report for editing";

pub fn update(
    component: &mut ReportFormComponent,
    ctx: &Context<ReportFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(name, value) => {
            component.values.insert(name, value);
            true
        }
        Msg::Submit => match component.controller.submit(&component.fields()) {
            Attempt::Send { ticket, request } => {
                let api = component.api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = api.save(&request).await;
                    link.send_message(Msg::Completed(ticket, outcome));
                });
                true
            }
            Attempt::Blocked { token, .. } => {
                schedule_expiry(ctx, token);
                true
            }
            Attempt::Ignored => false,
        },
        Msg::Completed(ticket, outcome) => {
            let Some(completion) = component.controller.complete(ticket, outcome) else {
                return false;
            };
            if let Some(err) = &completion.error {
                log::error!("saving report failed: {err}");
            }
            schedule_expiry(ctx, completion.token);
            if let Some(follow_up) = completion.follow_up {
                follow(follow_up);
            }
            true
        }
        Msg::Expire(token) => component.controller.expire(token),
        Msg::ReportLoaded(Ok(report)) => {
            component.fill(&report);
            true
        }
        Msg::ReportLoaded(Err(err)) => {
            log::error!("loading report for editing failed: {err}");
            let token = component.controller.notify(BannerKind::Error, LOAD_FAILURE);
            schedule_expiry(ctx, token);
            true
        }
        Msg::Reset => {
            component.values.clear();
            component.controller.dismiss();
            true
        }
    }
}

fn schedule_expiry(ctx: &Context<ReportFormComponent>, token: DisplayToken) {
    let link = ctx.link().clone();
    after(BANNER_TIMEOUT, move || link.send_message(Msg::Expire(token)));
}
