use common::banner::BannerKind;
use common::model::response::ServerResponse;
use common::navigation::{edit_report_path, qr_popup_url, RELOAD_DELAY};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{LoadState, ReportsComponent, BUSY_NOTICE};
use crate::browser::{after, current_href, navigate, open_window};
use crate::components::confirm_dialog::ConfirmationRequest;
use crate::components::notification::show_notification;

const QR_POPUP_FEATURES: &str = "width=550,height=700,scrollbars=no,resizable=yes";

pub fn update(component: &mut ReportsComponent, ctx: &Context<ReportsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api.list().await));
            });
            false
        }
        Msg::Loaded(Ok(reports)) => {
            component.reports = LoadState::Loaded(reports);
            true
        }
        Msg::Loaded(Err(err)) => {
            log::error!("loading reports failed: {err}");
            component.reports = LoadState::Failed;
            true
        }
        Msg::ViewQr(serial) => {
            let endpoints = component.api.endpoints();
            let popup = qr_popup_url(
                &current_href(),
                &serial,
                &endpoints.qr(&serial),
                &endpoints.public_view(&serial),
            );
            if !open_window(&popup, "QR Code", QR_POPUP_FEATURES) {
                show_notification(
                    "Please allow popups for this site to view QR code",
                    BannerKind::Error,
                );
            }
            false
        }
        Msg::PickFile(serial) => {
            if component.busy {
                log::debug!("upload for {serial} ignored, another action is in flight");
                show_notification(BUSY_NOTICE, BannerKind::Info);
                return false;
            }
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                component.upload_serial = Some(serial);
                input.set_value("");
                input.click();
            }
            false
        }
        Msg::FileChosen(file) => {
            let (Some(serial), Some(file)) = (component.upload_serial.take(), file) else {
                return false;
            };
            if !component.begin_action() {
                show_notification(BUSY_NOTICE, BannerKind::Info);
                return false;
            }
            show_notification("Uploading file...", BannerKind::Info);

            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api.upload(&serial, &file).await;
                link.send_message(Msg::UploadFinished(outcome));
            });
            false
        }
        Msg::UploadFinished(outcome) => {
            component.finish_action();
            match outcome {
                Ok(response) if response.success => {
                    let text = response
                        .message
                        .as_deref()
                        .unwrap_or("File uploaded successfully!");
                    show_notification(text, BannerKind::Success);
                    schedule_reload(ctx);
                }
                Ok(response) => {
                    log_rejection("upload", &response);
                    show_notification("Upload failed", BannerKind::Error);
                }
                Err(err) => {
                    log::error!("upload failed: {err}");
                    show_notification("Error uploading file", BannerKind::Error);
                }
            }
            false
        }
        Msg::Edit(serial) => {
            navigate(&edit_report_path(&serial));
            false
        }
        Msg::Delete(serial) => {
            if component.busy {
                log::debug!("delete of {serial} not offered, another action is in flight");
                show_notification(BUSY_NOTICE, BannerKind::Info);
                return false;
            }
            let on_confirm = ctx
                .link()
                .callback(move |_| Msg::ConfirmDelete(serial.clone()));
            component.confirmation =
                Some(ConfirmationRequest::new("Delete this report?", on_confirm));
            true
        }
        Msg::CloseConfirmation => {
            component.confirmation = None;
            true
        }
        Msg::ConfirmDelete(serial) => {
            if !component.begin_action() {
                log::debug!("delete of {serial} ignored, another action is in flight");
                show_notification(BUSY_NOTICE, BannerKind::Info);
                return false;
            }

            let api = component.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api.delete(&serial).await;
                link.send_message(Msg::DeleteFinished(outcome));
            });
            false
        }
        Msg::DeleteFinished(outcome) => {
            component.finish_action();
            match outcome {
                Ok(response) if response.success => {
                    show_notification("Report deleted successfully!", BannerKind::Success);
                    schedule_reload(ctx);
                }
                Ok(response) => {
                    log_rejection("delete", &response);
                    show_notification("Error deleting report", BannerKind::Error);
                }
                Err(err) => {
                    log::error!("delete failed: {err}");
                    show_notification("Error deleting report", BannerKind::Error);
                }
            }
            false
        }
        Msg::Export(id) => {
            open_window(&component.api.endpoints().export(id), "_blank", "");
            show_notification("Downloading report...", BannerKind::Info);
            false
        }
    }
}

fn schedule_reload(ctx: &Context<ReportsComponent>) {
    let link = ctx.link().clone();
    after(RELOAD_DELAY, move || link.send_message(Msg::Load));
}

fn log_rejection(action: &str, response: &ServerResponse) {
    log::warn!(
        "{action} rejected: {}",
        response.explanation().unwrap_or("no details")
    );
}
