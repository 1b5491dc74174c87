//! Non-blocking confirmation dialog.
//!
//! The caller hands over a [`ConfirmationRequest`]: the question plus the continuation to
//! run on "Yes". The dialog owns its own lifecycle and reports closing through
//! `on_close`; "No" simply closes it.

use yew::{classes, html, Callback, Component, Context, Html, Properties};

#[derive(Clone, PartialEq)]
pub struct ConfirmationRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
}

impl ConfirmationRequest {
    pub fn new(message: impl Into<String>, on_confirm: Callback<()>) -> Self {
        Self {
            message: message.into(),
            on_confirm,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    /// Open dialog, if any. Replacing it replaces the open dialog.
    #[prop_or_default]
    pub request: Option<ConfirmationRequest>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Answer(bool),
}

pub struct ConfirmDialog;

impl Component for ConfirmDialog {
    type Message = Msg;
    type Properties = ConfirmDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Answer(confirmed) = msg;
        let props = ctx.props();
        props.on_close.emit(());
        if confirmed {
            if let Some(request) = &props.request {
                request.on_confirm.emit(());
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(request) = &ctx.props().request else {
            return html! {};
        };
        let link = ctx.link();

        html! {
            <div class="confirm-overlay">
                <div class="confirm-box" role="dialog" aria-modal="true">
                    <p>{ request.message.clone() }</p>
                    <div class="confirm-buttons">
                        <button
                            class={classes!("btn-confirm-yes")}
                            onclick={link.callback(|_| Msg::Answer(true))}
                        >
                            {"Yes"}
                        </button>
                        <button
                            class={classes!("btn-confirm-no")}
                            onclick={link.callback(|_| Msg::Answer(false))}
                        >
                            {"No"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
