//! Signup, signin and payment forms.
//!
//! One component serves the three pages; the `kind` prop picks the schema, the visible
//! inputs and the hidden fields carried over from the query string.

use std::collections::HashMap;

use common::banner::BANNER_TIMEOUT;
use common::error::NetworkError;
use common::forms::account::{AccountKind, AccountSchema};
use common::model::fields::FormFields;
use common::model::package::{capitalize, Package};
use common::model::response::ServerResponse;
use common::navigation::with_query;
use common::submission::{Attempt, DisplayToken, FormController, Ticket};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::accounts;
use crate::browser::{after, follow};
use crate::components::banner::banner_view;
use crate::config::client_config;

#[derive(Properties, PartialEq, Clone)]
pub struct AccountFormProps {
    pub kind: AccountKind,
    /// `package` query parameter; unknown values fall back to the basic package.
    #[prop_or_default]
    pub package: Option<String>,
    /// `user_id` query parameter, forwarded by the payment form.
    #[prop_or_default]
    pub user_id: Option<String>,
}

pub enum Msg {
    SetField(&'static str, String),
    Submit,
    Completed(Ticket, Result<ServerResponse, NetworkError>),
    Expire(DisplayToken),
    Dismiss,
}

pub struct AccountFormComponent {
    controller: FormController<AccountSchema>,
    values: HashMap<&'static str, String>,
    package: &'static Package,
}

/// Visible inputs: `(name, label, input type)`.
fn inputs(kind: AccountKind) -> &'static [(&'static str, &'static str, &'static str)] {
    match kind {
        AccountKind::Signup => &[
            ("full_name", "Full Name", "text"),
            ("email", "Email", "email"),
            ("password", "Password", "password"),
        ],
        AccountKind::Signin => &[("email", "Email", "email"), ("password", "Password", "password")],
        AccountKind::Payment => &[("token", "Payment Token", "text")],
    }
}

impl AccountFormComponent {
    fn fields(&self, props: &AccountFormProps) -> FormFields {
        let mut fields: FormFields = self
            .values
            .iter()
            .map(|(&name, value)| (name, value.clone()))
            .collect();
        fields.insert("package", self.package.key);
        if props.kind == AccountKind::Payment {
            fields.insert("user_id", props.user_id.clone().unwrap_or_default());
        }
        fields
    }

    fn schedule_expiry(ctx: &Context<Self>, token: DisplayToken) {
        let link = ctx.link().clone();
        after(BANNER_TIMEOUT, move || link.send_message(Msg::Expire(token)));
    }

    fn heading(&self, kind: AccountKind) -> String {
        let name = capitalize(self.package.key);
        match kind {
            AccountKind::Signup => format!("Create your {name} account"),
            AccountKind::Signin => format!("Sign in to continue with {name}"),
            AccountKind::Payment => format!("{name} plan: {} / month", self.package.price()),
        }
    }

    fn alternate_link(&self, kind: AccountKind) -> Html {
        let package = [("package", self.package.key)];
        match kind {
            AccountKind::Signup => html! {
                <p class="form-footer">
                    {"Already have an account? "}
                    <a href={with_query("/signin", &package)}>{"Sign in"}</a>
                </p>
            },
            AccountKind::Signin => html! {
                <p class="form-footer">
                    {"New here? "}
                    <a href={with_query("/signup", &package)}>{"Create an account"}</a>
                </p>
            },
            AccountKind::Payment => html! {},
        }
    }
}

impl Component for AccountFormComponent {
    type Message = Msg;
    type Properties = AccountFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            controller: FormController::new(AccountSchema::new(props.kind)),
            values: HashMap::new(),
            package: Package::lookup(props.package.as_deref()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetField(name, value) => {
                self.values.insert(name, value);
                true
            }
            Msg::Submit => match self.controller.submit(&self.fields(ctx.props())) {
                Attempt::Send { ticket, request } => {
                    let timeout_ms = client_config().timeout_ms();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = accounts::submit(&request, timeout_ms).await;
                        link.send_message(Msg::Completed(ticket, outcome));
                    });
                    true
                }
                Attempt::Blocked { token, .. } => {
                    Self::schedule_expiry(ctx, token);
                    true
                }
                Attempt::Ignored => false,
            },
            Msg::Completed(ticket, outcome) => {
                let Some(completion) = self.controller.complete(ticket, outcome) else {
                    return false;
                };
                if let Some(err) = &completion.error {
                    log::error!("{:?} form failed: {err}", ctx.props().kind);
                }
                Self::schedule_expiry(ctx, completion.token);
                if let Some(follow_up) = completion.follow_up {
                    follow(follow_up);
                }
                true
            }
            Msg::Expire(token) => self.controller.expire(token),
            Msg::Dismiss => {
                self.controller.dismiss();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let kind = ctx.props().kind;
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let onkeydown = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Escape").then_some(Msg::Dismiss)
        });

        html! {
            <div class="container auth" {onkeydown}>
                <h2>{ self.heading(kind) }</h2>
                { banner_view(self.controller.banner()) }
                <form {onsubmit} novalidate={true}>
                    {
                        for inputs(kind).iter().map(|&(name, label, input_type)| html! {
                            <div class="form-group">
                                <label>{ label }</label>
                                <input
                                    type={input_type}
                                    {name}
                                    value={self.values.get(name).cloned().unwrap_or_default()}
                                    oninput={link.callback(move |e: InputEvent| {
                                        Msg::SetField(name, e.target_unchecked_into::<HtmlInputElement>().value())
                                    })}
                                />
                            </div>
                        })
                    }
                    <button type="submit" disabled={self.controller.button_disabled()}>
                        { self.controller.button_label() }
                    </button>
                </form>
                { self.alternate_link(kind) }
            </div>
        }
    }
}
