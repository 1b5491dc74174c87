use common::forms::account::AccountKind;
use yew::{html, Component, Context, Html};

use crate::browser::{current_path, query_param};
use crate::components::report_form::ReportFormComponent;
use crate::components::reports::ReportsComponent;
use crate::components::subscription::account_form::AccountFormComponent;
use crate::components::subscription::confirmation::ConfirmationPage;
use crate::components::subscription::packages::PackagesComponent;
use crate::routes::Page;

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let path = current_path();
        let page = Page::from_path(&path);
        log::debug!("routing {path} to {page:?}");
        Self { page }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match self.page {
            Page::Packages => html! { <PackagesComponent /> },
            Page::Signup => account_page(AccountKind::Signup),
            Page::Signin => account_page(AccountKind::Signin),
            Page::Payment => account_page(AccountKind::Payment),
            Page::Confirmation => html! { <ConfirmationPage /> },
            Page::ReportForm => html! { <ReportFormComponent serial={query_param("serial")} /> },
            Page::Reports => html! { <ReportsComponent /> },
            Page::NotFound => html! {
                <div class="not-found">
                    <h2>{"Page not found"}</h2>
                    <a href="/">{"Back to packages"}</a>
                </div>
            },
        }
    }
}

fn account_page(kind: AccountKind) -> Html {
    html! {
        <AccountFormComponent
            {kind}
            package={query_param("package")}
            user_id={query_param("user_id")}
        />
    }
}
