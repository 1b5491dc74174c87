use common::model::package::{Package, PACKAGES};
use common::navigation::{signup_path, PACKAGE_SELECT_DELAY};
use yew::{classes, html, Component, Context, Html};

use crate::browser::{after, navigate};

pub enum Msg {
    Select(&'static str),
}

/// Landing page listing the packages. Choosing one leaves for the signup page.
pub struct PackagesComponent {
    selected: Option<&'static str>,
}

impl Component for PackagesComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { selected: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Select(key) = msg;
        if self.selected.is_some() {
            return false;
        }
        self.selected = Some(key);
        after(PACKAGE_SELECT_DELAY, move || navigate(&signup_path(key)));
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <h1>{"Choose your plan"}</h1>
                <div class="packages">
                    { for PACKAGES.iter().map(|package| self.card(ctx, package)) }
                </div>
            </div>
        }
    }
}

impl PackagesComponent {
    fn card(&self, ctx: &Context<Self>, package: &'static Package) -> Html {
        let loading = self.selected == Some(package.key);
        let key = package.key;

        html! {
            <div class={classes!("package-card", loading.then_some("selected"))}>
                <h3>{ package.name }</h3>
                <div class="price">{ package.price() }<span>{"/month"}</span></div>
                <ul>
                    { for package.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                </ul>
                <button
                    disabled={self.selected.is_some()}
                    onclick={ctx.link().callback(move |_| Msg::Select(key))}
                >
                    { if loading { "Loading..." } else { "Select" } }
                </button>
            </div>
        }
    }
}
