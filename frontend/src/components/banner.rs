use common::banner::Banner;
use yew::prelude::*;

/// The message line above a form. Renders nothing when there is no banner.
pub fn banner_view(banner: Option<&Banner>) -> Html {
    match banner {
        Some(banner) => html! {
            <div id="message" class={classes!("alert", banner.kind.class(), "show")} role="alert">
                { banner.text.clone() }
            </div>
        },
        None => html! {},
    }
}
