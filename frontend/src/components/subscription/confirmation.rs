use js_sys::{Date, Object, Reflect};
use wasm_bindgen::JsValue;
use yew::{html, Component, Context, Html};

/// Final page of the subscription flow.
pub struct ConfirmationPage {
    date: String,
}

impl Component for ConfirmationPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { date: today() }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container confirmation">
                <h2>{"Subscription confirmed"}</h2>
                <p>{"Thank you! Your payment was processed successfully."}</p>
                <p>{"Date: "}<span id="date">{ self.date.clone() }</span></p>
                <a class="btn-link" href="/">{"Back to packages"}</a>
            </div>
        }
    }
}

/// Today's date as "October 16, 2026".
fn today() -> String {
    let options = Object::new();
    for (key, value) in [("year", "numeric"), ("month", "long"), ("day", "numeric")] {
        Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)).ok();
    }
    Date::new_0()
        .to_locale_date_string("en-US", &options)
        .into()
}
