//! Report form: creates a report, or edits one when opened with `?serial=`.
//!
//! Responsibilities
//! - Host a `FormController<ReportSchema>` and turn its decisions into requests,
//!   display timers and the follow-up navigation.
//! - In edit mode, load the report on first render and fill the inputs.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ReportFormProps;
pub use state::ReportFormComponent;

impl Component for ReportFormComponent {
    type Message = Msg;
    type Properties = ReportFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ReportFormComponent::new(ctx.props().serial.as_deref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.loaded {
            return;
        }
        self.loaded = true;

        if let Some(serial) = self.controller.schema().mode.serial() {
            let serial = serial.to_string();
            let api = self.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.get(&serial).await;
                link.send_message(Msg::ReportLoaded(result));
            });
        }
    }
}

