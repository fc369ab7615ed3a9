//! Subject catalog joined with difficulty summaries.
//!
//! Both lists load on first render, each in its own slot, so a failing
//! difficulty summary still leaves the catalog usable. Selecting a row
//! fetches that subject's metadata for the detail panel, which also offers
//! the workbook download.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SubjectsProps;
pub use state::Subjects;

impl Component for Subjects {
    type Message = Msg;
    type Properties = SubjectsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Subjects::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
