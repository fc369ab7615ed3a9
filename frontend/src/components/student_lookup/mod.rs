//! Student lookup: one student's full results, the per-semester GPA trend
//! and single-subject attempts.
//!
//! The full search and the subject search share the page but never show at
//! the same time; starting one clears the other panel.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentLookupProps;
pub use state::StudentLookup;

impl Component for StudentLookup {
    type Message = Msg;
    type Properties = StudentLookupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentLookup::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
