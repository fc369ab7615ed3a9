use yew::{html, Component, Context, Html};

use crate::components::gpa_summary::GpaSummary;
use crate::components::medical_credits::MedicalCredits;
use crate::components::sidebar::Sidebar;
use crate::components::student_lookup::StudentLookup;
use crate::components::subject_difficulty::SubjectDifficulty;
use crate::components::subjects::Subjects;
use crate::section::Section;
use crate::services::api::ApiHandle;

pub enum Msg {
    Select(Section),
    ToggleSidebar,
}

/// Shell of the dashboard: the sidebar plus the active section.
pub struct App {
    api: ApiHandle,
    section: Section,
    sidebar_open: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            api: ApiHandle::from_build_env(),
            section: Section::default(),
            sidebar_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(section) => {
                let changed = self.section != section;
                self.section = section;
                // Choosing a section always closes the mobile menu.
                let was_open = std::mem::replace(&mut self.sidebar_open, false);
                changed || was_open
            }
            Msg::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let api = self.api.clone();

        let content = match self.section {
            Section::StudentLookup => html! { <StudentLookup {api} /> },
            Section::GpaSummary => html! { <GpaSummary {api} /> },
            Section::MedicalCredits => html! { <MedicalCredits {api} /> },
            Section::Subjects => html! { <Subjects {api} /> },
            Section::SubjectDifficulty => html! { <SubjectDifficulty {api} /> },
        };

        html! {
            <div class="dashboard">
                <Sidebar
                    active={self.section}
                    open={self.sidebar_open}
                    on_select={link.callback(Msg::Select)}
                    on_toggle={link.callback(|_| Msg::ToggleSidebar)}
                />
                <main class="content">
                    <header class="content-header">
                        <h1>{ self.section.label() }</h1>
                        <p>{ self.section.description() }</p>
                    </header>
                    { content }
                </main>
            </div>
        }
    }
}
