use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Section,
    pub open: bool,
    pub on_select: Callback<Section>,
    pub on_toggle: Callback<()>,
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let toggle = props.on_toggle.reform(|_| ());

        html! {
            <>
                <button class="sidebar-toggle" title="Menu" onclick={toggle.clone()}>
                    <i class="material-icons">{ if props.open { "close" } else { "menu" } }</i>
                </button>
                <nav class={classes!("sidebar", props.open.then_some("open"))}>
                    <div class="sidebar-title">{"Academic Records"}</div>
                    {
                        for Section::ALL.iter().map(|section| {
                            let section = *section;
                            let on_select = props.on_select.reform(move |_| section);
                            html! {
                                <button
                                    class={classes!("nav-item", (section == props.active).then_some("active"))}
                                    onclick={on_select}
                                >
                                    <i class="material-icons">{ section.icon() }</i>
                                    <span class="nav-label">{ section.label() }</span>
                                    <span class="nav-description">{ section.description() }</span>
                                </button>
                            }
                        })
                    }
                </nav>
                if props.open {
                    <div class="sidebar-backdrop" onclick={toggle} />
                }
            </>
        }
    }
}
