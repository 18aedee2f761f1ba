use web_sys::InputEvent;
use yew::prelude::*;

use crate::calc;
use crate::components::field_edit;
use crate::pages::{CostsTab, GoalsTab, RevenueTab, SummaryTab};
use crate::settings::PlannerSettings;
use crate::snapshot::FormSnapshot;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tab {
    Goals,
    Revenue,
    Costs,
    Summary,
}

struct TabItem {
    label: &'static str,
    tab: Tab,
}

const TAB_ITEMS: [TabItem; 4] = [
    TabItem {
        label: "Metas",
        tab: Tab::Goals,
    },
    TabItem {
        label: "Receitas",
        tab: Tab::Revenue,
    },
    TabItem {
        label: "Custos",
        tab: Tab::Costs,
    },
    TabItem {
        label: "Resumo",
        tab: Tab::Summary,
    },
];

#[derive(Properties, PartialEq)]
struct TabBarProps {
    active_tab: Tab,
    on_select: Callback<Tab>,
}

#[function_component(TabBar)]
fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div role="tablist" class="flex space-x-2 mb-6">
            { for TAB_ITEMS.iter().map(|item| {
                let is_active = item.tab == props.active_tab;
                let class = if is_active {
                    "px-4 py-2 rounded hover:bg-gray-100 text-black bg-gray-200"
                } else {
                    "px-4 py-2 rounded hover:bg-gray-100 text-black"
                };
                let onclick = {
                    let on_select = props.on_select.clone();
                    let tab = item.tab;
                    Callback::from(move |_| on_select.emit(tab))
                };
                html! {
                    <button role="tab" aria-selected={is_active.to_string()} class={class} onclick={onclick}>
                        { item.label }
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub settings: PlannerSettings,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let active_tab = use_state(|| Tab::Goals);
    let snapshot = use_state(FormSnapshot::default);

    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            log::info!("switching to {:?} tab", tab);
            active_tab.set(tab);
        })
    };

    let on_input = {
        let snapshot = snapshot.clone();
        Callback::from(move |e: InputEvent| match field_edit(&e) {
            Ok((field, value)) => {
                log::debug!("edited {}", field.key());
                snapshot.set(snapshot.with(field, value));
            }
            Err(err) => log::warn!("dropping input event: {}", err),
        })
    };

    let health = calc::health_status(&snapshot);
    use_effect_with_deps(
        |health| {
            log::debug!("health status is now {:?}", health);
            || ()
        },
        health,
    );

    let tab_props = (*snapshot).clone();
    let content = match *active_tab {
        Tab::Goals => html! { <GoalsTab snapshot={tab_props} oninput={on_input} /> },
        Tab::Revenue => html! { <RevenueTab snapshot={tab_props} oninput={on_input} /> },
        Tab::Costs => html! { <CostsTab snapshot={tab_props} oninput={on_input} /> },
        Tab::Summary => html! { <SummaryTab snapshot={tab_props} oninput={on_input} /> },
    };

    html! {
        <ContextProvider<PlannerSettings> context={props.settings.clone()}>
            <div class="w-full max-w-3xl mx-auto p-4 font-[Poppins]">
                <div class="bg-white rounded-lg shadow-lg p-6">
                    <h1 class="text-2xl font-bold text-center mb-6 text-black">{"Planner Financeiro TRM"}</h1>
                    <TabBar active_tab={*active_tab} on_select={on_select} />
                    <div role="tabpanel" class="mt-4">
                        { content }
                    </div>
                </div>
            </div>
        </ContextProvider<PlannerSettings>>
    }
}
