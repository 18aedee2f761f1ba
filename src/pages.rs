use web_sys::InputEvent;
use yew::prelude::*;

use crate::calc::Summary;
use crate::components::{FieldInput, HealthBanner, SummaryRow, Tone};
use crate::format::format_number;
use crate::settings::PlannerSettings;
use crate::snapshot::{Field, FormSnapshot};

#[derive(Properties, PartialEq)]
pub struct TabProps {
    pub snapshot: FormSnapshot,
    pub oninput: Callback<InputEvent>,
}

fn inputs(fields: &[Field], props: &TabProps) -> Html {
    html! {
        <>
            { for fields.iter().map(|field| html! {
                <FieldInput
                    field={*field}
                    snapshot={props.snapshot.clone()}
                    oninput={props.oninput.clone()}
                />
            }) }
        </>
    }
}

#[hook]
fn use_currency_symbol() -> String {
    use_context::<PlannerSettings>()
        .map(|s| s.currency_symbol)
        .unwrap_or_else(|| PlannerSettings::default().currency_symbol)
}

#[function_component(GoalsTab)]
pub fn goals_tab(props: &TabProps) -> Html {
    html! {
        <div class="space-y-4">
            { inputs(&[Field::ShortTermGoal, Field::MediumTermGoal, Field::LongTermGoal], props) }
        </div>
    }
}

#[function_component(RevenueTab)]
pub fn revenue_tab(props: &TabProps) -> Html {
    html! {
        <div class="space-y-4">
            { inputs(&[Field::Products, Field::Services], props) }
        </div>
    }
}

#[function_component(CostsTab)]
pub fn costs_tab(props: &TabProps) -> Html {
    let currency_symbol = use_currency_symbol();
    let fee = Summary::of(&props.snapshot).gateway_fee;

    html! {
        <div class="space-y-6">
            <div class="space-y-4">
                <h3 class="text-lg font-medium text-black">{"Custos Fixos Mensais"}</h3>
                { inputs(&[Field::Tools, Field::Hosting, Field::Workspace], props) }
            </div>

            <div class="space-y-4">
                <h3 class="text-lg font-medium text-black">{"Custos Variáveis Mensais"}</h3>
                { inputs(&[Field::Marketing], props) }
                <FieldInput
                    field={Field::GatewayPercentage}
                    snapshot={props.snapshot.clone()}
                    oninput={props.oninput.clone()}
                >
                    <p class="text-sm text-gray-500 mt-1">
                        { format!("Taxa calculada: {} {}", currency_symbol, format_number(fee, 2)) }
                    </p>
                </FieldInput>
                { inputs(&[Field::Others], props) }
            </div>
        </div>
    }
}

#[function_component(SummaryTab)]
pub fn summary_tab(props: &TabProps) -> Html {
    let currency_symbol = use_currency_symbol();
    let summary = Summary::of(&props.snapshot);

    html! {
        <div class="space-y-4">
            <div class="bg-gray-50 p-4 rounded-lg space-y-2">
                <SummaryRow label="Total de Receitas:" amount={summary.total_revenue} tone={Tone::Gain} currency_symbol={currency_symbol.clone()} />
                <SummaryRow label="Custos Fixos:" amount={summary.total_fixed_costs} tone={Tone::Cost} currency_symbol={currency_symbol.clone()} />
                <SummaryRow label="Custos Variáveis:" amount={summary.total_variable_costs} tone={Tone::Cost} currency_symbol={currency_symbol.clone()} />
                <SummaryRow label="Lucro Mensal:" amount={summary.profit} tone={Tone::Balance} currency_symbol={currency_symbol.clone()} />
            </div>

            { inputs(&[Field::Emergency], props) }

            <HealthBanner status={summary.health} currency_symbol={currency_symbol} />
        </div>
    }
}
