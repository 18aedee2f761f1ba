use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

use crate::calc::HealthStatus;
use crate::error::{PlannerError, Result};
use crate::format::{format_currency, health_message};
use crate::snapshot::{Field, FormSnapshot};

/// Field and new text carried by an input event.
pub fn field_edit(e: &InputEvent) -> Result<(Field, String)> {
    let input = e
        .target_dyn_into::<HtmlInputElement>()
        .ok_or(PlannerError::MissingInputTarget)?;
    let field = input.name().parse::<Field>()?;
    Ok((field, input.value()))
}

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub field: Field,
    pub snapshot: FormSnapshot,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let field = props.field;
    html! {
        <div>
            <label class="block text-sm mb-2 text-black">{ field.label() }</label>
            <input
                name={field.key()}
                type="number"
                step="any"
                value={props.snapshot.value(field).to_string()}
                oninput={props.oninput.clone()}
                placeholder={field.placeholder()}
                class="w-full p-2 border rounded shadow-sm focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none text-black"
            />
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Tone {
    Gain,
    Cost,
    Balance,
}

#[derive(Properties, PartialEq)]
pub struct SummaryRowProps {
    pub label: &'static str,
    pub amount: f64,
    pub tone: Tone,
    pub currency_symbol: String,
}

#[function_component(SummaryRow)]
pub fn summary_row(props: &SummaryRowProps) -> Html {
    let (row_class, amount_class) = match props.tone {
        Tone::Gain => ("flex justify-between text-black", "text-green-600 font-medium"),
        Tone::Cost => ("flex justify-between text-black", "text-red-600 font-medium"),
        Tone::Balance if props.amount >= 0.0 => (
            "flex justify-between pt-2 border-t text-black",
            "text-green-600 font-medium",
        ),
        Tone::Balance => (
            "flex justify-between pt-2 border-t text-black",
            "text-red-600 font-medium",
        ),
    };

    html! {
        <p class={row_class}>
            <span>{ props.label }</span>
            <span class={amount_class}>{ format_currency(props.amount, &props.currency_symbol) }</span>
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct HealthBannerProps {
    pub status: HealthStatus,
    pub currency_symbol: String,
}

#[function_component(HealthBanner)]
pub fn health_banner(props: &HealthBannerProps) -> Html {
    html! {
        <div class="bg-blue-50 p-4 rounded-lg mt-4">
            <p class="text-blue-800">{ health_message(&props.status, &props.currency_symbol) }</p>
        </div>
    }
}
