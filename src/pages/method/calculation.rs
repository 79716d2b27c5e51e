//! Equation Trace Rendering
//!
//! Fetches the symbolic or numeric component rows for one parameter and
//! renders each component exhaustively.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::InlineMath;
use crate::format::parameter_value;
use crate::models::{CalculationComponent, ParameterType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Symbols,
    Numbers,
}

#[component]
fn CalcComponent(component: CalculationComponent, parameter: ParameterType) -> impl IntoView {
    match component {
        CalculationComponent::Text(text) => view! {
            <div class="flex">{text}</div>
        }
        .into_any(),
        CalculationComponent::Equation(equation) => view! {
            <div class="flex"><InlineMath tex=equation /></div>
        }
        .into_any(),
        CalculationComponent::EquationWithResult(equation) => {
            let (value, units) = parameter
                .parameter()
                .map(|p| (parameter_value(p), p.units.clone().unwrap_or_default()))
                .unwrap_or_default();
            view! {
                <div class="flex">
                    <InlineMath tex=format!(r"{equation} = {value} \space {units}") />
                </div>
            }
            .into_any()
        }
    }
}

/// One parameter's equation trace, fetched from the backend on mount.
#[component]
pub fn Calculation(parameter: ParameterType, kind: TraceKind) -> impl IntoView {
    let (components, set_components) = signal(Vec::<Vec<CalculationComponent>>::new());

    let fetch_parameter = parameter.clone();
    Effect::new(move |_| {
        let parameter = fetch_parameter.clone();
        spawn_local(async move {
            let result = match kind {
                TraceKind::Symbols => commands::get_equation_with_symbols(&parameter).await,
                TraceKind::Numbers => commands::get_equation_with_numbers(&parameter).await,
            };
            match result {
                Ok(rows) => set_components.set(rows),
                // A stale sheet has no numeric trace; render nothing.
                Err(_) => set_components.set(vec![]),
            }
        });
    });

    view! {
        <div class="flex flex-col gap-5">
            {move || components.get().into_iter().map(|row| {
                let parameter = parameter.clone();
                view! {
                    <div class="flex flex-row items-center gap-10">
                        {row.into_iter().map(|component| view! {
                            <CalcComponent component=component parameter=parameter.clone() />
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
