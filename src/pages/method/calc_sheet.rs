//! Calculation Sheet
//!
//! Per-step breakdown of an evaluated method: nomenclature, input
//! values, symbolic equations, and the numeric calculation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{Card, CardBody, CardHeader, InlineMath};
use crate::format::parameter_value;
use crate::models::{Method, Parameter, Step};
use crate::pages::method::calculation::{Calculation, TraceKind};

#[component]
fn SectionHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <CardHeader>
            <div class="ml-4 mt-4">
                <h3 class="text-base font-semibold leading-6 text-gray-900">{title}</h3>
            </div>
        </CardHeader>
    }
}

#[component]
fn RenderStep(step: Step, index: u32) -> impl IntoView {
    let (symbols, set_symbols) = signal(Vec::<Parameter>::new());
    let (inputs, set_inputs) = signal(Vec::<Parameter>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_equation_inputs_symbols(index).await {
                Ok(parameters) => set_symbols.set(parameters),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("get_equation_inputs_symbols failed: {e}").into(),
                    );
                }
            }
        });
        spawn_local(async move {
            match commands::get_equation_inputs(index).await {
                Ok(parameters) => set_inputs.set(parameters),
                Err(e) => {
                    web_sys::console::error_1(&format!("get_equation_inputs failed: {e}").into());
                }
            }
        });
    });

    let equations = step.parameters.clone();
    let calculations = step.parameters.clone();

    view! {
        <Card>
            <div class="flex justify-center">
                <h2 class="text-2xl font-bold leading-7 sm:tracking-tight">{step.name.clone()}</h2>
            </div>

            <SectionHeader title="Nomenclature" />
            <CardBody>
                <table>
                    <tbody>
                        <For
                            each=move || symbols.get()
                            key=|parameter| parameter.id.clone()
                            children=move |parameter| view! {
                                <tr>
                                    <td><InlineMath tex=parameter.id.clone() /></td>
                                    <td class="pl-4">
                                        {parameter.name.clone()} " "
                                        {parameter.units.clone().map(|units| view! {
                                            <InlineMath tex=format!("({units})") />
                                        })}
                                    </td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </CardBody>

            <SectionHeader title="Input" />
            <CardBody>
                <table>
                    <tbody>
                        <For
                            each=move || inputs.get()
                            key=|parameter| parameter.id.clone()
                            children=move |parameter| {
                                let units = parameter.units.clone().unwrap_or_default();
                                let value = parameter_value(&parameter);
                                view! {
                                    <tr>
                                        <td><InlineMath tex=parameter.id.clone() /></td>
                                        <td class="pl-4">
                                            <InlineMath tex=format!(r"{value} \space {units}") />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </CardBody>

            <SectionHeader title="Equations" />
            <CardBody>
                <div class="flex flex-col gap-3">
                    {equations.into_iter().map(|parameter| view! {
                        <div class="flex flex-row gap-3">
                            <Calculation parameter=parameter kind=TraceKind::Symbols />
                        </div>
                    }).collect_view()}
                </div>
            </CardBody>

            <SectionHeader title="Calculation" />
            <CardBody>
                <div class="flex flex-col gap-3">
                    {calculations.into_iter().map(|parameter| view! {
                        <div class="flex flex-row gap-3">
                            <Calculation parameter=parameter kind=TraceKind::Numbers />
                        </div>
                    }).collect_view()}
                </div>
            </CardBody>
        </Card>
    }
}

#[component]
pub fn CalcSheet(method: Method) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            {method.calc_sheet.steps.into_iter().enumerate().map(|(index, step)| view! {
                <RenderStep step=step index=index as u32 />
            }).collect_view()}
        </div>
    }
}
