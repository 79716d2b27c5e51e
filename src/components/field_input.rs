//! Form Step Section
//!
//! One card per form step: name, description, optional introduction rows
//! (titles, prose, equations), and a grid of field inputs.

use leptos::prelude::*;

use crate::components::{Card, CardBody, CardHeader, InlineMath, ParameterInput};
use crate::format::stringed_param;
use crate::models::{CalculationComponent, FormStep, IntroComponent};

#[component]
fn IntroductionItem(intro: IntroComponent) -> impl IntoView {
    match intro {
        IntroComponent::Title(title) => view! {
            <h3 class="text-base font-semibold text-gray-900">{title}</h3>
        }
        .into_any(),
        IntroComponent::Text(text) => view! {
            <div class="flex flex-row items-center"><p>{text}</p></div>
        }
        .into_any(),
        IntroComponent::Equation(CalculationComponent::Equation(equation)) => view! {
            <div class="my-2"><InlineMath tex=equation /></div>
        }
        .into_any(),
        // Only plain equations appear in introductions.
        IntroComponent::Equation(_) => ().into_any(),
    }
}

#[component]
pub fn FieldInputSection(
    step: FormStep,
    #[prop(optional, into)] do_quick_calc: Option<Callback<()>>,
) -> impl IntoView {
    let introduction = step.introduction.clone();
    let fields: Vec<_> = step
        .fields
        .iter()
        .filter_map(|field| stringed_param(&field.parameter))
        .collect();

    view! {
        <Card>
            <CardHeader>
                <div class="ml-4 mt-4 flex flex-col">
                    <h3 class="text-base font-semibold leading-6 text-gray-900 mr-2">
                        {step.name.clone()}
                    </h3>
                    <p class="mt-1 text-sm text-gray-500">{step.description.clone()}</p>
                </div>
            </CardHeader>
            <CardBody>
                {(!introduction.is_empty()).then(|| view! {
                    <div class="flex flex-col">
                        {introduction.into_iter().map(|row| view! {
                            <div class="flex flex-row gap-10">
                                {row.into_iter().map(|intro| view! {
                                    <IntroductionItem intro=intro />
                                }).collect_view()}
                            </div>
                        }).collect_view()}
                    </div>
                })}
                <div class="py-6">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-9">
                        {fields.into_iter().map(|field| match do_quick_calc {
                            Some(quick_calc) => view! {
                                <ParameterInput field=field do_quick_calc=quick_calc />
                            }
                            .into_any(),
                            None => view! {
                                <ParameterInput field=field />
                            }
                            .into_any(),
                        }).collect_view()}
                    </div>
                </div>
            </CardBody>
        </Card>
    }
}
