//! Quick Results Card
//!
//! Live headline result under the input form: the first parameter of the
//! calc sheet's first step, or a placeholder when nothing valid has been
//! computed yet.

use leptos::prelude::*;

use crate::components::{Card, CardBody, CardHeader, InlineMath, WarningAlert};
use crate::format::parameter_value;
use crate::models::Calculation;

#[component]
pub fn QuickResults(results: Calculation) -> impl IntoView {
    let Some(display) = results
        .steps
        .first()
        .and_then(|step| step.parameters.first())
        .and_then(|parameter| parameter.parameter().cloned())
    else {
        return ().into_any();
    };

    let body = if display.value.is_none() {
        view! { <p>"Not yet calculated"</p> }.into_any()
    } else if results.stale {
        view! { <WarningAlert message="Invalid Input".to_string() /> }.into_any()
    } else {
        let units = display.units.clone().unwrap_or_default();
        let value = parameter_value(&display);
        view! {
            <InlineMath tex=format!(r"{} = {value} \space {units}", display.id) />
        }
        .into_any()
    };

    view! {
        <Card>
            <CardHeader>
                <div class="ml-4 mt-4 flex flex-col">
                    <h3 class="text-base font-semibold leading-6 text-gray-900 mr-2">
                        {display.name.clone()}
                    </h3>
                </div>
            </CardHeader>
            <CardBody>
                <div class="flex flex-col gap-3">{body}</div>
            </CardBody>
        </Card>
    }
    .into_any()
}
