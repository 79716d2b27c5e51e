//! Inline Math Component
//!
//! Emits TeX in the `\( ... \)` delimiters that the host page's KaTeX
//! auto-render pass typesets.

use leptos::prelude::*;

#[component]
pub fn InlineMath(#[prop(into)] tex: String) -> impl IntoView {
    view! {
        <span class="inline-math">{format!(r"\({}\)", tex)}</span>
    }
}
