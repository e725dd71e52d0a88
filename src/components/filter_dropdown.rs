use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};
use yew::prelude::*;

use crate::models::PropertyStatus;
use crate::state::{FilterOption, FilterSelection};

#[derive(Properties, PartialEq)]
pub struct FilterDropdownProps {
    pub selection: FilterSelection,
    pub on_toggle: Callback<FilterOption>,
}

/// Dropdown multi-selección de estados. Se cierra cuando el foco sale del
/// componente (contrato de blur local, sin listeners globales al documento).
#[function_component(FilterDropdown)]
pub fn filter_dropdown(props: &FilterDropdownProps) -> Html {
    let open = use_state(|| false);
    let container_ref = use_node_ref();

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    // Cerrar solo si el nuevo foco queda fuera del contenedor
    let on_focus_out = {
        let open = open.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |e: FocusEvent| {
            let container = match container_ref.cast::<HtmlElement>() {
                Some(el) => el,
                None => return,
            };
            let focus_stays_inside = e
                .related_target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|node| container.contains(Some(&node)))
                .unwrap_or(false);
            if !focus_stays_inside {
                open.set(false);
            }
        })
    };

    let options: Vec<FilterOption> = std::iter::once(FilterOption::Todos)
        .chain(PropertyStatus::ALL.iter().map(|s| FilterOption::Estado(*s)))
        .collect();

    html! {
        <div class="filter-dropdown" tabindex="-1" ref={container_ref} onfocusout={on_focus_out}>
            <button type="button" class="filter-toggle" onclick={toggle_open}>
                <span>{format!("Estado: {}", props.selection.summary())}</span>
                <span class="chevron">{ if *open { "▲" } else { "▼" } }</span>
            </button>
            {
                if *open {
                    html! {
                        <div class="filter-panel">
                            { for options.iter().map(|option| {
                                let option = *option;
                                let checked = props.selection.is_selected(option);
                                let on_change = {
                                    let cb = props.on_toggle.clone();
                                    Callback::from(move |_: Event| cb.emit(option))
                                };
                                html! {
                                    <label class="filter-option" key={option.label()}>
                                        <input
                                            type="checkbox"
                                            checked={checked}
                                            onchange={on_change}
                                        />
                                        <span>{option.label()}</span>
                                    </label>
                                }
                            })}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
