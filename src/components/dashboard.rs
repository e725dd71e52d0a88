use yew::prelude::*;

use super::{FilterDropdown, PropertyCard};
use crate::models::Property;
use crate::state::{FilterOption, FilterSelection};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub properties: Vec<Property>,
    pub on_select: Callback<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    // La selección de filtros vive solo mientras el dashboard está montado
    let selection = use_state(FilterSelection::default);

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |option: FilterOption| {
            selection.set(selection.toggle(option));
        })
    };

    let visible = selection.apply(&props.properties);

    let on_logout_click = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>{"Propiedades Asignadas"}</h1>
                    <p>{"Revise, filtre y gestione las propiedades de su cartera."}</p>
                </div>
                <div class="header-user">
                    <p class="welcome">{"Bienvenido inversionista"}</p>
                    <button class="btn-logout" onclick={on_logout_click}>
                        {"Cerrar sesión"}
                    </button>
                </div>
            </header>

            <div class="dashboard-filters">
                <FilterDropdown selection={(*selection).clone()} on_toggle={on_toggle} />
            </div>

            <div class="property-grid">
                { for visible.iter().map(|property| {
                    let on_click = {
                        let cb = props.on_select.clone();
                        let id = property.id.clone();
                        Callback::from(move |_| cb.emit(id.clone()))
                    };
                    html! {
                        <PropertyCard
                            key={property.id.clone()}
                            property={property.clone()}
                            on_click={on_click}
                        />
                    }
                })}
            </div>
        </div>
    }
}
