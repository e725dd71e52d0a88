use yew::prelude::*;

use crate::config::MAPS;
use crate::models::Property;
use crate::utils::format_mxn;

// Rango de zoom válido de la API de mapas estáticos
const MIN_ZOOM: u8 = 10;
const MAX_ZOOM: u8 = 21;

#[derive(Properties, PartialEq)]
pub struct PropertyCardProps {
    pub property: Property,
    pub on_click: Callback<()>,
}

#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyCardProps) -> Html {
    let p = &props.property;

    let zoom = use_state(|| MAPS.default_zoom);
    let map_load_error = use_state(|| false);

    let map_url = MAPS.static_map_url(p.coordenadas.lat, p.coordenadas.lng, *zoom);

    let on_card_click = {
        let cb = props.on_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_map_error = {
        let map_load_error = map_load_error.clone();
        Callback::from(move |_: Event| map_load_error.set(true))
    };

    // El zoom no debe abrir el modal
    let on_zoom_in = {
        let zoom = zoom.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if *zoom < MAX_ZOOM {
                zoom.set(*zoom + 1);
            }
        })
    };

    let on_zoom_out = {
        let zoom = zoom.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if *zoom > MIN_ZOOM {
                zoom.set(*zoom - 1);
            }
        })
    };

    html! {
        <div class="property-card" onclick={on_card_click}>
            <div class="card-map">
                {
                    match (&map_url, *map_load_error) {
                        (Some(url), false) => html! {
                            <>
                                <img
                                    src={url.clone()}
                                    alt="Mapa de la propiedad"
                                    onerror={on_map_error}
                                />
                                <div class="map-zoom-controls">
                                    <button onclick={on_zoom_out} aria-label="Alejar">{"-"}</button>
                                    <button onclick={on_zoom_in} aria-label="Acercar">{"+"}</button>
                                </div>
                            </>
                        },
                        _ => html! {
                            <div class="map-placeholder">
                                <p class="placeholder-title">{"Mapa no disponible"}</p>
                                <p class="placeholder-hint">
                                    {"Se requiere una API Key de Google Maps válida."}
                                </p>
                            </div>
                        },
                    }
                }
                <span class={p.status.badge_class()}>{p.status.label()}</span>
            </div>

            <div class="card-body">
                <h3>{&p.nombre}</h3>
                <p class="card-address">{&p.direccion}</p>

                <div class="card-features">
                    <span>{p.tipo.label()}</span>
                    <span>{format!("{} Hab.", p.habitaciones)}</span>
                    <span>{format!("{} Baños", p.banos)}</span>
                    <span>{format!("{} m²", p.superficie_m2)}</span>
                </div>

                <div class="card-debts">
                    <p class="debt-label">{"Adeudo Infonavit:"}</p>
                    <p class="debt-main">{format_mxn(p.adeudo_infonavit)}</p>
                    <p class="debt-breakdown">
                        {format!(
                            "Agua: {} | Luz: {} | Predial: {}",
                            format_mxn(p.adeudo_agua),
                            format_mxn(p.adeudo_luz),
                            format_mxn(p.adeudo_predial),
                        )}
                    </p>
                </div>
            </div>
        </div>
    }
}
