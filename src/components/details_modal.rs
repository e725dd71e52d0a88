use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::MAPS;
use crate::models::Property;
use crate::state::VisitEditor;
use crate::utils::format_mxn;

#[derive(Properties, PartialEq)]
pub struct DetailsModalProps {
    pub property: Property,
    pub on_close: Callback<()>,
    /// Única ruta de escritura hacia el Property Store
    pub on_update: Callback<Property>,
}

#[function_component(DetailsModal)]
pub fn details_modal(props: &DetailsModalProps) -> Html {
    let editor = use_state(|| VisitEditor::bind(&props.property));

    // Religar cuando cambia la propiedad mostrada: borrador recargado y
    // checkbox de visita apagado
    {
        let editor = editor.clone();
        use_effect_with(props.property.clone(), move |property| {
            editor.set(VisitEditor::bind(property));
            || ()
        });
    }

    let on_overlay_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_comment_input = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*editor).clone();
                next.set_comment(textarea.value());
                editor.set(next);
            }
        })
    };

    let on_visited_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*editor).clone();
                next.set_visit_confirmed(input.checked());
                editor.set(next);
            }
        })
    };

    let on_confirm_visit = {
        let editor = editor.clone();
        let property = props.property.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_: MouseEvent| {
            // No-op si el checkbox de confirmación está apagado
            if let Some(updated) = editor.confirm_visit(&property) {
                log::info!("📍 Visita confirmada para {}", updated.id);
                on_update.emit(updated);
            }
        })
    };

    let p = &props.property;
    let embed_url = MAPS.embed_map_url(p.coordenadas.lat, p.coordenadas.lng, MAPS.default_zoom);

    let info_item = |label: &str, value: String| {
        html! {
            <div class="info-item">
                <p class="info-label">{label.to_string()}</p>
                <p class="info-value">{value}</p>
            </div>
        }
    };

    html! {
        <div class="modal active" onclick={on_overlay_click}>
            <div class="modal-content" onclick={stop}>
                <div class="modal-header">
                    <div>
                        <h2>{&p.nombre}</h2>
                        <p class="modal-address">{&p.direccion}</p>
                    </div>
                    <button class="btn-close" onclick={on_close_click}>{"✕"}</button>
                </div>

                <div class="modal-body">
                    <div class="info-grid">
                        { info_item("Tipo", p.tipo.label().to_string()) }
                        { info_item("Habitaciones", p.habitaciones.to_string()) }
                        { info_item("Baños", p.banos.to_string()) }
                        { info_item("Superficie", format!("{} m²", p.superficie_m2)) }
                        { info_item("Adeudo Infonavit", format_mxn(p.adeudo_infonavit)) }
                        { info_item("Adeudo Agua", format_mxn(p.adeudo_agua)) }
                        { info_item("Adeudo Luz", format_mxn(p.adeudo_luz)) }
                        { info_item("Adeudo Predial", format_mxn(p.adeudo_predial)) }
                    </div>

                    <div class="modal-map">
                        <h3>{"Ubicación"}</h3>
                        {
                            if let Some(url) = embed_url {
                                html! {
                                    <iframe
                                        title={format!("Mapa de {}", p.nombre)}
                                        src={url}
                                        loading="lazy"
                                        allowfullscreen=true
                                        referrerpolicy="no-referrer-when-downgrade"
                                    />
                                }
                            } else {
                                html! {
                                    <div class="map-placeholder">
                                        <p class="placeholder-title">{"Mapa no disponible"}</p>
                                        <p class="placeholder-hint">
                                            {"Se requiere una API Key de Google Maps válida."}
                                        </p>
                                    </div>
                                }
                            }
                        }
                    </div>

                    <div class="visit-section">
                        <div class="visit-checkbox-row">
                            <input
                                id="visit-checkbox"
                                type="checkbox"
                                checked={editor.visit_confirmed()}
                                onchange={on_visited_change}
                            />
                            <label for="visit-checkbox">
                                {"Confirmo que he visitado la propiedad y verificado su estado físico."}
                            </label>
                        </div>

                        <textarea
                            placeholder="Comentarios del inversionista después de marcar visita o revisar ficha..."
                            value={editor.draft_comment().to_string()}
                            oninput={on_comment_input}
                            rows="4"
                        />

                        <button
                            class="btn-confirm-visit"
                            onclick={on_confirm_visit}
                            disabled={!editor.visit_confirmed()}
                        >
                            {"Marcar como Visitada y Guardar Comentarios"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
