use yew::prelude::*;

use super::{Dashboard, DetailsModal, LoginScreen};
use crate::models::Property;
use crate::state::{PropertyStore, SessionGate};

#[function_component(App)]
pub fn app() -> Html {
    // Bandera de sesión: inicializada desde localStorage para que una
    // recarga conserve el login
    let is_logged_in = use_state(|| SessionGate::browser().is_authenticated());

    // Fuente única de verdad de la cartera
    let store = use_state(PropertyStore::with_seed);

    // Solo guardamos el id: el modal siempre relee el registro del store,
    // así refleja sus propias escrituras de inmediato
    let selected_id = use_state(|| None::<String>);

    let on_login = {
        let is_logged_in = is_logged_in.clone();
        Callback::from(move |_| {
            SessionGate::browser().login();
            is_logged_in.set(true);
        })
    };

    let on_logout = {
        let is_logged_in = is_logged_in.clone();
        let selected_id = selected_id.clone();
        Callback::from(move |_| {
            SessionGate::browser().logout();
            selected_id.set(None);
            is_logged_in.set(false);
        })
    };

    let on_select = {
        let selected_id = selected_id.clone();
        Callback::from(move |id: String| {
            selected_id.set(Some(id));
        })
    };

    let on_close = {
        let selected_id = selected_id.clone();
        Callback::from(move |_| selected_id.set(None))
    };

    // Única ruta de mutación del store
    let on_update = {
        let store = store.clone();
        Callback::from(move |updated: Property| {
            let mut next = (*store).clone();
            match next.update(updated) {
                Ok(()) => {
                    log::info!("💾 Propiedad actualizada en el store");
                    store.set(next);
                }
                Err(e) => log::error!("❌ Error actualizando propiedad: {}", e),
            }
        })
    };

    if !*is_logged_in {
        return html! { <LoginScreen on_login={on_login} /> };
    }

    let selected_property = selected_id
        .as_ref()
        .and_then(|id| store.get(id))
        .cloned();

    html! {
        <>
            <Dashboard
                properties={store.all().to_vec()}
                on_select={on_select}
                on_logout={on_logout}
            />
            {
                if let Some(property) = selected_property {
                    html! {
                        <DetailsModal
                            property={property}
                            on_close={on_close}
                            on_update={on_update}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
