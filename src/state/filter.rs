// ============================================================================
// STATUS FILTER ENGINE - Subconjunto visible del store según la selección
// ============================================================================

use crate::models::{Property, PropertyStatus};
use std::collections::BTreeSet;

/// Opción del dropdown: el centinela "Todos" o un status concreto.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FilterOption {
    Todos,
    Estado(PropertyStatus),
}

impl FilterOption {
    pub fn label(&self) -> &'static str {
        match self {
            FilterOption::Todos => "Todos",
            FilterOption::Estado(status) => status.label(),
        }
    }
}

/// Selección activa de filtros. `Estados` nunca queda vacío: quitar el
/// último status regresa a `Todos`.
#[derive(Clone, PartialEq, Debug)]
pub enum FilterSelection {
    Todos,
    Estados(BTreeSet<PropertyStatus>),
}

impl FilterSelection {
    /// Aplica el click sobre una opción. Función pura: (selección, opción)
    /// -> nueva selección.
    pub fn toggle(&self, option: FilterOption) -> FilterSelection {
        match option {
            // Seleccionar "Todos" limpia cualquier otra selección
            FilterOption::Todos => FilterSelection::Todos,
            FilterOption::Estado(status) => match self {
                FilterSelection::Todos => {
                    let mut set = BTreeSet::new();
                    set.insert(status);
                    FilterSelection::Estados(set)
                }
                FilterSelection::Estados(current) => {
                    let mut set = current.clone();
                    if !set.remove(&status) {
                        set.insert(status);
                    }
                    if set.is_empty() {
                        FilterSelection::Todos
                    } else {
                        FilterSelection::Estados(set)
                    }
                }
            },
        }
    }

    pub fn is_selected(&self, option: FilterOption) -> bool {
        match (self, option) {
            (FilterSelection::Todos, FilterOption::Todos) => true,
            (FilterSelection::Estados(set), FilterOption::Estado(status)) => set.contains(&status),
            _ => false,
        }
    }

    pub fn matches(&self, status: PropertyStatus) -> bool {
        match self {
            FilterSelection::Todos => true,
            FilterSelection::Estados(set) => set.contains(&status),
        }
    }

    /// Subsecuencia visible del store. El filtro es un predicado: conserva
    /// el orden original, nunca reordena.
    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        properties
            .iter()
            .filter(|p| self.matches(p.status))
            .cloned()
            .collect()
    }

    /// Texto del botón del dropdown
    pub fn summary(&self) -> String {
        match self {
            FilterSelection::Todos => "Todos".to_string(),
            FilterSelection::Estados(set) if set.len() == 1 => {
                set.iter().next().map(|s| s.label().to_string()).unwrap_or_default()
            }
            FilterSelection::Estados(set) => format!("{} estados", set.len()),
        }
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection::Todos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_properties;

    #[test]
    fn todos_es_identidad_y_conserva_el_orden() {
        let props = seed_properties();
        let visible = FilterSelection::Todos.apply(&props);
        assert_eq!(visible, props);
    }

    #[test]
    fn el_resultado_es_subconjunto_con_status_seleccionado() {
        let props = seed_properties();
        let selection = FilterSelection::Todos
            .toggle(FilterOption::Estado(PropertyStatus::Pendiente))
            .toggle(FilterOption::Estado(PropertyStatus::Viable));

        let visible = selection.apply(&props);
        assert!(visible.len() < props.len());
        for p in &visible {
            assert!(matches!(
                p.status,
                PropertyStatus::Pendiente | PropertyStatus::Viable
            ));
        }
        // Mismo orden relativo que el store
        let ids: Vec<_> = visible.iter().map(|p| p.id.clone()).collect();
        let expected: Vec<_> = props
            .iter()
            .filter(|p| selection.matches(p.status))
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn doble_click_sobre_el_mismo_status_regresa_a_todos() {
        let selection = FilterSelection::Todos
            .toggle(FilterOption::Estado(PropertyStatus::Viable))
            .toggle(FilterOption::Estado(PropertyStatus::Viable));
        assert_eq!(selection, FilterSelection::Todos);
    }

    #[test]
    fn click_en_todos_limpia_cualquier_seleccion() {
        let selection = FilterSelection::Todos
            .toggle(FilterOption::Estado(PropertyStatus::Pendiente))
            .toggle(FilterOption::Estado(PropertyStatus::NoViable))
            .toggle(FilterOption::Todos);
        assert_eq!(selection, FilterSelection::Todos);
    }

    #[test]
    fn seleccionar_un_estado_quita_el_centinela() {
        let selection =
            FilterSelection::Todos.toggle(FilterOption::Estado(PropertyStatus::EnRevision));
        assert!(!selection.is_selected(FilterOption::Todos));
        assert!(selection.is_selected(FilterOption::Estado(PropertyStatus::EnRevision)));
    }

    #[test]
    fn la_seleccion_nunca_queda_vacia() {
        // Secuencia arbitraria de toggles: siempre hay algo seleccionado
        let clicks = [
            FilterOption::Estado(PropertyStatus::Pendiente),
            FilterOption::Estado(PropertyStatus::Viable),
            FilterOption::Estado(PropertyStatus::Pendiente),
            FilterOption::Estado(PropertyStatus::Viable),
            FilterOption::Todos,
            FilterOption::Estado(PropertyStatus::Visitada),
            FilterOption::Estado(PropertyStatus::Visitada),
        ];
        let mut selection = FilterSelection::Todos;
        for click in clicks {
            selection = selection.toggle(click);
            match &selection {
                FilterSelection::Todos => {}
                FilterSelection::Estados(set) => assert!(!set.is_empty()),
            }
        }
        assert_eq!(selection, FilterSelection::Todos);
    }

    #[test]
    fn escenario_del_dashboard() {
        // store = [A pendiente, B viable]; toggle(Viable) filtra a B;
        // toggle(Viable) de nuevo muestra ambos
        let mut props = seed_properties();
        props.truncate(2);
        props[0].status = PropertyStatus::Pendiente;
        props[1].status = PropertyStatus::Viable;

        let selection =
            FilterSelection::Todos.toggle(FilterOption::Estado(PropertyStatus::Viable));
        let visible = selection.apply(&props);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, props[1].id);

        let selection = selection.toggle(FilterOption::Estado(PropertyStatus::Viable));
        assert_eq!(selection.apply(&props), props);
    }

    #[test]
    fn resumen_para_el_boton() {
        let selection = FilterSelection::Todos;
        assert_eq!(selection.summary(), "Todos");

        let selection = selection.toggle(FilterOption::Estado(PropertyStatus::Viable));
        assert_eq!(selection.summary(), "Viable");

        let selection = selection.toggle(FilterOption::Estado(PropertyStatus::Pendiente));
        assert_eq!(selection.summary(), "2 estados");
    }
}
