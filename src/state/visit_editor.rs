// ============================================================================
// VISIT EDITOR - Borrador local del modal de detalle
// ============================================================================
// Ligado a una sola propiedad a la vez. La única transición que dispara es
// Pendiente/cualquiera -> Visitada, y solo con la confirmación explícita
// del usuario. Todo lo demás es borrador local sin escribir al store.
// ============================================================================

use crate::models::{Property, PropertyStatus};

#[derive(Clone, PartialEq, Debug)]
pub struct VisitEditor {
    property_id: String,
    draft_comment: String,
    visit_confirmed: bool,
}

impl VisitEditor {
    /// Liga el editor a una propiedad. Reata el estado local: checkbox de
    /// visita apagado y borrador recargado desde el comentario guardado.
    pub fn bind(property: &Property) -> Self {
        Self {
            property_id: property.id.clone(),
            draft_comment: property.comentarios_cliente.clone().unwrap_or_default(),
            visit_confirmed: false,
        }
    }

    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    pub fn draft_comment(&self) -> &str {
        &self.draft_comment
    }

    pub fn visit_confirmed(&self) -> bool {
        self.visit_confirmed
    }

    /// Solo actualiza el borrador; no escribe al store
    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.draft_comment = text.into();
    }

    pub fn set_visit_confirmed(&mut self, confirmed: bool) {
        self.visit_confirmed = confirmed;
    }

    /// Construye el registro actualizado con status Visitada y el borrador
    /// de comentarios. Regresa `None` si la visita no fue confirmada o si
    /// el registro no es el que está ligado al editor.
    pub fn confirm_visit(&self, property: &Property) -> Option<Property> {
        if !self.visit_confirmed || property.id != self.property_id {
            return None;
        }
        let mut updated = property.clone();
        updated.status = PropertyStatus::Visitada;
        updated.comentarios_cliente = Some(self.draft_comment.clone());
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_properties;
    use crate::state::property_store::PropertyStore;

    fn pendiente() -> Property {
        seed_properties()
            .into_iter()
            .find(|p| p.status == PropertyStatus::Pendiente)
            .unwrap()
    }

    #[test]
    fn sin_confirmacion_no_hay_mutacion() {
        let prop = pendiente();
        let store = PropertyStore::with_seed();
        let before = store.all().to_vec();

        let mut editor = VisitEditor::bind(&prop);
        editor.set_comment("Intenté visitar pero no había nadie.");
        assert_eq!(editor.confirm_visit(&prop), None);
        assert_eq!(store.all(), &before[..]);
    }

    #[test]
    fn confirmar_transiciona_a_visitada_y_persiste_el_borrador() {
        let prop = pendiente();
        let mut store = PropertyStore::with_seed();

        let mut editor = VisitEditor::bind(&prop);
        editor.set_visit_confirmed(true);
        editor.set_comment("La fachada necesita pintura, interior en buen estado.");

        let updated = editor.confirm_visit(&prop).unwrap();
        store.update(updated).unwrap();

        let stored = store.get(&prop.id).unwrap();
        assert_eq!(stored.status, PropertyStatus::Visitada);
        assert_eq!(
            stored.comentarios_cliente.as_deref(),
            Some("La fachada necesita pintura, interior en buen estado.")
        );
    }

    #[test]
    fn confirmar_solo_aplica_al_registro_ligado() {
        let props = seed_properties();
        let mut editor = VisitEditor::bind(&props[0]);
        editor.set_visit_confirmed(true);

        assert_eq!(editor.property_id(), props[0].id);
        assert!(editor.confirm_visit(&props[1]).is_none());
        assert!(editor.confirm_visit(&props[0]).is_some());
    }

    #[test]
    fn religar_reata_el_borrador() {
        let props = seed_properties();
        let con_comentario = props
            .iter()
            .find(|p| p.comentarios_cliente.is_some())
            .unwrap();

        let mut editor = VisitEditor::bind(&props[0]);
        editor.set_visit_confirmed(true);
        editor.set_comment("borrador a medias");

        // Cambiar de propiedad descarta el borrador y apaga el checkbox
        let editor = VisitEditor::bind(con_comentario);
        assert!(!editor.visit_confirmed());
        assert_eq!(
            editor.draft_comment(),
            con_comentario.comentarios_cliente.as_deref().unwrap()
        );
    }
}
