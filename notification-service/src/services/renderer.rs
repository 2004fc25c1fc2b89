//! Subject and body selection for each notification type.
//!
//! Templates read a couple of named fields out of the request payload and
//! substitute defaults when a field is missing or not a string. A payload
//! that is absent or not a JSON object never fails rendering; each template
//! has a plain fallback sentence for that case.

use crate::models::NotificationKind;
use serde_json::{Map, Value};

pub const WELCOME_SUBJECT: &str = "¡Bienvenido al Sistema de Empleados!";
pub const EMPLOYEE_CREATED_SUBJECT: &str = "Nuevo Empleado Registrado";
pub const EMPLOYEE_UPDATED_SUBJECT: &str = "Información de Empleado Actualizada";

pub const GENERIC_BODY: &str = "Notificación del Sistema de Empleados";
pub const WELCOME_FALLBACK_BODY: &str = "¡Gracias por suscribirte a nuestro boletín informativo!";
pub const EMPLOYEE_CREATED_FALLBACK_BODY: &str =
    "Un nuevo empleado ha sido registrado en el sistema.";
pub const EMPLOYEE_UPDATED_FALLBACK_BODY: &str =
    "La información de un empleado ha sido actualizada.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

/// Renders the message for `kind`. A non-empty `subject` overrides the
/// template's default subject; for unknown kinds it is passed through as is,
/// even when empty.
pub fn render(kind: NotificationKind, subject: &str, data: Option<&Value>) -> RenderedMessage {
    let fields = data.and_then(Value::as_object);

    let (default_subject, body) = match kind {
        NotificationKind::Welcome => (WELCOME_SUBJECT, welcome_body(fields)),
        NotificationKind::EmployeeCreated => {
            (EMPLOYEE_CREATED_SUBJECT, employee_created_body(fields))
        }
        NotificationKind::EmployeeUpdated => {
            (EMPLOYEE_UPDATED_SUBJECT, employee_updated_body(fields))
        }
        NotificationKind::Other => {
            return RenderedMessage {
                subject: subject.to_string(),
                body: GENERIC_BODY.to_string(),
            };
        }
    };

    let subject = if subject.is_empty() {
        default_subject
    } else {
        subject
    };

    RenderedMessage {
        subject: subject.to_string(),
        body,
    }
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str, default: &'a str) -> &'a str {
    fields.get(key).and_then(Value::as_str).unwrap_or(default)
}

fn welcome_body(fields: Option<&Map<String, Value>>) -> String {
    let Some(fields) = fields else {
        return WELCOME_FALLBACK_BODY.to_string();
    };
    let name = text_field(fields, "nombre_completo", "Usuario");

    format!(
        "
Hola {name},

¡Gracias por suscribirte a nuestro boletín informativo!

Recibirás actualizaciones importantes sobre:
- Nuevas oportunidades laborales
- Eventos de la empresa
- Noticias del sector

¡Bienvenido a bordo!

Saludos,
El equipo del Sistema de Empleados
"
    )
}

fn employee_created_body(fields: Option<&Map<String, Value>>) -> String {
    let Some(fields) = fields else {
        return EMPLOYEE_CREATED_FALLBACK_BODY.to_string();
    };
    let name = text_field(fields, "nombre_completo", "Empleado");
    let area = text_field(fields, "area", "N/A");

    format!(
        "
Nuevo empleado registrado:

Nombre: {name}
Área: {area}

El empleado ha sido añadido exitosamente al sistema.

Saludos,
Sistema de Empleados
"
    )
}

fn employee_updated_body(fields: Option<&Map<String, Value>>) -> String {
    let Some(fields) = fields else {
        return EMPLOYEE_UPDATED_FALLBACK_BODY.to_string();
    };
    let name = text_field(fields, "nombre_completo", "Empleado");

    format!(
        "
Información actualizada:

El perfil de {name} ha sido modificado en el sistema.

Saludos,
Sistema de Empleados
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn welcome_uses_default_subject_and_name() {
        let data = json!({ "nombre_completo": "Ana" });
        let message = render(NotificationKind::Welcome, "", Some(&data));

        assert_eq!(message.subject, WELCOME_SUBJECT);
        assert!(message.body.contains("Hola Ana,"));
        assert!(message.body.contains("Noticias del sector"));
    }

    #[test]
    fn welcome_without_data_uses_boilerplate() {
        let message = render(NotificationKind::Welcome, "", None);

        assert_eq!(message.subject, WELCOME_SUBJECT);
        assert_eq!(message.body, WELCOME_FALLBACK_BODY);
    }

    #[test]
    fn welcome_with_non_object_data_uses_boilerplate() {
        let data = json!(["Ana"]);
        let message = render(NotificationKind::Welcome, "", Some(&data));

        assert_eq!(message.body, WELCOME_FALLBACK_BODY);
    }

    #[test]
    fn welcome_defaults_name_when_not_a_string() {
        let data = json!({ "nombre_completo": 42 });
        let message = render(NotificationKind::Welcome, "", Some(&data));

        assert!(message.body.contains("Hola Usuario,"));
    }

    #[test]
    fn override_subject_wins_for_known_kinds() {
        let data = json!({});
        for kind in [
            NotificationKind::Welcome,
            NotificationKind::EmployeeCreated,
            NotificationKind::EmployeeUpdated,
        ] {
            let message = render(kind, "Asunto propio", Some(&data));
            assert_eq!(message.subject, "Asunto propio");
        }
    }

    #[test]
    fn employee_created_lists_name_and_area() {
        let data = json!({ "nombre_completo": "Luis Pérez", "area": "Ventas", "sexo": "M" });
        let message = render(NotificationKind::EmployeeCreated, "", Some(&data));

        assert_eq!(message.subject, EMPLOYEE_CREATED_SUBJECT);
        assert!(message.body.contains("Nombre: Luis Pérez"));
        assert!(message.body.contains("Área: Ventas"));
    }

    #[test]
    fn employee_created_defaults_missing_fields() {
        let data = json!({ "area": null });
        let message = render(NotificationKind::EmployeeCreated, "", Some(&data));

        assert!(message.body.contains("Nombre: Empleado"));
        assert!(message.body.contains("Área: N/A"));
    }

    #[test]
    fn employee_created_without_data_uses_generic_sentence() {
        let message = render(NotificationKind::EmployeeCreated, "", None);

        assert_eq!(message.body, EMPLOYEE_CREATED_FALLBACK_BODY);
    }

    #[test]
    fn employee_updated_names_profile() {
        let data = json!({ "nombre_completo": "Marta" });
        let message = render(NotificationKind::EmployeeUpdated, "", Some(&data));

        assert_eq!(message.subject, EMPLOYEE_UPDATED_SUBJECT);
        assert!(message.body.contains("El perfil de Marta ha sido modificado"));

        let fallback = render(NotificationKind::EmployeeUpdated, "", Some(&json!("Marta")));
        assert_eq!(fallback.body, EMPLOYEE_UPDATED_FALLBACK_BODY);
    }

    #[test]
    fn unknown_kind_passes_subject_through() {
        let data = json!({ "nombre_completo": "Ana" });
        let message = render(NotificationKind::Other, "Custom", Some(&data));

        assert_eq!(message.subject, "Custom");
        assert_eq!(message.body, GENERIC_BODY);

        let empty = render(NotificationKind::Other, "", None);
        assert_eq!(empty.subject, "");
        assert_eq!(empty.body, GENERIC_BODY);
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let data = json!({ "nombre_completo": "<b>Ana</b>\n" });
        let message = render(NotificationKind::Welcome, "", Some(&data));

        assert!(message.body.contains("Hola <b>Ana</b>\n,"));
    }
}
