use serde::Deserialize;
use thiserror::Error;

/// Request body for creating or updating a user. Both operations
/// take the same three fields.
#[derive(Debug, Deserialize)]
pub struct UsuarioForm {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
}

/// `nombre` or `email` is missing or blank.
#[derive(Debug, Error)]
#[error("nombre and email are required")]
pub struct MissingFieldsError;

/// Borrowed view of a [`UsuarioForm`] that passed presence
/// validation: `nombre` and `email` are non-blank, and a blank
/// `telefono` has been normalized to `None`.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidUsuario<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub telefono: Option<&'a str>,
}

impl UsuarioForm {
    pub fn validate(&self) -> Result<ValidUsuario<'_>, MissingFieldsError> {
        let nombre = non_blank(self.nombre.as_deref()).ok_or(MissingFieldsError)?;
        let email = non_blank(self.email.as_deref()).ok_or(MissingFieldsError)?;

        Ok(ValidUsuario {
            nombre,
            email,
            telefono: non_blank(self.telefono.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(nombre: Option<&str>, email: Option<&str>, telefono: Option<&str>) -> UsuarioForm {
        UsuarioForm {
            nombre: nombre.map(str::to_string),
            email: email.map(str::to_string),
            telefono: telefono.map(str::to_string),
        }
    }

    #[test]
    fn rejects_missing_or_blank_required_fields() {
        assert!(form(None, Some("ana@example.com"), None).validate().is_err());
        assert!(form(Some("Ana"), None, None).validate().is_err());
        assert!(form(Some(""), Some("ana@example.com"), None)
            .validate()
            .is_err());
        assert!(form(Some("Ana"), Some("   "), None).validate().is_err());
    }

    #[test]
    fn accepts_valid_forms() {
        let form = form(Some("Ana"), Some("ana@example.com"), Some("555-0199"));
        let valid = form.validate().unwrap();
        assert_eq!(
            valid,
            ValidUsuario {
                nombre: "Ana",
                email: "ana@example.com",
                telefono: Some("555-0199"),
            }
        );
    }

    #[test]
    fn blank_telefono_normalizes_to_none() {
        let absent = form(Some("Ana"), Some("ana@example.com"), None);
        assert_eq!(absent.validate().unwrap().telefono, None);

        let blank = form(Some("Ana"), Some("ana@example.com"), Some(""));
        assert_eq!(blank.validate().unwrap().telefono, None);
    }
}
