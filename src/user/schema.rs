//! Validation schema for the user form.

use crate::user::domain::{UserFields, UserRole};
use crate::workflow::{
    domain::{FieldErrors, FieldKind, FieldSpec, FormValues},
    ports::{FormSchema, SchemaResult, ValidationConfig},
    validation::rules,
};

/// Field key of the display name.
pub const NAME: &str = "name";
/// Field key of the e-mail address.
pub const EMAIL: &str = "email";
/// Field key of the role.
pub const ROLE: &str = "role";

const FIELDS: [FieldSpec; 3] = [
    FieldSpec::required(NAME, "Name", FieldKind::Text),
    FieldSpec::required(EMAIL, "E-mail", FieldKind::Email),
    FieldSpec::required(ROLE, "Role", FieldKind::Choice(UserRole::NAMES)),
];

/// User form schema: name and e-mail required, role from [`UserRole`].
#[derive(Debug, Clone, Default)]
pub struct UserSchema {
    config: ValidationConfig,
}

impl UserSchema {
    /// Creates a schema with custom limits.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl FormSchema for UserSchema {
    type Output = UserFields;

    fn fields(&self) -> &[FieldSpec] {
        &FIELDS
    }

    fn defaults(&self) -> FormValues {
        FormValues::new()
            .with(NAME, "")
            .with(EMAIL, "")
            .with(ROLE, UserRole::default().as_str())
    }

    fn validate(&self, values: &FormValues) -> SchemaResult<UserFields> {
        let mut errors = FieldErrors::new();
        let name = errors.capture(
            NAME,
            rules::required_text(values.value(NAME), "Name", &self.config),
        );
        let email = errors.capture(
            EMAIL,
            rules::email_address(values.value(EMAIL), "E-mail", &self.config),
        );
        let role = errors.capture(
            ROLE,
            rules::one_of::<UserRole>(values.value(ROLE), "Role", UserRole::NAMES),
        );

        let (Some(valid_name), Some(valid_email), Some(valid_role)) = (name, email, role) else {
            return Err(errors);
        };

        UserFields::new(valid_name, valid_email, valid_role).map_err(|err| {
            let mut domain_errors = FieldErrors::new();
            domain_errors.insert(NAME, err.to_string());
            domain_errors
        })
    }

    fn to_values(&self, output: &UserFields) -> FormValues {
        FormValues::new()
            .with(NAME, output.name())
            .with(EMAIL, output.email())
            .with(ROLE, output.role().as_str())
    }
}
