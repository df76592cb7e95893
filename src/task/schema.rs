//! Validation schema for the task form.

use crate::task::domain::{TaskFields, TaskStatus};
use crate::workflow::{
    domain::{FieldErrors, FieldKind, FieldSpec, FormValues},
    ports::{FormSchema, SchemaResult, ValidationConfig},
    validation::rules,
};

/// Field key of the task title.
pub const TITLE: &str = "title";
/// Field key of the task status.
pub const STATUS: &str = "status";
/// Field key of the task description.
pub const DESCRIPTION: &str = "description";

const FIELDS: [FieldSpec; 3] = [
    FieldSpec::required(TITLE, "Title", FieldKind::Text),
    FieldSpec::required(STATUS, "Status", FieldKind::Choice(TaskStatus::NAMES)),
    FieldSpec::optional(DESCRIPTION, "Description", FieldKind::TextArea),
];

/// Task form schema: title required, status from [`TaskStatus`],
/// description optional.
///
/// # Examples
///
/// ```
/// use backoffice::task::schema::TaskSchema;
/// use backoffice::workflow::{domain::FormValues, ports::FormSchema};
///
/// let schema = TaskSchema::default();
/// let errors = schema
///     .validate(&FormValues::new().with("title", "").with("status", "Todo"))
///     .expect_err("blank title is rejected");
/// assert_eq!(errors.get("title"), Some("Title is required"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskSchema {
    config: ValidationConfig,
}

impl TaskSchema {
    /// Creates a schema with custom limits.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl FormSchema for TaskSchema {
    type Output = TaskFields;

    fn fields(&self) -> &[FieldSpec] {
        &FIELDS
    }

    fn defaults(&self) -> FormValues {
        FormValues::new()
            .with(TITLE, "")
            .with(STATUS, TaskStatus::default().as_str())
            .with(DESCRIPTION, "")
    }

    fn validate(&self, values: &FormValues) -> SchemaResult<TaskFields> {
        let mut errors = FieldErrors::new();
        let title = errors.capture(
            TITLE,
            rules::required_text(values.value(TITLE), "Title", &self.config),
        );
        let status = errors.capture(
            STATUS,
            rules::one_of::<TaskStatus>(values.value(STATUS), "Status", TaskStatus::NAMES),
        );
        let description = rules::free_text(values.value(DESCRIPTION));

        let (Some(valid_title), Some(valid_status)) = (title, status) else {
            return Err(errors);
        };

        let fields = TaskFields::new(valid_title, valid_status).map_err(|err| {
            let mut domain_errors = FieldErrors::new();
            domain_errors.insert(TITLE, err.to_string());
            domain_errors
        })?;
        Ok(match description {
            Some(text) => fields.with_description(text),
            None => fields,
        })
    }

    fn to_values(&self, output: &TaskFields) -> FormValues {
        FormValues::new()
            .with(TITLE, output.title())
            .with(STATUS, output.status().as_str())
            .with(DESCRIPTION, output.description().unwrap_or_default())
    }
}
