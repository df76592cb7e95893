//! Edit workflow controller.
//!
//! Owns the draft and lifecycle of one open edit screen and mediates between
//! the presentation surface and the entity gateway.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use super::{
    DeleteConfirmation, DeleteOutcome, FieldView, SaveOutcome, Unavailable, WorkflowView,
};
use crate::workflow::{
    domain::{
        Capabilities, FieldErrors, FieldSpec, FormError, FormState, FormValues, Lifecycle,
        NavigationIntent, Notification, Provenance, Record, Resource, WorkflowInstanceId,
        WorkflowMode,
    },
    ports::{EntityGateway, FormSchema, GatewayError, NavigationSink, NotificationSink},
};

/// Parameter object bundling the collaborators of a workflow.
#[derive(Debug)]
pub struct WorkflowPorts<G, N, V> {
    /// Remote persistence boundary.
    pub gateway: Arc<G>,
    /// Receiver of success and failure notifications.
    pub notifier: Arc<N>,
    /// Receiver of navigation intents.
    pub navigator: Arc<V>,
}

impl<G, N, V> WorkflowPorts<G, N, V> {
    /// Bundles the three collaborators.
    #[must_use]
    pub const fn new(gateway: Arc<G>, notifier: Arc<N>, navigator: Arc<V>) -> Self {
        Self {
            gateway,
            notifier,
            navigator,
        }
    }
}

impl<G, N, V> Clone for WorkflowPorts<G, N, V> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            notifier: Arc::clone(&self.notifier),
            navigator: Arc::clone(&self.navigator),
        }
    }
}

struct WorkflowState<R: Resource> {
    mode: WorkflowMode<R::Id>,
    form: FormState,
    lifecycle: Lifecycle,
    provenance: Option<Provenance>,
}

/// Resets the lifecycle to idle once a gateway call has resolved, or when
/// the action future is dropped before it resolves.
struct InFlight<'a, R: Resource> {
    state: &'a Mutex<WorkflowState<R>>,
    armed: bool,
}

impl<'a, R: Resource> InFlight<'a, R> {
    const fn new(state: &'a Mutex<WorkflowState<R>>) -> Self {
        Self { state, armed: true }
    }

    fn complete(mut self, apply: impl FnOnce(&mut WorkflowState<R>)) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
        state.lifecycle = Lifecycle::Idle;
        self.armed = false;
    }
}

impl<R: Resource> Drop for InFlight<'_, R> {
    fn drop(&mut self) {
        if self.armed {
            self.state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .lifecycle = Lifecycle::Idle;
        }
    }
}

/// Single-entity create/edit/delete workflow.
///
/// All methods take `&self`; state lives behind a mutex that is never held
/// across the gateway call, so the presentation surface can keep reading
/// [`Self::view`] while a save or delete is in flight.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use backoffice::task::{domain::TaskResource, schema::TaskSchema};
/// use backoffice::workflow::{
///     adapters::memory::{InMemoryGateway, RecordingNavigationSink, RecordingNotificationSink},
///     domain::{ActorRef, Capabilities},
///     services::{EditWorkflow, SaveOutcome, WorkflowPorts},
/// };
/// use mockable::DefaultClock;
///
/// # tokio_test_block(async {
/// let gateway = InMemoryGateway::<TaskResource, _>::new(
///     TaskSchema::default(),
///     Arc::new(DefaultClock),
///     ActorRef::new("alice"),
/// );
/// let navigator = Arc::new(RecordingNavigationSink::new());
/// let workflow = EditWorkflow::for_create(
///     TaskSchema::default(),
///     Capabilities::all(),
///     WorkflowPorts::new(
///         Arc::new(gateway),
///         Arc::new(RecordingNotificationSink::new()),
///         Arc::clone(&navigator),
///     ),
/// );
/// workflow.set_field("title", "Ship report").expect("known field");
/// assert!(matches!(workflow.save().await, SaveOutcome::Created(_)));
/// assert_eq!(navigator.paths(), vec!["/tasks/1".to_owned()]);
/// # });
/// # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(f);
/// # }
/// ```
pub struct EditWorkflow<R, G, N, V>
where
    R: Resource,
{
    instance: WorkflowInstanceId,
    schema: R::Schema,
    capabilities: Capabilities,
    ports: WorkflowPorts<G, N, V>,
    state: Mutex<WorkflowState<R>>,
}

impl<R, G, N, V> EditWorkflow<R, G, N, V>
where
    R: Resource,
    G: EntityGateway<R>,
    N: NotificationSink,
    V: NavigationSink,
{
    /// Opens a creation-mode workflow seeded with the schema defaults.
    #[must_use]
    pub fn for_create(
        schema: R::Schema,
        capabilities: Capabilities,
        ports: WorkflowPorts<G, N, V>,
    ) -> Self {
        let values = schema.defaults();
        Self::open(schema, capabilities, ports, WorkflowMode::Create, values, None)
    }

    /// Opens an edit-mode workflow seeded from an existing record.
    #[must_use]
    pub fn for_edit(
        record: &Record<R>,
        schema: R::Schema,
        capabilities: Capabilities,
        ports: WorkflowPorts<G, N, V>,
    ) -> Self {
        let values = schema.to_values(record.fields());
        Self::open(
            schema,
            capabilities,
            ports,
            WorkflowMode::Edit(record.id().clone()),
            values,
            Some(record.provenance().clone()),
        )
    }

    fn open(
        schema: R::Schema,
        capabilities: Capabilities,
        ports: WorkflowPorts<G, N, V>,
        mode: WorkflowMode<R::Id>,
        values: FormValues,
        provenance: Option<Provenance>,
    ) -> Self {
        let instance = WorkflowInstanceId::new();
        debug!(
            %instance,
            resource = R::ROUTE,
            create = mode.is_create(),
            "workflow opened"
        );
        Self {
            instance,
            schema,
            capabilities,
            ports,
            state: Mutex::new(WorkflowState {
                mode,
                form: FormState::new(values),
                lifecycle: Lifecycle::Idle,
                provenance,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WorkflowState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the identifier used to correlate this instance's log events.
    #[must_use]
    pub const fn instance_id(&self) -> WorkflowInstanceId {
        self.instance
    }

    /// Returns the capability flags supplied at construction.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns the schema driving this form.
    #[must_use]
    pub const fn schema(&self) -> &R::Schema {
        &self.schema
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> WorkflowMode<R::Id> {
        self.lock().mode.clone()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lock().lifecycle
    }

    /// Returns a copy of the draft values.
    #[must_use]
    pub fn values(&self) -> FormValues {
        self.lock().form.values().clone()
    }

    /// Returns the errors of the last submission.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.lock().form.errors().clone()
    }

    /// Returns the binding of one field, or `None` for unknown names.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldView> {
        let spec = *self.schema.field(name)?;
        let state = self.lock();
        Some(Self::bind(&state, spec))
    }

    /// Writes one draft value.
    ///
    /// Errors from the last submission stay attached until the next save.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when the schema has no such field.
    pub fn set_field(&self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        if self.schema.field(name).is_none() {
            return Err(FormError::UnknownField(name.to_owned()));
        }
        self.lock().form.set_value(name, value);
        Ok(())
    }

    /// Returns a snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> WorkflowView<R::Id> {
        let state = self.lock();
        let fields = self
            .schema
            .fields()
            .iter()
            .map(|spec| Self::bind(&state, *spec))
            .collect();
        WorkflowView {
            mode: state.mode.clone(),
            lifecycle: state.lifecycle,
            fields,
            capabilities: self.capabilities,
            can_save: self.save_check(&state).is_ok(),
            can_delete: self.delete_check(&state).is_ok(),
            can_navigate_new: self.new_check(&state).is_ok(),
            provenance: state.provenance.clone(),
        }
    }

    fn bind(state: &WorkflowState<R>, spec: FieldSpec) -> FieldView {
        let name = spec.name();
        FieldView::new(
            spec,
            state.form.values().value(name).to_owned(),
            state.form.errors().get(name).map(str::to_owned),
        )
    }

    /// Returns whether Save is currently offered.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.save_check(&self.lock()).is_ok()
    }

    /// Returns whether Delete is currently offered.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.delete_check(&self.lock()).is_ok()
    }

    /// Returns whether the "new" shortcut is currently offered.
    #[must_use]
    pub fn can_navigate_new(&self) -> bool {
        self.new_check(&self.lock()).is_ok()
    }

    const fn save_check(&self, state: &WorkflowState<R>) -> Result<(), Unavailable> {
        let permitted = match state.mode {
            WorkflowMode::Create => self.capabilities.can_create(),
            WorkflowMode::Edit(_) => self.capabilities.can_update(),
        };
        if !permitted {
            return Err(Unavailable::NotPermitted);
        }
        if !state.lifecycle.is_idle() {
            return Err(Unavailable::Busy);
        }
        Ok(())
    }

    fn delete_check(&self, state: &WorkflowState<R>) -> Result<R::Id, Unavailable> {
        let WorkflowMode::Edit(id) = &state.mode else {
            return Err(Unavailable::CreationMode);
        };
        if !self.capabilities.can_delete() {
            return Err(Unavailable::NotPermitted);
        }
        if !state.lifecycle.is_idle() {
            return Err(Unavailable::Busy);
        }
        Ok(id.clone())
    }

    const fn new_check(&self, state: &WorkflowState<R>) -> Result<(), Unavailable> {
        if state.mode.is_create() {
            return Err(Unavailable::CreationMode);
        }
        if !self.capabilities.can_create() {
            return Err(Unavailable::NotPermitted);
        }
        Ok(())
    }

    /// Validates the draft and persists it.
    ///
    /// In creation mode a successful save navigates to the new record's
    /// detail view and the workflow switches to edit mode for the returned
    /// identity. In edit mode a successful save stays on the view. Every
    /// gateway outcome emits exactly one notification, and the lifecycle is
    /// idle again when this returns.
    pub async fn save(&self) -> SaveOutcome<R::Id> {
        let (mode, fields, in_flight) = match self.begin_save() {
            Ok(prepared) => prepared,
            Err(outcome) => return outcome,
        };
        debug!(instance = %self.instance, resource = R::ROUTE, "save started");

        let result = match &mode {
            WorkflowMode::Create => self.ports.gateway.create(&fields).await.map(Some),
            WorkflowMode::Edit(id) => self.ports.gateway.update(id, &fields).await.map(|()| None),
        };

        match result {
            Ok(Some(id)) => {
                in_flight.complete(|state| state.mode = WorkflowMode::Edit(id.clone()));
                info!(instance = %self.instance, resource = R::ROUTE, %id, "record created");
                self.ports
                    .notifier
                    .notify(Notification::success(format!("{} created", R::LABEL)));
                self.ports.navigator.navigate(NavigationIntent::detail::<R>(&id));
                SaveOutcome::Created(id)
            }
            Ok(None) => {
                in_flight.complete(|_| ());
                info!(instance = %self.instance, resource = R::ROUTE, "record updated");
                self.ports
                    .notifier
                    .notify(Notification::success(format!("{} updated", R::LABEL)));
                SaveOutcome::Updated
            }
            Err(err) => {
                in_flight.complete(|_| ());
                self.report_failure("save", &err);
                SaveOutcome::Failed(err)
            }
        }
    }

    fn begin_save(
        &self,
    ) -> Result<(WorkflowMode<R::Id>, R::Fields, InFlight<'_, R>), SaveOutcome<R::Id>> {
        let mut state = self.lock();
        self.save_check(&state).map_err(SaveOutcome::Unavailable)?;

        match self.schema.validate(state.form.values()) {
            Ok(fields) => {
                state.form.clear_errors();
                state.lifecycle = Lifecycle::Saving;
                Ok((state.mode.clone(), fields, InFlight::new(&self.state)))
            }
            Err(errors) => {
                debug!(
                    instance = %self.instance,
                    resource = R::ROUTE,
                    invalid_fields = errors.len(),
                    "save rejected by validation"
                );
                state.form.replace_errors(errors.clone());
                Err(SaveOutcome::Rejected(errors))
            }
        }
    }

    /// Opens the delete confirmation step.
    ///
    /// # Errors
    ///
    /// Returns [`Unavailable`] in creation mode, without `can_delete`, or
    /// while another action is in flight.
    pub fn request_delete(&self) -> Result<DeleteConfirmation<R>, Unavailable> {
        let id = self.delete_check(&self.lock())?;
        Ok(DeleteConfirmation::new(id))
    }

    /// Deletes the record after the user accepted the confirmation.
    ///
    /// A successful delete navigates to the collection view; a failed one
    /// stays on the view. Every gateway outcome emits exactly one
    /// notification, and the lifecycle is idle again when this returns.
    pub async fn confirm_delete(&self, confirmation: DeleteConfirmation<R>) -> DeleteOutcome {
        let (id, in_flight) = match self.begin_delete(&confirmation) {
            Ok(prepared) => prepared,
            Err(reason) => return DeleteOutcome::Unavailable(reason),
        };
        debug!(instance = %self.instance, resource = R::ROUTE, %id, "delete started");

        let result = self.ports.gateway.delete(&id).await;
        in_flight.complete(|_| ());

        match result {
            Ok(()) => {
                info!(instance = %self.instance, resource = R::ROUTE, %id, "record deleted");
                self.ports
                    .notifier
                    .notify(Notification::success(format!("{} deleted", R::LABEL)));
                self.ports.navigator.navigate(NavigationIntent::list::<R>());
                DeleteOutcome::Deleted
            }
            Err(err) => {
                self.report_failure("delete", &err);
                DeleteOutcome::Failed(err)
            }
        }
    }

    fn begin_delete(
        &self,
        confirmation: &DeleteConfirmation<R>,
    ) -> Result<(R::Id, InFlight<'_, R>), Unavailable> {
        let mut state = self.lock();
        let id = self.delete_check(&state)?;
        if &id != confirmation.id() {
            return Err(Unavailable::StaleConfirmation);
        }
        state.lifecycle = Lifecycle::Deleting;
        Ok((id, InFlight::new(&self.state)))
    }

    /// Navigates to a fresh creation form. Unsaved edits are abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`Unavailable`] in creation mode or without `can_create`.
    pub fn navigate_new(&self) -> Result<(), Unavailable> {
        self.new_check(&self.lock())?;
        self.ports.navigator.navigate(NavigationIntent::create::<R>());
        Ok(())
    }

    /// Navigates back one step. Always available.
    pub fn back(&self) {
        self.ports.navigator.navigate(NavigationIntent::Back);
    }

    fn report_failure(&self, action: &str, err: &GatewayError) {
        warn!(
            instance = %self.instance,
            resource = R::ROUTE,
            action,
            error = %err,
            "gateway call failed"
        );
        let title = format!("Could not {action} {}", R::LABEL.to_lowercase());
        self.ports
            .notifier
            .notify(Notification::failure(title).with_description(err.to_string()));
    }
}
