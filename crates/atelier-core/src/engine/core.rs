//! Core WizardController implementation

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::draft::{FieldPath, FieldValue, ProfileDraft};
use crate::engine::{AdvanceOutcome, TeardownHandle, WizardBuilder, WizardState};
use crate::errors::WizardError;
use crate::event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
use crate::hashing::fingerprint;
use crate::registry::{StepDescriptor, StepRegistry};
use crate::submission::{ProfileSubmitter, SubmissionPipeline, SubmitOutcome};
use crate::validation::{validate, ErrorMap};

/// Controlador del wizard.
///
/// Orquesta el step actual, los steps completados, la suspensión de las
/// transiciones y el gating hacia adelante. Compone el borrador, el registro
/// de steps, la validación y el log de eventos.
///
/// Todas las operaciones se ejecutan de a una (`&mut self`); la única
/// concurrencia posible es el desmontaje vía `TeardownHandle` durante la
/// suspensión de `advance`.
pub struct WizardController<E: EventStore = InMemoryEventStore> {
    pub(crate) registry: Arc<StepRegistry>,
    pub(crate) draft: ProfileDraft,
    pub(crate) state: WizardState,
    pub(crate) pending: Option<u32>,
    pub(crate) event_store: E,
    pub(crate) session_id: Uuid,
    pub(crate) transition_delay: Duration,
    pub(crate) teardown: TeardownHandle,
}

impl WizardController<InMemoryEventStore> {
    /// Crea un builder con store de eventos en memoria.
    pub fn builder(registry: impl Into<Arc<StepRegistry>>) -> WizardBuilder<InMemoryEventStore> {
        WizardBuilder::new(registry.into())
    }
}

impl<E: EventStore> WizardController<E> {
    // ------------------------------------------------------------------
    // Lectura
    // ------------------------------------------------------------------

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> u32 {
        self.state.current_step
    }

    pub fn current_descriptor(&self) -> Option<&StepDescriptor> {
        self.registry.step(self.state.current_step)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.state.errors
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Consume el controlador y devuelve el borrador y el store de eventos
    /// (para reanudar la sesión en otro controlador).
    pub fn into_parts(self) -> (ProfileDraft, E) {
        (self.draft, self.event_store)
    }

    /// Eventos de esta sesión.
    pub fn events(&self) -> Vec<WizardEvent> {
        self.event_store.list(self.session_id)
    }

    pub fn field(&self, path: &str) -> Option<&FieldValue> {
        self.draft.get_str(path)
    }

    pub fn is_final_step(&self) -> bool {
        self.state.current_step == self.registry.step_count()
    }

    pub fn is_reachable(&self, step_id: u32) -> bool {
        self.registry.contains(step_id) && self.state.is_reachable(step_id)
    }

    /// Ids de los steps clicables en la lista de steps.
    pub fn reachable_steps(&self) -> Vec<u32> {
        (1..=self.registry.step_count()).filter(|id| self.state.is_reachable(*id)).collect()
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.teardown.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_torn_down()
    }

    // ------------------------------------------------------------------
    // Mutación
    // ------------------------------------------------------------------

    /// Desmonta el wizard: descarta transiciones pendientes y rechaza nuevas
    /// operaciones.
    pub fn teardown(&self) {
        self.teardown.teardown();
    }

    fn ensure_mounted(&self) -> Result<(), WizardError> {
        if self.teardown.is_torn_down() {
            return Err(WizardError::TornDown);
        }
        Ok(())
    }

    fn record(&mut self, kind: WizardEventKind) {
        let _ = self.event_store.append_kind(self.session_id, kind);
    }

    /// Escribe un campo del borrador.
    ///
    /// Borra el error registrado para exactamente ese path; no re-ejecuta la
    /// validación (eso sólo ocurre al pedir avanzar).
    pub fn update_field(&mut self, path: &str, value: impl Into<FieldValue>) -> Result<(), WizardError> {
        let path = FieldPath::parse(path)?;
        self.update_field_at(&path, value.into())
    }

    pub fn update_field_at(&mut self, path: &FieldPath, value: FieldValue) -> Result<(), WizardError> {
        self.ensure_mounted()?;
        self.draft.set(path, value)?;
        let key = path.to_string();
        if self.state.errors.remove(&key).is_some() {
            debug!("cleared stale error for '{key}'");
        }
        debug!("field '{key}' updated on step {}", self.state.current_step);
        self.record(WizardEventKind::FieldUpdated { path: key });
        Ok(())
    }

    /// Primera mitad de una navegación: gating + inicio de la transición.
    ///
    /// - destino fuera de `1..=N` → `Err(UnknownStep)`;
    /// - transición ya pendiente → `Ignored`;
    /// - destino igual al actual → `Unchanged`;
    /// - hacia adelante valida el step actual: con errores → `Blocked`, sin
    ///   errores lo marca completado;
    /// - hacia atrás nunca valida.
    ///
    /// En los dos últimos casos limpia los errores, marca `is_transitioning`
    /// y devuelve `Pending`.
    pub fn begin_advance(&mut self, target: u32) -> Result<AdvanceOutcome, WizardError> {
        self.ensure_mounted()?;
        if !self.registry.contains(target) {
            return Err(WizardError::UnknownStep(target));
        }
        if self.pending.is_some() {
            debug!("navigation to step {target} ignored: transition in progress");
            return Ok(AdvanceOutcome::Ignored);
        }

        let from = self.state.current_step;
        if target == from {
            return Ok(AdvanceOutcome::Unchanged);
        }

        if target > from {
            let errors = validate(&self.registry, from, &self.draft)?;
            if !errors.is_empty() {
                warn!("step {from} of '{}' blocked: {} invalid field(s)",
                      self.registry.profile(),
                      errors.len());
                self.record(WizardEventKind::StepBlocked { step_id: from,
                                                           fields: errors.paths().map(str::to_string).collect() });
                self.state.errors = errors.clone();
                return Ok(AdvanceOutcome::Blocked(errors));
            }
            self.mark_completed(from);
        }

        self.state.errors.clear();
        self.state.is_transitioning = true;
        self.pending = Some(target);
        self.record(WizardEventKind::TransitionStarted { from, to: target });
        Ok(AdvanceOutcome::Pending { from, to: target })
    }

    /// Segunda mitad de una navegación: aplica el destino pendiente.
    ///
    /// Si el wizard fue desmontado mientras tanto, el commit se descarta y el
    /// estado no se toca.
    pub fn commit_transition(&mut self) -> Result<AdvanceOutcome, WizardError> {
        let target = self.pending.take().ok_or(WizardError::NoPendingTransition)?;
        if self.teardown.is_torn_down() {
            debug!("transition to step {target} discarded after teardown");
            self.record(WizardEventKind::TransitionDiscarded { step_id: target });
            return Ok(AdvanceOutcome::Discarded { to: target });
        }
        let from = self.state.current_step;
        self.state.current_step = target;
        self.state.is_transitioning = false;
        self.record(WizardEventKind::TransitionCommitted { step_id: target });
        debug!("moved from step {from} to step {target}");
        Ok(AdvanceOutcome::Moved { from, to: target })
    }

    /// Abandona la transición pendiente sin mover el step actual.
    ///
    /// Devuelve el destino descartado, o `None` si no había transición.
    pub fn cancel_transition(&mut self) -> Option<u32> {
        let target = self.pending.take()?;
        self.state.is_transitioning = false;
        debug!("transition to step {target} cancelled");
        self.record(WizardEventKind::TransitionDiscarded { step_id: target });
        Some(target)
    }

    /// Navega a `target`: gating, suspensión fija y commit.
    ///
    /// Si el future se descarta durante la suspensión, la transición se
    /// cancela y el wizard puede volver a navegar.
    pub async fn advance(&mut self, target: u32) -> Result<AdvanceOutcome, WizardError> {
        let outcome = self.begin_advance(target)?;
        if !matches!(outcome, AdvanceOutcome::Pending { .. }) {
            return Ok(outcome);
        }
        let delay = self.transition_delay;
        let guard = PendingTransition { wizard: self,
                                        settled: false };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        guard.commit()
    }

    /// `advance(current + 1)`. En el último step es un uso incorrecto: allí
    /// la acción terminal es `complete`.
    pub async fn next(&mut self) -> Result<AdvanceOutcome, WizardError> {
        let target = self.state.current_step + 1;
        self.advance(target).await
    }

    /// `advance(current - 1)`. Nunca valida; en el primer step es un no-op.
    pub async fn prev(&mut self) -> Result<AdvanceOutcome, WizardError> {
        if self.state.current_step <= 1 {
            return Ok(AdvanceOutcome::Unchanged);
        }
        let target = self.state.current_step - 1;
        self.advance(target).await
    }

    /// Salto desde la lista de steps: sólo a steps alcanzables. Un step no
    /// alcanzable se trata como no-op (`Unchanged`).
    pub async fn jump_to(&mut self, step_id: u32) -> Result<AdvanceOutcome, WizardError> {
        if !self.registry.contains(step_id) {
            return Err(WizardError::UnknownStep(step_id));
        }
        if !self.state.is_reachable(step_id) {
            debug!("step {step_id} is not reachable yet");
            return Ok(AdvanceOutcome::Unchanged);
        }
        self.advance(step_id).await
    }

    fn mark_completed(&mut self, step_id: u32) {
        if self.state.completed_steps.insert(step_id) {
            info!("step {step_id} of '{}' completed", self.registry.profile());
            self.record(WizardEventKind::StepCompleted { step_id });
        }
    }

    /// Acción terminal del último step: valida el step final y, si pasa,
    /// entrega el borrador completo al pipeline de envío.
    ///
    /// Un fallo de envío deja el wizard en el último step con todos los datos
    /// para reintentar.
    pub async fn complete<S: ProfileSubmitter>(&mut self,
                                               pipeline: &SubmissionPipeline<S>)
                                               -> Result<SubmitOutcome, WizardError> {
        self.ensure_mounted()?;
        let last = self.registry.step_count();
        if self.state.current_step != last {
            return Err(WizardError::NotOnFinalStep { current: self.state.current_step,
                                                     last });
        }
        if self.pending.is_some() {
            debug!("complete ignored: transition in progress");
            return Ok(SubmitOutcome::Ignored);
        }
        if pipeline.is_completed() {
            return Ok(SubmitOutcome::AlreadyCompleted);
        }
        if pipeline.is_submitting() {
            return Ok(SubmitOutcome::AlreadySubmitting);
        }

        let errors = validate(&self.registry, last, &self.draft)?;
        if !errors.is_empty() {
            warn!("final step of '{}' blocked: {} invalid field(s)",
                  self.registry.profile(),
                  errors.len());
            self.record(WizardEventKind::StepBlocked { step_id: last,
                                                       fields: errors.paths().map(str::to_string).collect() });
            self.state.errors = errors.clone();
            return Ok(SubmitOutcome::Blocked(errors));
        }
        self.state.errors.clear();
        self.mark_completed(last);

        let draft_fingerprint = fingerprint(&self.draft)?;
        self.record(WizardEventKind::SubmissionRequested { draft_fingerprint });
        info!("submitting '{}' profile", self.registry.profile());
        Ok(pipeline.submit(&self.draft).await)
    }
}

/// Transición en curso dentro de `advance`. Al soltarse sin commit (future
/// cancelado) limpia `pending` e `is_transitioning`.
struct PendingTransition<'a, E: EventStore> {
    wizard: &'a mut WizardController<E>,
    settled: bool,
}

impl<E: EventStore> PendingTransition<'_, E> {
    fn commit(mut self) -> Result<AdvanceOutcome, WizardError> {
        self.settled = true;
        self.wizard.commit_transition()
    }
}

impl<E: EventStore> Drop for PendingTransition<'_, E> {
    fn drop(&mut self) {
        if !self.settled {
            self.wizard.cancel_transition();
        }
    }
}
