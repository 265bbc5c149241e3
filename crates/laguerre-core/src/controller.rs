//! The polynomial display controller.

use std::time::{Duration, Instant};

use laguerre_format::DisplayContent;
use laguerre_model::{LargeComputationWarning, PolynomialRequest, StudioConfig, StudioError};
use tracing::{debug, info, warn};

use crate::clipboard::{Clipboard, ClipboardFeedback, CopyStatus};
use crate::evaluator::Evaluator;
use crate::notice::Notice;
use crate::render::{Canvas, Rendered, render};
use crate::state::{DisplayState, PolynomialResult};
use crate::validate::{Validated, validate};
use crate::zoom;

/// What a generate request led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The polynomial was evaluated and is on the canvas.
    Generated(PolynomialRequest),
    /// Parked until [`Controller::confirm_pending`] or
    /// [`Controller::cancel_pending`].
    NeedsConfirmation(LargeComputationWarning),
    /// Nothing changed; a notice explains why.
    Rejected,
}

/// Owns the display state and mediates every user action.
pub struct Controller<E, C, K> {
    config: StudioConfig,
    evaluator: E,
    canvas: C,
    clipboard: K,
    state: DisplayState,
    feedback: ClipboardFeedback,
    pending: Option<(PolynomialRequest, LargeComputationWarning)>,
    last_render: Option<Rendered>,
    notices: Vec<Notice>,
}

impl<E, C, K> Controller<E, C, K>
where
    E: Evaluator,
    C: Canvas,
    K: Clipboard,
{
    /// Build a controller and draw the defining formula.
    pub fn new(config: StudioConfig, evaluator: E, canvas: C, clipboard: K) -> Self {
        let state = DisplayState::initial(config.display.default_font_size);
        let feedback = ClipboardFeedback::new(&config.clipboard);
        let mut controller = Self {
            config,
            evaluator,
            canvas,
            clipboard,
            state,
            feedback,
            pending: None,
            last_render: None,
            notices: Vec::new(),
        };
        controller.rerender();
        controller
    }

    /// Validate raw input and, unless the gate fires, evaluate and show it.
    pub fn generate(&mut self, n_text: &str, l_text: &str) -> GenerateOutcome {
        self.pending = None;
        match validate(n_text, l_text, &self.config.validation) {
            Ok(Validated::Ready(request)) => self.evaluate_and_show(request),
            Ok(Validated::NeedsConfirmation { request, warning }) => {
                info!(
                    %request,
                    parameter = %warning.parameter,
                    value = warning.value,
                    "large computation needs confirmation"
                );
                self.pending = Some((request, warning));
                GenerateOutcome::NeedsConfirmation(warning)
            }
            Err(error) => {
                self.report(&error);
                GenerateOutcome::Rejected
            }
        }
    }

    pub fn pending(&self) -> Option<&LargeComputationWarning> {
        self.pending.as_ref().map(|(_, warning)| warning)
    }

    /// Run the parked request. `Rejected` when nothing was parked.
    pub fn confirm_pending(&mut self) -> GenerateOutcome {
        match self.pending.take() {
            Some((request, _)) => self.evaluate_and_show(request),
            None => GenerateOutcome::Rejected,
        }
    }

    /// Drop the parked request without evaluating it.
    pub fn cancel_pending(&mut self) {
        if let Some((request, _)) = self.pending.take() {
            debug!(%request, "large computation cancelled");
        }
    }

    fn evaluate_and_show(&mut self, request: PolynomialRequest) -> GenerateOutcome {
        let raw = match self.evaluator.evaluate(request) {
            Ok(raw) => raw,
            Err(error) => {
                let error = StudioError::from(error);
                self.report(&error);
                // The last result stays copyable; only the canvas changes.
                self.state.shown = DisplayContent::text(format!("{}: {error}", error.title()));
                self.rerender();
                return GenerateOutcome::Rejected;
            }
        };
        info!(%request, chars = raw.len(), "generated polynomial");

        let result = PolynomialResult::new(request, raw, &self.config.format);
        self.state.shown = result.content();
        self.state.current_result = Some(result);
        self.rerender();
        GenerateOutcome::Generated(request)
    }

    /// Copy the current raw expression and enter the `Copied` state.
    ///
    /// Returns whether the clipboard was written.
    pub fn copy(&mut self, now: Instant) -> bool {
        match self.try_copy(now) {
            Ok(()) => true,
            Err(error) => {
                self.report(&error);
                false
            }
        }
    }

    fn try_copy(&mut self, now: Instant) -> Result<(), StudioError> {
        let result = self
            .state
            .current_result
            .as_ref()
            .ok_or(StudioError::NoContent)?;
        self.clipboard
            .write(result.raw_expression())
            .map_err(|reason| StudioError::ClipboardUnavailable { reason })?;
        self.feedback.mark_copied(now);
        debug!(request = %result.request(), "copied to clipboard");
        Ok(())
    }

    pub fn zoom_in(&mut self) {
        self.state.font_size = zoom::zoom_in(self.state.font_size, &self.config.display);
        self.rerender();
    }

    /// Zoom out unless at the floor. Re-renders either way.
    pub fn zoom_out(&mut self) {
        self.state.font_size = zoom::zoom_out(self.state.font_size, &self.config.display);
        self.rerender();
    }

    /// Advance timers. Returns true when the copy feedback just reverted.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.feedback.poll(now)
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.feedback.status()
    }

    /// Time until the copy feedback reverts, if it is showing.
    pub fn feedback_remaining(&self, now: Instant) -> Option<Duration> {
        self.feedback.remaining(now)
    }

    /// Swap in a new configuration, re-wrapping the current result.
    ///
    /// The zoom level is kept, raised to the new floor if needed.
    pub fn apply_config(&mut self, config: StudioConfig) {
        self.config = config;
        self.feedback = ClipboardFeedback::new(&self.config.clipboard);
        self.state.font_size = self.state.font_size.max(self.config.display.min_font_size);
        if let Some(result) = self.state.current_result.as_mut() {
            result.reformat(&self.config.format);
            self.state.shown = result.content();
        }
        self.rerender();
    }

    /// Queue a notice raised by the host.
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn shown(&self) -> &DisplayContent {
        &self.state.shown
    }

    pub fn current_result(&self) -> Option<&PolynomialResult> {
        self.state.current_result.as_ref()
    }

    pub fn last_render(&self) -> Option<&Rendered> {
        self.last_render.as_ref()
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn clipboard(&self) -> &K {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut K {
        &mut self.clipboard
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut E {
        &mut self.evaluator
    }

    /// Draw the shown content at the current font size.
    pub fn rerender(&mut self) {
        match render(
            &mut self.canvas,
            &self.state.shown,
            self.state.font_size,
            &self.config.display,
        ) {
            Ok(rendered) => {
                if let Rendered::Degraded { cause } = &rendered {
                    self.notices.push(Notice::warning(
                        "Rendering degraded",
                        format!("Showing plain text: {cause}"),
                    ));
                }
                self.last_render = Some(rendered);
            }
            Err(error) => {
                self.last_render = None;
                self.report(&StudioError::from(error));
            }
        }
    }

    fn report(&mut self, error: &StudioError) {
        warn!(%error, title = error.title(), "action failed");
        self.notices.push(Notice::from(error));
    }
}
