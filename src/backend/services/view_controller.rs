// src/backend/services/view_controller.rs
// Top-level controller: owns the stamp state, the active screen and the notification

use crate::{
    adapter::ManualScheduler,
    config::{validate_config, StampCardConfig},
    error::StampError,
    models::{
        screen::{
            CompletionBanner, PasswordPromptView, QrCard, QrPanelView, QrScreen, StampSlot,
            StampsScreen, BACK_LABEL, COMPLETION_BODY, COMPLETION_TITLE, HEADER_SUBTITLE,
            HEADER_TITLE, QR_LOADING_TEXT, QR_TITLE, RESET_LABEL, SHOW_QR_LABEL,
        },
        Notification, NotificationKind, QrCodeRecord, Screen, StampId, StampSet, StartupPhase,
        TimerId, ViewState,
    },
    services::{
        access_gate::{AccessGate, PasswordPrompt},
        entry_point::{EntryPoint, EntryPointResolver, Navigation},
        notifier::{NotificationCenter, Scheduler},
        qr_materializer::{QrEncoder, QrMaterializer, SvgQrEncoder},
        stamp_store::{AddOutcome, StampStore},
    },
    storage::DurableSlot,
};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const RESET_MESSAGE: &str = "Stamp record has been reset!";
pub const WRONG_PASSWORD_MESSAGE: &str = "wrong password";

pub fn collected_message(id: StampId) -> String {
    format!("Stamp {} collected!", id)
}

/// Content of the QR screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QrPanel {
    Loading,
    Ready(Vec<QrCodeRecord>),
}

/// Owns every piece of mutable UI state. Host events map to method calls.
pub struct StampCardController<D: DurableSlot, N: Navigation, S: Scheduler> {
    config: StampCardConfig,
    store: StampStore<D>,
    navigation: N,
    scheduler: S,
    resolver: EntryPointResolver,
    gate: AccessGate,
    prompt: PasswordPrompt,
    materializer: QrMaterializer,
    notifications: NotificationCenter,
    view: ViewState,
    qr_panel: Option<QrPanel>,
    phase: StartupPhase,
}

impl<D: DurableSlot, N: Navigation, S: Scheduler> StampCardController<D, N, S> {
    /// Builds a controller with the default SVG QR encoder. Nothing is loaded yet;
    /// call `start` (or `hydrate` then `resolve_entry_point`).
    ///
    /// # Errors
    /// `StampError::InvalidConfig` if `config` does not validate.
    pub fn new(
        config: StampCardConfig,
        slot: D,
        navigation: N,
        scheduler: S,
    ) -> Result<Self, StampError> {
        validate_config(&config)?;
        let encoder = Box::new(SvgQrEncoder::new(&config.qr));
        Ok(Self {
            store: StampStore::new(slot, config.storage_key.clone(), config.total_stamps),
            navigation,
            scheduler,
            resolver: EntryPointResolver::new(config.total_stamps),
            gate: AccessGate::new(config.admin_secret.clone()),
            prompt: PasswordPrompt::default(),
            materializer: QrMaterializer::new(config.base_url.clone(), config.total_stamps, encoder),
            notifications: NotificationCenter::new(&config.notification),
            view: ViewState::default(),
            qr_panel: None,
            phase: StartupPhase::Pending,
            config,
        })
    }

    /// Swaps the QR encoder.
    pub fn with_encoder(mut self, encoder: Box<dyn QrEncoder>) -> Self {
        self.materializer = QrMaterializer::new(
            self.config.base_url.clone(),
            self.config.total_stamps,
            encoder,
        );
        self
    }

    // --- Startup ---

    /// Page load: hydrate, then handle the landing URL.
    pub fn start(&mut self) -> Result<Option<EntryPoint>, StampError> {
        self.hydrate();
        self.resolve_entry_point()
    }

    /// Phase 1. Loads the stamps from the durable slot. Runs once; later calls do nothing.
    pub fn hydrate(&mut self) {
        if self.phase != StartupPhase::Pending {
            debug!(phase = ?self.phase, "Hydrate skipped");
            return;
        }
        let loaded = self.store.load().len();
        self.phase = StartupPhase::Hydrated;
        info!(collected = loaded, total = self.config.total_stamps, "Stamp card hydrated");
    }

    /// Phase 2. Applies the `?point=` parameter of the landing URL.
    ///
    /// # Returns
    /// * `Ok(Some(entry))` the first time it runs after hydration.
    /// * `Ok(None)` on any later call, or when the address could not be read.
    ///
    /// # Errors
    /// `StampError::NotHydrated` if called before `hydrate`; the URL is left untouched.
    pub fn resolve_entry_point(&mut self) -> Result<Option<EntryPoint>, StampError> {
        match self.phase {
            StartupPhase::Pending => return Err(StampError::NotHydrated),
            StartupPhase::Resolved => return Ok(None),
            StartupPhase::Hydrated => {}
        }
        self.phase = StartupPhase::Resolved;

        let entry = match self.resolver.resolve(&mut self.navigation) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Could not read the landing URL");
                return Ok(None);
            }
        };
        match &entry {
            EntryPoint::Absent => {}
            EntryPoint::Valid(id) => {
                self.collect_stamp(*id)?;
            }
            EntryPoint::Invalid(raw) => {
                let message = StampError::InvalidStampPoint(raw.clone()).to_string();
                self.notify(message, NotificationKind::Error);
            }
        }
        Ok(Some(entry))
    }

    // --- Stamp actions ---

    /// Adds a stamp and announces it. A repeat is silent.
    pub fn collect_stamp(&mut self, id: StampId) -> Result<AddOutcome, StampError> {
        let outcome = self.store.add(id)?;
        if let AddOutcome::Added(id) = outcome {
            info!(id, "Stamp collected");
            self.notify(collected_message(id), NotificationKind::Success);
        }
        Ok(outcome)
    }

    pub fn reset_stamps(&mut self) {
        self.store.reset();
        info!("Stamps reset");
        self.notify(RESET_MESSAGE, NotificationKind::Info);
    }

    // --- Admin gate ---

    /// "Show QR" action: opens the password prompt.
    pub fn open_password_prompt(&mut self) {
        self.prompt.open();
    }

    pub fn set_password_input(&mut self, text: impl Into<String>) {
        self.prompt.set_input(text);
    }

    /// Cancel button or backdrop click.
    pub fn cancel_password_prompt(&mut self) {
        self.prompt.close();
    }

    /// Checks the typed password. On success the QR screen opens in its loading
    /// state; on failure a notification is shown. Either way the prompt closes empty.
    pub fn submit_password(&mut self) -> bool {
        let candidate = self.prompt.take_submission();
        if self.gate.check(&candidate) {
            debug!("Admin gate passed");
            self.view = ViewState::QrView;
            self.qr_panel = Some(QrPanel::Loading);
            true
        } else {
            self.notify(WRONG_PASSWORD_MESSAGE, NotificationKind::Error);
            false
        }
    }

    /// Runs QR generation for an open QR screen that is still loading.
    ///
    /// # Returns
    /// * Number of records produced, or `None` if there was nothing to generate.
    pub fn generate_qr_codes(&mut self) -> Option<usize> {
        if self.view != ViewState::QrView || self.qr_panel != Some(QrPanel::Loading) {
            return None;
        }
        let records = self.materializer.materialize();
        let count = records.len();
        self.qr_panel = Some(QrPanel::Ready(records));
        Some(count)
    }

    /// "Back" action. Generated codes are discarded.
    pub fn back_to_stamps(&mut self) {
        self.view = ViewState::StampsView;
        self.qr_panel = None;
    }

    // --- Notifications ---

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifications.show(&mut self.scheduler, message, kind);
    }

    /// Host callback for an expired timer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        self.notifications.on_timer(&mut self.scheduler, id)
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss(&mut self.scheduler);
    }

    // --- Accessors ---

    pub fn config(&self) -> &StampCardConfig {
        &self.config
    }

    pub fn stamps(&self) -> &StampSet {
        self.store.stamps()
    }

    pub fn is_complete(&self) -> bool {
        self.store.is_complete()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn phase(&self) -> StartupPhase {
        self.phase
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn qr_panel(&self) -> Option<&QrPanel> {
        self.qr_panel.as_ref()
    }

    pub fn password_prompt(&self) -> &PasswordPrompt {
        &self.prompt
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn slot(&self) -> &D {
        self.store.slot()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Gives back the durable slot, e.g. to reopen it as a fresh page load.
    pub fn into_slot(self) -> D {
        self.store.into_slot()
    }

    // --- Rendering ---

    /// Describes the active screen for the host to draw.
    pub fn render(&self) -> Screen {
        let notification = self.notifications.current().cloned();
        match self.view {
            ViewState::StampsView => {
                let stamps = self.store.stamps();
                let slots = (1..=self.config.total_stamps)
                    .map(|number| StampSlot {
                        number,
                        stamped: stamps.contains(number),
                    })
                    .collect();
                let completion_banner = stamps.is_complete().then(|| CompletionBanner {
                    title: COMPLETION_TITLE.to_string(),
                    body: COMPLETION_BODY.to_string(),
                });
                let password_prompt = self.prompt.is_open().then(|| PasswordPromptView {
                    input_len: self.prompt.input().chars().count(),
                });
                Screen::Stamps(StampsScreen {
                    title: HEADER_TITLE.to_string(),
                    subtitle: HEADER_SUBTITLE.to_string(),
                    slots,
                    completion_banner,
                    show_qr_label: SHOW_QR_LABEL.to_string(),
                    reset_label: RESET_LABEL.to_string(),
                    password_prompt,
                    notification,
                })
            }
            ViewState::QrView => {
                let panel = match &self.qr_panel {
                    Some(QrPanel::Ready(records)) => QrPanelView::Ready {
                        cards: records.iter().map(QrCard::from).collect(),
                    },
                    _ => QrPanelView::Loading {
                        text: QR_LOADING_TEXT.to_string(),
                    },
                };
                Screen::Qr(QrScreen {
                    title: QR_TITLE.to_string(),
                    back_label: BACK_LABEL.to_string(),
                    panel,
                    notification,
                })
            }
        }
    }

    /// `render` as JSON, for hosts that cross a language boundary.
    pub fn render_json(&self) -> Result<String, StampError> {
        Ok(serde_json::to_string(&self.render())?)
    }
}

impl<D: DurableSlot, N: Navigation> StampCardController<D, N, ManualScheduler> {
    /// Moves the virtual clock forward, delivering every timer that falls due,
    /// including timers scheduled by earlier expiries within the window.
    pub fn advance_clock(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some(id) = self.scheduler.pop_due(until) {
            self.on_timer(id);
        }
        self.scheduler.advance_to(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryNavigation;
    use crate::storage::StableSlotStore;
    use ic_stable_structures::VectorMemory;

    type TestController =
        StampCardController<StableSlotStore<VectorMemory>, MemoryNavigation, ManualScheduler>;

    fn controller(href: &str) -> TestController {
        StampCardController::new(
            StampCardConfig::default(),
            StableSlotStore::init(VectorMemory::default()),
            MemoryNavigation::new(href),
            ManualScheduler::new(),
        )
        .unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = StampCardConfig {
            total_stamps: 0,
            ..StampCardConfig::default()
        };
        let result = StampCardController::new(
            config,
            StableSlotStore::init(VectorMemory::default()),
            MemoryNavigation::new("https://x.example/"),
            ManualScheduler::new(),
        );
        assert!(matches!(result, Err(StampError::InvalidConfig(_))));
    }

    #[test]
    fn resolve_before_hydrate_is_refused() {
        let mut ctrl = controller("https://x.example/?point=3");
        assert_eq!(ctrl.resolve_entry_point(), Err(StampError::NotHydrated));
        assert!(ctrl.stamps().is_empty());
        assert!(ctrl.navigation().replacements().is_empty());
    }

    #[test]
    fn resolve_runs_once() {
        let mut ctrl = controller("https://x.example/?point=3");
        assert_eq!(ctrl.start(), Ok(Some(EntryPoint::Valid(3))));
        assert_eq!(ctrl.resolve_entry_point(), Ok(None));
        assert_eq!(ctrl.phase(), StartupPhase::Resolved);
    }

    #[test]
    fn unreadable_url_is_not_fatal() {
        let mut ctrl = controller("::garbage::");
        assert_eq!(ctrl.start(), Ok(None));
        assert!(ctrl.notification().is_none());
    }

    #[test]
    fn reset_shows_notification() {
        let mut ctrl = controller("https://x.example/?point=1");
        ctrl.start().unwrap();
        ctrl.reset_stamps();
        assert!(ctrl.stamps().is_empty());
        assert_eq!(ctrl.notification().unwrap().message, RESET_MESSAGE);
    }

    #[test]
    fn wrong_password_keeps_stamps_view() {
        let mut ctrl = controller("https://x.example/");
        ctrl.start().unwrap();
        ctrl.open_password_prompt();
        ctrl.set_password_input("123456");
        assert!(!ctrl.submit_password());
        assert_eq!(ctrl.view(), ViewState::StampsView);
        assert_eq!(ctrl.notification().unwrap().message, WRONG_PASSWORD_MESSAGE);
        assert!(!ctrl.password_prompt().is_open());
        assert_eq!(ctrl.password_prompt().input(), "");
    }

    #[test]
    fn qr_screen_loads_then_shows_cards_and_back_discards_them() {
        let mut ctrl = controller("https://x.example/");
        ctrl.start().unwrap();
        ctrl.open_password_prompt();
        ctrl.set_password_input("423609");
        assert!(ctrl.submit_password());
        assert_eq!(ctrl.view(), ViewState::QrView);
        assert!(matches!(
            ctrl.render(),
            Screen::Qr(QrScreen { panel: QrPanelView::Loading { .. }, .. })
        ));

        assert_eq!(ctrl.generate_qr_codes(), Some(6));
        assert_eq!(ctrl.generate_qr_codes(), None);
        match ctrl.render() {
            Screen::Qr(QrScreen { panel: QrPanelView::Ready { cards }, .. }) => {
                assert_eq!(cards.len(), 6);
                assert_eq!(cards[0].download_name, "stamp_point_1.svg");
                assert!(cards[0].image_src.starts_with("data:image/svg+xml;base64,"));
            }
            other => panic!("unexpected screen {:?}", other),
        }

        ctrl.back_to_stamps();
        assert_eq!(ctrl.view(), ViewState::StampsView);
        assert!(ctrl.qr_panel().is_none());
    }

    #[test]
    fn generate_outside_qr_view_does_nothing() {
        let mut ctrl = controller("https://x.example/");
        ctrl.start().unwrap();
        assert_eq!(ctrl.generate_qr_codes(), None);
    }

    #[test]
    fn render_marks_collected_slots_and_prompt() {
        let mut ctrl = controller("https://x.example/?point=2");
        ctrl.start().unwrap();
        ctrl.open_password_prompt();
        ctrl.set_password_input("abc");
        match ctrl.render() {
            Screen::Stamps(screen) => {
                let stamped: Vec<StampId> =
                    screen.slots.iter().filter(|s| s.stamped).map(|s| s.number).collect();
                assert_eq!(screen.slots.len(), 6);
                assert_eq!(stamped, vec![2]);
                assert!(screen.completion_banner.is_none());
                assert_eq!(screen.password_prompt, Some(PasswordPromptView { input_len: 3 }));
                assert_eq!(
                    screen.notification.map(|n| n.message),
                    Some(collected_message(2))
                );
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn render_json_is_tagged() {
        let mut ctrl = controller("https://x.example/");
        ctrl.start().unwrap();
        let json: serde_json::Value = serde_json::from_str(&ctrl.render_json().unwrap()).unwrap();
        assert_eq!(json["screen"], "stamps");
        assert_eq!(json["slots"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn notification_expires_on_clock() {
        let mut ctrl = controller("https://x.example/?point=4");
        ctrl.start().unwrap();
        assert!(ctrl.notification().is_some());
        ctrl.advance_clock(Duration::from_millis(3_300));
        assert!(ctrl.notification().is_none());
    }
}
