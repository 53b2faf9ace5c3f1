//! Interactive medal board.
//!
//! The renderer owns UI state only; every change to the country collection
//! goes through the controller. Requests run as local futures polled by the
//! event loop, and each completion is settled on the loop's thread.

mod app;
mod components;
mod form;
mod theme;
mod ui;

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use medals_client::CountryApi;
use medals_runtime::{Alert, DeleteOutcome, MedalController, Notifier, PendingDelete, create_request};
use medals_types::{Appearance, Country};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, warn};

use crate::presentation::{BoardViewModel, StatusLevel};
use app::{Action, AppState};

/// A finished request, waiting to be settled by the controller.
pub(crate) enum Completion {
    Loaded(medals_client::Result<Vec<Country>>),
    Created(medals_client::Result<Country>),
    Deleted(PendingDelete, medals_client::Result<()>),
}

type InFlight = FuturesUnordered<LocalBoxFuture<'static, Completion>>;

pub struct TuiRenderer {
    state: AppState,
    tick: usize,
}

impl TuiRenderer {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            state: AppState::new(appearance),
            tick: 0,
        }
    }

    /// Take over the terminal until the user quits.
    ///
    /// Alerts raised by the controller arrive on `alerts` and are shown as
    /// modal popups in the order they were raised.
    pub async fn run<A, N>(
        mut self,
        controller: MedalController<A, N>,
        alerts: Receiver<Alert>,
    ) -> Result<()>
    where
        A: CountryApi + Clone + 'static,
        N: Notifier,
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, controller, alerts).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B, A, N>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut controller: MedalController<A, N>,
        alerts: Receiver<Alert>,
    ) -> Result<()>
    where
        B: Backend,
        A: CountryApi + Clone + 'static,
        N: Notifier,
    {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(Duration::from_millis(250));
        let mut in_flight = InFlight::new();

        self.dispatch(Action::Reload, &mut controller, &mut in_flight);

        while !self.state.should_quit {
            let board = board_of(&controller);
            let loading = !controller.is_loaded() && self.state.fatal.is_none();
            terminal.draw(|f| ui::draw(f, &mut self.state, &board, loading, self.tick))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        if let Some(action) = self.state.handle_key(key, &board) {
                            self.dispatch(action, &mut controller, &mut in_flight);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                Some(completion) = in_flight.next(), if !in_flight.is_empty() => {
                    self.apply(completion, &mut controller);
                }
                _ = ticker.tick() => {
                    self.tick = self.tick.wrapping_add(1);
                }
            }

            while let Ok(alert) = alerts.try_recv() {
                self.state.push_alert(alert);
            }
        }

        if !in_flight.is_empty() {
            debug!(count = in_flight.len(), "dropping in-flight requests on exit");
        }
        Ok(())
    }

    /// Start the work an action asks for. Local edits apply immediately;
    /// network calls are queued on `in_flight`.
    fn dispatch<A, N>(
        &mut self,
        action: Action,
        controller: &mut MedalController<A, N>,
        in_flight: &mut InFlight,
    ) where
        A: CountryApi + Clone + 'static,
        N: Notifier,
    {
        match action {
            Action::Increment { id, medal } => {
                if let Err(err) = controller.increment(id, medal) {
                    self.state.set_status(StatusLevel::Warning, err.to_string());
                }
            }
            Action::Decrement { id, medal } => {
                if let Err(err) = controller.decrement(id, medal) {
                    self.state.set_status(StatusLevel::Warning, err.to_string());
                }
            }
            Action::Reload => {
                let api = controller.api().clone();
                self.state.set_status(StatusLevel::Info, "Loading countries...");
                self.track(in_flight, async move { Completion::Loaded(api.list().await) });
            }
            Action::Add {
                name,
                gold,
                silver,
                bronze,
            } => {
                let api = controller.api().clone();
                let request = create_request(&name, gold, silver, bronze);
                self.state
                    .set_status(StatusLevel::Info, format!("Adding {}...", request.name));
                self.track(in_flight, async move {
                    Completion::Created(api.create(&request).await)
                });
            }
            Action::Delete { id } => {
                let api = controller.api().clone();
                let pending = controller.begin_delete(id);
                let label = pending
                    .removed()
                    .map_or_else(|| id.to_string(), |c| c.name.clone());
                self.state
                    .set_status(StatusLevel::Info, format!("Deleting {}...", label));
                self.track(in_flight, async move {
                    let result = api.delete(id).await;
                    Completion::Deleted(pending, result)
                });
            }
        }
    }

    fn track(
        &mut self,
        in_flight: &mut InFlight,
        request: impl std::future::Future<Output = Completion> + 'static,
    ) {
        self.state.pending += 1;
        in_flight.push(request.boxed_local());
    }

    /// Settle a finished request against the controller.
    fn apply<A, N>(&mut self, completion: Completion, controller: &mut MedalController<A, N>)
    where
        A: CountryApi,
        N: Notifier,
    {
        self.state.pending = self.state.pending.saturating_sub(1);

        match completion {
            Completion::Loaded(result) => {
                let first_load = !controller.is_loaded();
                match controller.settle_load(result) {
                    Ok(count) if first_load => {
                        let at = chrono::Local::now().format("%H:%M:%S");
                        self.state.set_status(
                            StatusLevel::Success,
                            format!("Loaded {} countries at {}", count, at),
                        );
                    }
                    Ok(count) => {
                        let at = chrono::Local::now().format("%H:%M:%S");
                        self.state.set_status(
                            StatusLevel::Info,
                            format!(
                                "Reloaded {} countries at {}; local medal changes discarded",
                                count, at
                            ),
                        );
                    }
                    Err(err) if first_load => {
                        warn!(error = %err, "initial load failed");
                        self.state.fatal = Some(format!("Could not load countries: {}", err));
                    }
                    Err(err) => {
                        warn!(error = %err, "reload failed");
                        self.state
                            .set_status(StatusLevel::Error, format!("Reload failed: {}", err));
                    }
                }
            }
            Completion::Created(result) => match controller.settle_add(result) {
                Ok(created) => {
                    let board = board_of(controller);
                    self.state.select_row_of(&board, created.id);
                    self.state
                        .set_status(StatusLevel::Success, format!("Added {}", created.name));
                }
                // Already logged by the controller; the board is unchanged.
                Err(_) => self.state.status = None,
            },
            Completion::Deleted(pending, result) => {
                let label = pending
                    .removed()
                    .map_or_else(|| pending.id().to_string(), |c| c.name.clone());
                match controller.settle_delete(pending, result) {
                    DeleteOutcome::Deleted => self
                        .state
                        .set_status(StatusLevel::Success, format!("Deleted {}", label)),
                    DeleteOutcome::AlreadyGone => self.state.set_status(
                        StatusLevel::Info,
                        format!("{} was already deleted", label),
                    ),
                    DeleteOutcome::RolledBack => self.state.status = None,
                }
            }
        }
    }
}

fn board_of<A: CountryApi, N: Notifier>(controller: &MedalController<A, N>) -> BoardViewModel {
    BoardViewModel::new(&controller.sorted(), controller.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medals_client::ApiError;
    use medals_testing::fixtures;
    use medals_types::{CountryId, MedalKind, NewCountry};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    /// Answers every request from fixed results and records create bodies.
    #[derive(Clone, Default)]
    struct FixedApi {
        countries: Vec<Country>,
        list_status: Option<u16>,
        delete_status: Option<u16>,
        created: Rc<RefCell<Vec<NewCountry>>>,
    }

    fn status_error(status: u16) -> ApiError {
        if status == 404 {
            ApiError::NotFound {
                url: "http://test/api/country/1".to_string(),
            }
        } else {
            ApiError::Status {
                status,
                url: "http://test/api/country".to_string(),
            }
        }
    }

    impl CountryApi for FixedApi {
        async fn list(&self) -> medals_client::Result<Vec<Country>> {
            match self.list_status {
                Some(status) => Err(status_error(status)),
                None => Ok(self.countries.clone()),
            }
        }

        async fn create(&self, country: &NewCountry) -> medals_client::Result<Country> {
            self.created.borrow_mut().push(country.clone());
            Ok(Country::new(99, country.name.clone()))
        }

        async fn delete(&self, _id: CountryId) -> medals_client::Result<()> {
            match self.delete_status {
                Some(status) => Err(status_error(status)),
                None => Ok(()),
            }
        }
    }

    type Harness = (
        TuiRenderer,
        MedalController<FixedApi, mpsc::Sender<Alert>>,
        Receiver<Alert>,
        InFlight,
    );

    fn harness(api: FixedApi) -> Harness {
        let (tx, rx) = mpsc::channel();
        (
            TuiRenderer::new(Appearance::Dark),
            MedalController::new(api, tx),
            rx,
            InFlight::new(),
        )
    }

    async fn settle_all(
        renderer: &mut TuiRenderer,
        controller: &mut MedalController<FixedApi, mpsc::Sender<Alert>>,
        in_flight: &mut InFlight,
    ) {
        while let Some(completion) = in_flight.next().await {
            renderer.apply(completion, controller);
        }
    }

    #[tokio::test]
    async fn test_initial_load_populates_board() {
        let (mut renderer, mut controller, _rx, mut in_flight) = harness(FixedApi {
            countries: fixtures::sample_countries(),
            ..Default::default()
        });

        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        assert_eq!(renderer.state.pending, 1);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        assert_eq!(renderer.state.pending, 0);
        assert!(controller.is_loaded());
        assert_eq!(board_of(&controller).total, fixtures::SAMPLE_TOTAL);
        assert!(renderer.state.fatal.is_none());
    }

    #[tokio::test]
    async fn test_initial_load_failure_is_fatal() {
        let (mut renderer, mut controller, _rx, mut in_flight) = harness(FixedApi {
            list_status: Some(503),
            ..Default::default()
        });

        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        assert!(renderer.state.fatal.as_deref().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_reload_reports_discarded_adjustments() {
        let (mut renderer, mut controller, _rx, mut in_flight) = harness(FixedApi {
            countries: fixtures::brazil_and_italy(),
            ..Default::default()
        });
        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;
        assert!(renderer.state.status.as_ref().unwrap().text.starts_with("Loaded 2"));

        renderer.dispatch(
            Action::Increment {
                id: CountryId::new(2),
                medal: MedalKind::Gold,
            },
            &mut controller,
            &mut in_flight,
        );
        assert_eq!(controller.total(), 2);

        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        let status = renderer.state.status.as_ref().unwrap();
        assert_eq!(status.level, StatusLevel::Info);
        assert!(status.text.contains("local medal changes discarded"));
        assert_eq!(controller.total(), 1);
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_board() {
        let (mut renderer, mut controller, _rx, mut in_flight) = harness(FixedApi {
            countries: fixtures::brazil_and_italy(),
            ..Default::default()
        });
        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        in_flight.push(async { Completion::Loaded(Err(status_error(500))) }.boxed_local());
        renderer.state.pending += 1;
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        assert!(renderer.state.fatal.is_none());
        assert_eq!(controller.countries().len(), 2);
        assert_eq!(
            renderer.state.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Error)
        );
    }

    #[tokio::test]
    async fn test_add_sends_zeroed_body_and_selects_new_row() {
        let api = FixedApi {
            countries: fixtures::brazil_and_italy(),
            ..Default::default()
        };
        let created = Rc::clone(&api.created);
        let (mut renderer, mut controller, _rx, mut in_flight) = harness(api);
        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        renderer.dispatch(
            Action::Add {
                name: "Chile".to_string(),
                gold: 3,
                silver: 2,
                bronze: 1,
            },
            &mut controller,
            &mut in_flight,
        );
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        assert_eq!(created.borrow().as_slice(), &[NewCountry::named("Chile")]);
        assert_eq!(controller.countries().len(), 3);
        // Brazil, Chile, Italy
        assert_eq!(renderer.state.selected_row, 1);
    }

    #[tokio::test]
    async fn test_delete_is_optimistic_while_in_flight() {
        let (mut renderer, mut controller, _rx, mut in_flight) = harness(FixedApi {
            countries: fixtures::brazil_and_italy(),
            ..Default::default()
        });
        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        renderer.dispatch(
            Action::Delete {
                id: CountryId::new(1),
            },
            &mut controller,
            &mut in_flight,
        );

        assert_eq!(controller.countries().len(), 1);
        assert_eq!(renderer.state.pending, 1);

        settle_all(&mut renderer, &mut controller, &mut in_flight).await;
        assert_eq!(controller.countries().len(), 1);
        assert_eq!(
            renderer.state.status.as_ref().map(|s| s.text.as_str()),
            Some("Deleted Brazil")
        );
    }

    #[tokio::test]
    async fn test_failed_delete_restores_and_alerts() {
        let (mut renderer, mut controller, rx, mut in_flight) = harness(FixedApi {
            countries: fixtures::brazil_and_italy(),
            delete_status: Some(500),
            ..Default::default()
        });
        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        renderer.dispatch(
            Action::Delete {
                id: CountryId::new(2),
            },
            &mut controller,
            &mut in_flight,
        );
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        assert_eq!(controller.countries(), fixtures::brazil_and_italy().as_slice());
        let alert = rx.try_recv().unwrap();
        assert!(alert.to_string().contains("Italy"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_delete_of_missing_record_keeps_it_removed() {
        let (mut renderer, mut controller, rx, mut in_flight) = harness(FixedApi {
            countries: fixtures::brazil_and_italy(),
            delete_status: Some(404),
            ..Default::default()
        });
        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        renderer.dispatch(
            Action::Delete {
                id: CountryId::new(2),
            },
            &mut controller,
            &mut in_flight,
        );
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        assert_eq!(controller.countries().len(), 1);
        assert!(rx.try_recv().is_err());
        assert_eq!(
            renderer.state.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Info)
        );
    }

    #[tokio::test]
    async fn test_increment_is_local_and_immediate() {
        let (mut renderer, mut controller, _rx, mut in_flight) = harness(FixedApi {
            countries: fixtures::brazil_and_italy(),
            ..Default::default()
        });
        renderer.dispatch(Action::Reload, &mut controller, &mut in_flight);
        settle_all(&mut renderer, &mut controller, &mut in_flight).await;

        renderer.dispatch(
            Action::Increment {
                id: CountryId::new(2),
                medal: MedalKind::Gold,
            },
            &mut controller,
            &mut in_flight,
        );

        assert!(in_flight.is_empty());
        assert_eq!(controller.find(CountryId::new(2)).unwrap().gold, 1);
        assert_eq!(controller.total(), 2);
    }
}
