//! Terminal UI for binsout: search an address, see which council services it,
//! and read that council's bin-collection schedule as a list or an area map.

mod app;
mod input;
mod ui;

use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{self, UnboundedSender};

use binsout_core::{AddressQuery, plugin::CouncilRegistry, service::BinsoutService};
use binsout_provider_manningham as manningham;
use binsout_provider_whitehorse as whitehorse;

use crate::app::{AppState, Msg, update};
use crate::input::Action;

/// Stand-in for real backend round trips, matching the portal's simulated
/// one-second search delay.
const SEARCH_LATENCY: Duration = Duration::from_millis(1000);

#[tokio::main]
async fn main() -> Result<()> {
    // Provider + service setup. Registration order matters: the geofence
    // resolves overlapping edges in favor of the first registered council.
    let plugins = vec![
        manningham::plugin(SEARCH_LATENCY),
        whitehorse::plugin(SEARCH_LATENCY),
    ];
    let registry = Arc::new(CouncilRegistry::new(plugins));
    let service = Arc::new(BinsoutService::new(registry));

    // App state
    let state = AppState::new(service.areas());

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, service, state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    service: Arc<BinsoutService>,
    mut state: AppState,
) -> Result<()> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<Msg>();

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &state))?;

        // Fold in any finished searches. The reducer drops responses whose
        // sequence number was superseded by a later submit.
        while let Ok(msg) = receiver.try_recv() {
            state = update(state, msg);
        }

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(Duration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key) {
                Action::Quit => break,
                Action::None => {}
                Action::Forward(msg) => {
                    let previous_seq = state.search_seq;
                    state = update(state, msg);

                    // A bumped sequence number means the reducer accepted a
                    // submit; kick off the matching search task.
                    if state.search_seq != previous_seq {
                        spawn_search(&service, &sender, state.search_seq, state.query.clone());
                    }
                }
            }
        }
    }

    Ok(())
}

fn spawn_search(
    service: &Arc<BinsoutService>,
    sender: &UnboundedSender<Msg>,
    seq: u64,
    query: String,
) {
    let service = Arc::clone(service);
    let sender = sender.clone();

    tokio::spawn(async move {
        let outcome = service.resolve(&AddressQuery::new(query)).await;
        // The receiver is gone once the user quits mid-search.
        drop(sender.send(Msg::Finished { seq, outcome }));
    });
}
