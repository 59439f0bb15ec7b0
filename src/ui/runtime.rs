use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::api::ConversionGateway;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::workflow::Workflow;

/// Runs the interactive converter until the user quits.
pub async fn run(config: &Config, gateway: Arc<dyn ConversionGateway>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let mut workflow = Workflow::new(gateway);
    workflow.initialize();
    let mut app = App::new(workflow);

    let mut events = EventHandler::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.ui.tick_rate_ms));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                // Next draw picks up the new size.
                Some(AppEvent::Resize(_, _)) => {}
                None => break,
            },
            _ = app.workflow_mut().next_completion() => {}
            _ = ticker.tick() => app.on_tick(),
        }
    }

    tracing::info!("Converter closed");
    drop(events);
    drop(guard);
    Ok(())
}
