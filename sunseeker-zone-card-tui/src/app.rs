//! Main loop
//!
//! Roughly every 100 ms, or sooner on input:
//! - push a newer host snapshot to the card
//! - draw
//! - stop if asked to
//! - turn one terminal event into a message and apply it

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.sync_host();

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    tracing::info!("Zone card closed");
    Ok(())
}
