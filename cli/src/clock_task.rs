//! Periodic clock task
//!
//! The spawned loop is the tick source of the whole application: sleep one
//! interval, lock the session, feed the measured delta through the driver,
//! print whatever signals came back. One task per game; starting a new game
//! aborts the previous task before the old session is dropped.

use std::time::Duration;

use tokio::task::JoinHandle;

use turnclock_core::{ClockDriver, SignalHandler};

use crate::commands::SignalPrinter;
use crate::context::{CliContext, SessionHandle};

pub async fn start_clock(ctx: &CliContext, session: SessionHandle) -> JoinHandle<()> {
    let interval = {
        let settings = ctx.settings.read().await;
        Duration::from_millis(settings.tick_interval_ms.max(1))
    };

    tokio::spawn(async move {
        let mut driver = ClockDriver::new();
        driver.start();
        let mut printer = SignalPrinter;

        loop {
            tokio::time::sleep(interval).await;
            let mut game = session.write().await;
            let signals = driver.tick(&mut game);
            printer.handle_signals(&signals, &game);
        }
    })
}
