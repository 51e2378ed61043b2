use std::fs::File;

use crossterm::event::read;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use scrim::{
    animation_name, dismiss_on_escape, leave_duration, ContentSource, MemoryHost, OverlayConfig,
    OverlaySession, SizeHints,
};
use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("modal.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let session = OverlaySession::new(MemoryHost::new());

    let config = OverlayConfig::new()
        .size(SizeHints::new().width("60").height("20"))
        .modal_enter("enter-scaling 0.3s ease-out")
        .modal_leave("fade-out 0.3s forwards")
        .overlay_enter("fade-in 1s")
        .overlay_leave("fade-out 0.3s forwards");

    session
        .open(
            ContentSource::component(|| "Hello from the modal".to_string()),
            config.clone(),
        )
        .expect("open failed");
    let handle = session.instance().expect("overlay mounted");

    println!(
        "Overlay open ({} nodes attached). Press Esc to close.",
        session.host().lock().unwrap().attached_count()
    );

    enable_raw_mode()?;
    loop {
        let event = read()?;
        if dismiss_on_escape(&session, &event) {
            break;
        }
    }
    disable_raw_mode()?;

    // Stand-in for the render engine: fire each layer's completion signal
    // after its declared duration.
    let events = session.animation_events();
    let modal_leave = config.animations.modal.leave.clone().unwrap_or_default();
    let overlay_leave = config.animations.overlay.leave.clone().unwrap_or_default();
    tokio::join!(
        async {
            tokio::time::sleep(leave_duration(&modal_leave)).await;
            events.notify(handle.dialog, &animation_name(&modal_leave).unwrap_or_default());
        },
        async {
            tokio::time::sleep(leave_duration(&overlay_leave)).await;
            events.notify(handle.backdrop, &animation_name(&overlay_leave).unwrap_or_default());
        },
        session.closed(),
    );

    println!(
        "Overlay closed ({} nodes attached).",
        session.host().lock().unwrap().attached_count()
    );
    Ok(())
}
