// SPDX-License-Identifier: MPL-2.0
//! Headless demo: drives one overlay controller against a simulated media
//! task and prints every render.

use std::path::PathBuf;
use std::time::Duration;

use overlay_player::config::{self, Config};
use overlay_player::diagnostics::DiagnosticsCollector;
use overlay_player::error::{Error, ErrorEvent, Result};
use overlay_player::i18n::I18n;
use overlay_player::overlay::{ControllerBuilder, RenderDirectives};
use overlay_player::player::{MediaCommand, MediaCommandSender, PlaybackStatus};
use overlay_player::session::{self, EventSender, PlayerEvent, TokioScheduler};
use tokio::sync::mpsc::{self, UnboundedReceiver};

const HELP: &str = "\
overlay_player - playback overlay demo

USAGE:
  overlay_player [OPTIONS]

OPTIONS:
  --source <URI>             Video source (required for playback)
  --duration-ms <MS>         Length of the simulated video [default: 6000]
  --lang <LOCALE>            UI language (en-US, fr)
  --config <FILE>            Read settings from this file
  --diagnostics <FILE>       Write a JSON diagnostics report on exit
  -h, --help                 Print help
";

/// Simulated media progress granularity.
const MEDIA_TICK: Duration = Duration::from_millis(250);

struct Args {
    source: Option<String>,
    duration_ms: u64,
    lang: Option<String>,
    config: Option<PathBuf>,
    diagnostics: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    Ok(Some(Args {
        source: args.opt_value_from_str("--source")?,
        duration_ms: args.opt_value_from_str("--duration-ms")?.unwrap_or(6_000),
        lang: args.opt_value_from_str("--lang")?,
        config: args.opt_value_from_str("--config")?,
        diagnostics: args.opt_value_from_str("--diagnostics")?,
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => return Err(Error::Config(err.to_string())),
    };

    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_else(|err| {
            eprintln!("{err}; using defaults");
            Config::default()
        }),
    };
    let i18n = I18n::new(args.lang.clone(), &config);

    let mut options = config.player.clone();
    if let Some(source) = args.source {
        options = options.with_source(source);
    }

    let mut collector = DiagnosticsCollector::default();
    let (events, event_rx) = session::channel();
    let (media, media_rx) = MediaCommandSender::channel();
    let media = media.with_diagnostics(collector.handle());
    let (error_tx, mut error_rx) = mpsc::unbounded_channel::<ErrorEvent>();

    let controller = ControllerBuilder::new(options)
        .diagnostics(collector.handle())
        .on_error(move |event| {
            let _ = error_tx.send(event.clone());
        })
        .on_render(print_render)
        .on_back(|| println!("<- back"))
        .mount(media, TokioScheduler::new(&events));

    let media_task = tokio::spawn(simulate_media(media_rx, events.clone(), args.duration_ms));
    let script = tokio::spawn(user_script(events, args.duration_ms));
    let session = tokio::spawn(session::run(controller, event_rx));

    // The channel closes once the session drops the controller.
    while let Some(event) = error_rx.recv().await {
        eprintln!("[{:?}] {}", event.kind, i18n.tr_error(&event.error));
    }

    let snapshot = session
        .await
        .map_err(|err| Error::Io(err.to_string()))?;
    script.abort();
    let _ = media_task.await;

    println!(
        "final: {:?} {} ({})",
        snapshot.state,
        snapshot.time_label(),
        i18n.current_locale()
    );

    collector.process_pending();
    if let Some(path) = args.diagnostics {
        let report = collector
            .export_json()
            .map_err(|err| Error::Io(err.to_string()))?;
        std::fs::write(path, report)?;
    }
    Ok(())
}

fn print_render(directives: &RenderDirectives) {
    let snapshot = &directives.snapshot;
    let fade = directives
        .fade
        .map(|fade| format!(" fading->{:?} {}ms", fade.target, fade.duration.value()))
        .unwrap_or_default();
    println!(
        "{:<9?} {:<7?} {} opacity={:.1}{}{}",
        snapshot.state,
        snapshot.controls_visibility,
        snapshot.time_label(),
        directives.opacity,
        fade,
        if snapshot.confirmed { "" } else { " (pending)" },
    );
}

/// Gestures a viewer might make while watching.
async fn user_script(events: EventSender, duration_ms: u64) {
    let steps = [
        (500, PlayerEvent::ToggleControls),
        (1_000, PlayerEvent::TogglePlayback),
        (1_500, PlayerEvent::TogglePlayback),
        (2_000, PlayerEvent::ScrubStarted),
        (2_200, PlayerEvent::ScrubReleased(0.8)),
    ];
    let mut elapsed = 0;
    for (at, event) in steps {
        tokio::time::sleep(Duration::from_millis(at - elapsed)).await;
        elapsed = at;
        if events.send(event).is_err() {
            return;
        }
    }
    tokio::time::sleep(Duration::from_millis(duration_ms.max(elapsed) + 3_000 - elapsed)).await;
    let _ = events.send(PlayerEvent::Unmount);
}

/// Plays a video of `duration_ms` in real time, obeying media commands and
/// pushing a status every tick.
async fn simulate_media(
    mut commands: UnboundedReceiver<MediaCommand>,
    events: EventSender,
    duration_ms: u64,
) {
    let mut ticker = tokio::time::interval(MEDIA_TICK);
    let mut position: u64 = 0;
    let mut should_play = true;
    let mut finished = false;
    let tick_ms = u64::try_from(MEDIA_TICK.as_millis()).unwrap_or(u64::MAX);

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(MediaCommand::SetStatus(request)) => {
                    if let Some(play) = request.should_play {
                        should_play = play;
                    }
                    if let Some(target) = request.position_millis {
                        position = target.min(duration_ms);
                        finished = false;
                    }
                }
                Some(MediaCommand::SetAudioMode(_)) => {}
                Some(MediaCommand::Stop) | None => return,
            },
            _ = ticker.tick() => {
                let mut just_finished = false;
                if should_play && position < duration_ms {
                    position = (position + tick_ms).min(duration_ms);
                    if position == duration_ms && !finished {
                        finished = true;
                        just_finished = true;
                    }
                }
                let status = PlaybackStatus::loaded(position, duration_ms)
                    .playing(should_play)
                    .just_finished(just_finished);
                if events.send(PlayerEvent::Status(status)).is_err() {
                    return;
                }
            }
        }
    }
}
