use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use lagmeter_engine::config::{SecondaryMetric, TimerConfig};
use lagmeter_engine::coordinator::TimingCoordinator;
use lagmeter_engine::counter::Counter;
use lagmeter_engine::display::RefreshRate;
use lagmeter_engine::logging::{LoggingConfig, init_logging};
use lagmeter_engine::timer::OutputTimer;

/// Simulated outputs standing in for display enumeration: a name plus the
/// frequency the display would report.
const OUTPUTS: &[(&str, u32)] = &[("SIM-1", 60), ("SIM-2", 144), ("SIM-3", 75)];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let run_seconds = run_seconds().context("parsing run duration")?;

    println!();
    println!("  lagmeter sim: {} outputs, {run_seconds} s run", OUTPUTS.len());
    println!();

    let config = TimerConfig::default();
    let counter = Counter::system();
    // One baseline for every output so all readouts show the same digits.
    let starting_count = counter.raw();

    let mut outputs = Vec::with_capacity(OUTPUTS.len());
    let mut shortest_refresh = f64::INFINITY;
    for &(name, frequency) in OUTPUTS {
        let refresh = RefreshRate::from_display_frequency(frequency);
        let timer = OutputTimer::new(&counter, starting_count, refresh, &config)
            .with_context(|| format!("creating timer for {name}"))?;
        if let Some(interval) = refresh.seconds_per_refresh() {
            shortest_refresh = shortest_refresh.min(interval);
        }
        log::info!("{name}: {refresh}");
        outputs.push(timer);
    }

    let mut hub = TimingCoordinator::new(config).context("creating timing coordinator")?;
    run_loop(&mut hub, &mut outputs, run_seconds, shortest_refresh);

    log::info!("run finished after {run_seconds} s");
    Ok(())
}

/// Run duration in whole seconds, taken from the first CLI argument.
fn run_seconds() -> Result<u64> {
    match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>().with_context(|| {
            format!("run duration must be a whole number of seconds, got {arg:?}")
        }),
        None => Ok(5),
    }
}

/// Drives the lock-step presentation loop over every simulated output.
///
/// Render work is a small uneven sleep per output, so the coordinator sees a
/// realistic spread instead of three identical zero-cost renders.
fn run_loop(
    hub: &mut TimingCoordinator,
    outputs: &mut [OutputTimer],
    run_seconds: u64,
    shortest_refresh: f64,
) {
    // The fastest simulated output paces the loop, a stand-in for vsync.
    let frame_pacing = Duration::from_secs_f64(shortest_refresh.min(0.1));
    let mut logged_seconds = 0;

    for frame in 0u64.. {
        hub.loop_started(outputs.iter());
        for timer in outputs.iter_mut() {
            timer.update(hub);
        }

        for (index, timer) in outputs.iter_mut().enumerate() {
            // 200-360 µs of pretend render work, phase-shifted per output.
            let busy = 200 + 40 * ((frame + index as u64) % 5);
            thread::sleep(Duration::from_micros(busy));
            timer.render_complete();
        }

        hub.loop_complete();

        let elapsed = outputs[0].seconds_since_start();
        if elapsed as u64 > logged_seconds {
            logged_seconds = elapsed as u64;
            log_status(hub, &outputs[0]);
        }
        if elapsed >= run_seconds as f64 {
            break;
        }

        thread::sleep(frame_pacing);
    }
}

/// One status line per elapsed second, in the shape a HUD row would take.
fn log_status(hub: &TimingCoordinator, lead: &OutputTimer) {
    let status = match hub.current_error() {
        Some(error) => error.to_string(),
        None => String::from("ok"),
    };
    let metric = match hub.secondary_mode() {
        SecondaryMetric::FrameTime { .. } => "frame time",
        SecondaryMetric::Accuracy { .. } => "accuracy",
    };
    log::info!(
        "fps {:>3} | column {} value {} | variance {:.2} ms | {metric} {:.2} ms | {status}",
        hub.fps(),
        lead.column(),
        lead.timer_value(),
        hub.render_variance() * 1_000.0,
        hub.secondary_metric() * 1_000.0,
    );
}
