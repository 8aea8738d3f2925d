//! Autohelm host simulator.
//!
//! Drives the controller the way a real host would: operator lines from
//! stdin become command activations, and the `ticks` verb advances a tick
//! counter that maps the scheduler's armed cadences onto fast/slow
//! activations. The simulator owns the host side of every port: the
//! configuration text field, a small device index, and the status surface
//! (printed to stdout).
//!
//! Simulator verbs (everything else is sent to the controller):
//!
//! ```text
//!   ticks <n>   advance the host clock by n ticks
//!   report      print the controller state snapshot as JSON
//!   field       dump the raw configuration field
//!   quit        exit
//! ```

use anyhow::Result;
use std::io::{self, BufRead, Write};

use autohelm::app::activation::Activation;
use autohelm::app::ports::{
    CAP_TEXT_SURFACE, ConfigFieldPort, DeviceIndexPort, DeviceQuery, DeviceRef, NameMatch,
    StatusSink,
};
use autohelm::app::service::Controller;
use autohelm::scheduler::Cadence;

// ── Host simulation ───────────────────────────────────────────

struct SimHost {
    field: String,
    devices: Vec<(DeviceRef, &'static str)>,
    tick: u64,
}

impl SimHost {
    fn new() -> Self {
        Self {
            field: String::new(),
            devices: vec![
                (
                    DeviceRef {
                        id: 1,
                        name: "Console Display".to_string(),
                    },
                    CAP_TEXT_SURFACE,
                ),
                (
                    DeviceRef {
                        id: 2,
                        name: "Aux Pump".to_string(),
                    },
                    "pump",
                ),
            ],
            tick: 0,
        }
    }
}

impl ConfigFieldPort for SimHost {
    fn read(&self) -> String {
        self.field.clone()
    }

    fn write(&mut self, contents: &str) {
        self.field = contents.to_string();
    }
}

impl StatusSink for SimHost {
    fn present(&mut self, target: Option<&DeviceRef>, text: &str) {
        let surface = target.map_or("default", |d| d.name.as_str());
        println!("── status [{surface}] ──");
        println!("{text}");
        println!("────────────────────");
    }
}

impl DeviceIndexPort for SimHost {
    // The whole simulation is one connected structure, so a
    // `same_construct_as` restriction never excludes anything.
    fn first_matching(&self, query: &DeviceQuery<'_>) -> Option<DeviceRef> {
        self.devices
            .iter()
            .filter(|(_, cap)| *cap == query.capability)
            .find(|(dev, _)| match query.name {
                NameMatch::Any => true,
                NameMatch::Prefix(p) => dev.name.starts_with(p),
                NameMatch::Contains(c) => dev.name.contains(c),
            })
            .map(|(dev, _)| dev.clone())
    }
}

// ── Tick driving ──────────────────────────────────────────────

/// Advance the host clock, re-invoking the controller on every cadence the
/// scheduler currently has armed.
fn advance_ticks(controller: &mut Controller, host: &mut SimHost, count: u64) {
    for _ in 0..count {
        host.tick += 1;
        let armed = controller.armed();
        if armed.contains(Cadence::Fast) {
            controller.activate(Activation::FastTick, host);
        }
        if armed.contains(Cadence::Slow) && host.tick % 10 == 0 {
            controller.activate(Activation::SlowTick10, host);
        }
        if armed.contains(Cadence::Slow) && host.tick % 100 == 0 {
            controller.activate(Activation::SlowTick100, host);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut controller = Controller::new();
    let mut host = SimHost::new();

    controller.activate(Activation::Initialize, &mut host);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line.split_once(' ').map_or((line, ""), |(a, b)| (a, b)) {
            ("quit" | "exit", _) => break,
            ("ticks", n) => {
                let count: u64 = n.trim().parse().unwrap_or(1);
                advance_ticks(&mut controller, &mut host, count);
                println!("tick {}", host.tick);
            }
            ("report", _) => {
                println!("{}", serde_json::to_string_pretty(&controller.report())?);
            }
            ("field", _) => {
                println!("{}", host.field);
            }
            _ => controller.activate(Activation::Command(line), &mut host),
        }
    }

    Ok(())
}
