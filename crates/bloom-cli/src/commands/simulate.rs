//! Run a scene headless against a scripted gesture stream

use anyhow::{Context, Result};
use bloom_gesture::{GestureSession, ScriptedSource};
use bloom_runtime::Mode;
use serde::Serialize;

use bloom_scene::Scene;

use super::load_config;

pub struct SimulateArgs {
    pub config: Option<String>,
    pub script: Option<String>,
    pub fps: f64,
    pub frames: u64,
    /// (frame, mode) overrides applied before that frame
    pub overrides: Vec<(u64, Mode)>,
    pub format: String,
}

#[derive(Serialize)]
struct TransitionRecord {
    frame: u64,
    elapsed: f64,
    mode: Mode,
    source: String,
}

#[derive(Serialize)]
struct Summary {
    frames: u64,
    final_mode: Mode,
    gesture_status: String,
    progress: Vec<(String, f32)>,
    transitions: Vec<TransitionRecord>,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut scene = Scene::new(config)?;

    let source = match &args.script {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading gesture script {path}"))?;
            ScriptedSource::from_json(&json)
                .with_context(|| format!("parsing gesture script {path}"))?
        }
        None => ScriptedSource::failing("no gesture script given"),
    };
    let mut session = GestureSession::open(source);

    let dt = 1.0 / args.fps.max(1.0);
    let mut transitions = Vec::new();

    for frame in 0..args.frames {
        for (_, mode) in args.overrides.iter().filter(|(f, _)| *f == frame) {
            if scene.set_mode(*mode) {
                log::info!("frame {frame}: manual override -> {mode}");
            }
        }
        scene.step_with_session(&mut session, dt)?;
        record_transitions(&mut scene, frame, &mut transitions);
    }

    let progress = ["foliage", "petals"]
        .iter()
        .filter_map(|name| scene.layer(name).map(|l| (name.to_string(), l.progress())))
        .chain(std::iter::once((
            "photos".to_string(),
            scene.photos().progress(),
        )))
        .collect();

    let summary = Summary {
        frames: scene.frame_count(),
        final_mode: scene.mode(),
        gesture_status: session.status().to_string(),
        progress,
        transitions,
    };
    scene.shutdown()?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary_text(&summary);
    }
    Ok(())
}

/// Move the scene's queued transitions for `frame` into `out`
fn record_transitions(scene: &mut Scene, frame: u64, out: &mut Vec<TransitionRecord>) {
    let elapsed = scene.elapsed();
    out.extend(scene.drain_events().into_iter().map(|event| TransitionRecord {
        frame,
        elapsed,
        mode: event.mode,
        source: format!("{:?}", event.source).to_lowercase(),
    }));
}

fn print_summary_text(summary: &Summary) {
    println!("Simulated {} frame(s), gesture source {}", summary.frames, summary.gesture_status);
    if summary.transitions.is_empty() {
        println!("  No transitions.");
    }
    for t in &summary.transitions {
        println!(
            "  [frame {:>5}] {:>7.3}s  -> {} ({})",
            t.frame, t.elapsed, t.mode, t.source
        );
    }
    println!("Final mode: {}", summary.final_mode);
    for (name, p) in &summary.progress {
        println!("  {name:<8} progress {p:.3}");
    }
}
