//! Easel command-line entry point.
//!
//! Runs a small demo sketch without a window for a number of frames and
//! reports, for every frame, the clock state and the shapes that were
//! recorded in the draw list.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --frames 120 --fixed 30 --pause-at 40 --resume-at 60 --json
//! ```

use std::path::PathBuf;
use std::process;

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use log::{error, info};
use serde::Serialize;

use easel::components::anchor::{Center, ImageFit, Radii, Radius, TopLeftCorner};
use easel::components::rotation::Rotation;
use easel::components::style::Color;
use easel::math::{Angle, AngleExt};
use easel::placement::make_transform;
use easel::random;
use easel::resources::canvassize::CanvasSize;
use easel::resources::clock::TimeMode;
use easel::resources::drawlist::{DrawCommand, DrawList};
use easel::resources::sketchconfig::SketchConfig;
use easel::resources::transformstack::TransformStack;
use easel::resources::worldtime::WorldTime;
use easel::sketch::Sketch;
use easel::systems::time::FrameStep;

/// Easel headless sketch runner
#[derive(Parser)]
#[command(version, about = "Runs an easel sketch headlessly and reports its frames.")]
struct Cli {
    /// INI configuration file. Defaults are used when missing.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Use a fixed timestep at this framerate instead of the configured time mode.
    #[arg(long, value_name = "FPS")]
    fixed: Option<f64>,

    /// Pause the clock when this frame starts.
    #[arg(long, value_name = "FRAME")]
    pause_at: Option<u64>,

    /// Resume the clock when this frame starts.
    #[arg(long, value_name = "FRAME")]
    resume_at: Option<u64>,

    /// Seed for the random generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report on stdout.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

#[derive(Serialize)]
struct FrameReport {
    frame: u64,
    step: &'static str,
    time: f64,
    delta_time: f64,
    commands: Vec<DrawCommand>,
}

/// Positions of the background dots, picked once at startup.
#[derive(Resource)]
struct Dots(Vec<Vec2>);

fn demo_draw(
    time: Res<WorldTime>,
    canvas: Res<CanvasSize>,
    dots: Res<Dots>,
    mut stack: ResMut<TransformStack>,
    mut draw: ResMut<DrawList>,
) {
    let t = time.elapsed_f32();
    let ar = canvas.aspect_ratio();

    draw.fill(Color::rgb(0.1, 0.1, 0.15));
    draw.no_stroke();
    draw.full_screen_rectangle(&stack, &canvas);
    draw.fill(Color::new(1.0, 1.0, 1.0, 0.5));
    draw.stroke(Color::BLACK);
    draw.image_fit(&stack, &canvas, 4.0 / 3.0, ImageFit::Fit);

    for dot in &dots.0 {
        draw.ellipse(&stack, make_transform(Center(*dot), Radius(0.01), Rotation::default()));
    }

    // Spinning card pinned to the top-left corner of the canvas.
    draw.rectangle(
        &stack,
        make_transform(
            TopLeftCorner(Vec2::new(-ar, 1.0)),
            Radii::new(0.3, 0.15),
            Rotation(Angle::from_turns(0.1 * t)),
        ),
    );

    // Clock hand and a small marker at its tip.
    let tip = Angle::from_turns(-t / 60.0).direction() * 0.8;
    draw.stroke_weight(0.02);
    draw.line(&stack, Vec2::ZERO, tip);
    draw.triangle(&stack, tip, tip + Vec2::new(0.05, 0.0), tip + Vec2::new(0.0, 0.05));

    // Moon orbiting the center.
    stack.push_transform();
    stack.rotate(Angle::from_turns(0.25 * t));
    draw.ellipse(
        &stack,
        make_transform(Center(Vec2::new(0.5, 0.0)), Radius(0.1), 45.0_f32.degrees()),
    );
    stack.pop_transform();
}

fn step_name(step: FrameStep) -> &'static str {
    match step {
        FrameStep::WarmUp => "warm-up",
        FrameStep::Advanced => "advanced",
        FrameStep::Skipped => "skipped",
    }
}

fn load_config(cli: &Cli) -> Result<SketchConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = SketchConfig::with_path(path);
            config.load_from_file()?;
            config
        }
        None => {
            let mut config = SketchConfig::new();
            // A missing default config file is fine: keep the defaults.
            config.load_from_file().ok();
            config
        }
    };

    if let Some(framerate) = cli.fixed {
        if framerate.is_nan() || framerate <= 0.0 {
            return Err(format!("--fixed must be a positive framerate, got {}", framerate));
        }
        config.time_mode = TimeMode::FixedTimestep { framerate };
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;

    if let Some(path) = &cli.save_config {
        let mut to_save = config.clone();
        to_save.config_path = path.clone();
        return to_save.save_to_file();
    }

    if let Some(seed) = cli.seed {
        random::seed(seed);
    }

    let mut sketch = Sketch::new(config);
    let ar = sketch.canvas().aspect_ratio();
    let dots = (0..16).map(|_| random::point(ar)).collect();
    sketch.world.insert_resource(Dots(dots));
    sketch.add_draw_systems(demo_draw);

    let mut reports = Vec::new();
    for frame in 0..cli.frames {
        if cli.pause_at == Some(frame) {
            sketch.pause();
        }
        if cli.resume_at == Some(frame) {
            sketch.resume();
        }

        let step = sketch.frame();
        let report = FrameReport {
            frame,
            step: step_name(step),
            time: sketch.time(),
            delta_time: sketch.delta_time(),
            commands: sketch.draw_list().commands().to_vec(),
        };
        if !cli.json {
            info!(
                "frame {:>4} [{}] t={:.4}s dt={:.4}s, {} shapes",
                report.frame,
                report.step,
                report.time,
                report.delta_time,
                report.commands.len()
            );
        }
        reports.push(report);
    }

    if cli.json {
        let text = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", text);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}
