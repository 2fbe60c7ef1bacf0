//! Frame loop of the headless sketch: warm-up, pacing, pause/resume,
//! strategy swaps and draw recording.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use glam::{Mat3, Vec2};

use easel::components::anchor::{Center, ImageFit, Radii, Radius, TopLeftCorner};
use easel::components::rotation::Rotation;
use easel::components::style::Color;
use easel::math::Angle;
use easel::placement::make_transform;
use easel::resources::canvassize::CanvasSize;
use easel::resources::clock::{Clock, TimeMode};
use easel::resources::drawlist::{DrawList, Shape};
use easel::resources::framepacing::FramerateMode;
use easel::resources::sketchconfig::SketchConfig;
use easel::resources::timesource::ManualTimeSource;
use easel::resources::transformstack::TransformStack;
use easel::resources::worldtime::WorldTime;
use easel::sketch::Sketch;
use easel::systems::time::FrameStep;

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn fixed_config(framerate: f64) -> SketchConfig {
    SketchConfig {
        time_mode: TimeMode::FixedTimestep { framerate },
        ..SketchConfig::new()
    }
}

fn manual_sketch(config: SketchConfig) -> (ManualTimeSource, Sketch) {
    let source = ManualTimeSource::new();
    let sketch = Sketch::with_time_source(config, Arc::new(source.clone()));
    (source, sketch)
}

fn draw_one_square(mut list: ResMut<DrawList>, stack: Res<TransformStack>) {
    list.rectangle(
        &stack,
        make_transform(Center(Vec2::ZERO), Radius(0.5), Rotation::default()),
    );
}

fn run_frames(sketch: &mut Sketch, frames: usize) -> Vec<FrameStep> {
    (0..frames).map(|_| sketch.frame()).collect()
}

#[test]
fn fixed_sketch_warms_up_then_steps() {
    let (_, mut sketch) = manual_sketch(fixed_config(60.0));

    assert_eq!(sketch.frame(), FrameStep::WarmUp);
    assert_eq!(sketch.frame(), FrameStep::WarmUp);
    assert!(approx_eq(sketch.time(), 0.0));

    for frame in 1..=120 {
        assert_eq!(sketch.frame(), FrameStep::Advanced);
        assert!(approx_eq(sketch.time(), frame as f64 / 60.0));
    }
    let world_time = sketch.world.resource::<WorldTime>();
    assert_eq!(world_time.frame_count, 120);
    assert!(approx_eq(world_time.elapsed, 2.0));
    assert!(approx_eq(world_time.delta, 1.0 / 60.0));
}

#[test]
fn draw_systems_run_only_on_advanced_frames() {
    let (_, mut sketch) = manual_sketch(fixed_config(30.0));
    sketch.add_draw_systems(draw_one_square);

    sketch.frame();
    assert!(sketch.draw_list().is_empty());
    sketch.frame();
    assert!(sketch.draw_list().is_empty());

    sketch.frame();
    assert_eq!(sketch.draw_list().len(), 1);
    // The list is rebuilt, not appended to.
    sketch.frame();
    assert_eq!(sketch.draw_list().len(), 1);
    assert_eq!(sketch.draw_list().commands()[0].shape, Shape::Rectangle);
}

#[test]
fn pause_freezes_time_and_keeps_the_last_frame() {
    let (_, mut sketch) = manual_sketch(fixed_config(60.0));
    sketch.add_draw_systems(draw_one_square);
    run_frames(&mut sketch, 32);
    let paused_time = sketch.time();
    assert!(approx_eq(paused_time, 0.5));

    sketch.pause();
    assert!(sketch.is_paused());
    let steps = run_frames(&mut sketch, 10);
    assert!(steps.iter().all(|s| *s == FrameStep::Skipped));
    assert!(approx_eq(sketch.time(), paused_time));
    assert!(approx_eq(sketch.delta_time(), 0.0));
    assert_eq!(sketch.draw_list().len(), 1);
    assert_eq!(sketch.world.resource::<WorldTime>().frame_count, 30);

    sketch.resume();
    assert_eq!(sketch.frame(), FrameStep::Advanced);
    assert!(approx_eq(sketch.time(), paused_time + 1.0 / 60.0));
}

#[test]
fn toggle_play_pause_round_trips() {
    let (_, mut sketch) = manual_sketch(fixed_config(60.0));
    run_frames(&mut sketch, 3);
    sketch.toggle_play_pause();
    assert_eq!(sketch.frame(), FrameStep::Skipped);
    sketch.toggle_play_pause();
    assert_eq!(sketch.frame(), FrameStep::Advanced);
}

#[test]
fn starts_paused_when_configured() {
    let config = SketchConfig {
        paused: true,
        ..fixed_config(60.0)
    };
    let (_, mut sketch) = manual_sketch(config);
    let steps = run_frames(&mut sketch, 5);
    assert_eq!(&steps[..2], &[FrameStep::WarmUp, FrameStep::WarmUp]);
    assert!(steps[2..].iter().all(|s| *s == FrameStep::Skipped));
    assert!(approx_eq(sketch.time(), 0.0));
}

#[test]
fn switching_to_realtime_continues_from_current_time() {
    let (source, mut sketch) = manual_sketch(fixed_config(60.0));
    run_frames(&mut sketch, 62);
    assert!(approx_eq(sketch.time(), 1.0));

    sketch.set_time_mode_realtime();
    assert_eq!(sketch.world.resource::<Clock>().mode(), TimeMode::Realtime);
    assert!(approx_eq(sketch.time(), 1.0));

    source.advance_secs(0.5);
    assert_eq!(sketch.frame(), FrameStep::Advanced);
    assert!(approx_eq(sketch.time(), 1.5));

    source.advance_secs(0.25);
    sketch.frame();
    assert!(approx_eq(sketch.time(), 1.75));
    assert!(approx_eq(sketch.delta_time(), 0.25));
}

#[test]
fn switching_to_fixed_keeps_pause_state() {
    let (source, mut sketch) = manual_sketch(SketchConfig::new());
    run_frames(&mut sketch, 2);
    source.advance_secs(2.0);
    sketch.frame();
    assert!(approx_eq(sketch.time(), 2.0));

    sketch.pause();
    sketch.set_time_mode_fixedstep(25.0);
    assert!(sketch.is_paused());
    assert!(approx_eq(sketch.time(), 2.0));

    sketch.resume();
    sketch.frame();
    assert!(approx_eq(sketch.time(), 2.04));
}

#[test]
fn capped_pacing_skips_early_frames() {
    let config = SketchConfig {
        framerate_mode: FramerateMode::CappedAt(10.0),
        ..SketchConfig::new()
    };
    let (source, mut sketch) = manual_sketch(config);
    run_frames(&mut sketch, 2);

    assert_eq!(sketch.frame(), FrameStep::Advanced);
    assert_eq!(sketch.frame(), FrameStep::Skipped);
    source.advance_secs(0.05);
    assert_eq!(sketch.frame(), FrameStep::Skipped);
    source.advance_secs(0.06);
    assert_eq!(sketch.frame(), FrameStep::Advanced);
    assert!(approx_eq(sketch.time(), 0.11));
}

#[test]
fn uncapped_pacing_never_skips() {
    let config = SketchConfig {
        framerate_mode: FramerateMode::AsHighAsPossible,
        ..SketchConfig::new()
    };
    let (_, mut sketch) = manual_sketch(config);
    let steps = run_frames(&mut sketch, 12);
    assert!(steps[2..].iter().all(|s| *s == FrameStep::Advanced));
}

fn draw_with_stack(
    mut list: ResMut<DrawList>,
    mut stack: ResMut<TransformStack>,
    canvas: Res<CanvasSize>,
) {
    list.full_screen_rectangle(&stack, &canvas);
    stack.push_transform();
    stack.translate(Vec2::new(0.5, 0.0));
    stack.rotate(Angle::from_degrees(90.0));
    list.ellipse(
        &stack,
        make_transform(TopLeftCorner(Vec2::ZERO), Radii::new(0.2, 0.1), Rotation::default()),
    );
    stack.pop_transform();
    list.image_fit(&stack, &canvas, 1.0, ImageFit::Fit);
}

#[test]
fn draw_commands_carry_the_stack_matrix() {
    let (_, mut sketch) = manual_sketch(fixed_config(60.0));
    sketch.add_draw_systems(draw_with_stack);
    run_frames(&mut sketch, 3);

    let canvas = sketch.canvas();
    let commands = sketch.draw_list().commands();
    assert_eq!(commands.len(), 3);

    let full = &commands[0];
    assert_eq!(full.shape, Shape::Rectangle);
    assert!((full.transform.scale.x - canvas.aspect_ratio()).abs() < 1e-6);
    assert_eq!(full.matrix, full.transform.matrix());

    let ellipse = &commands[1];
    assert_eq!(ellipse.shape, Shape::Ellipse);
    let stack = Mat3::from_translation(Vec2::new(0.5, 0.0))
        * Mat3::from_angle(Angle::from_degrees(90.0).as_radians());
    assert!(ellipse.matrix.abs_diff_eq(stack * ellipse.transform.matrix(), 1e-5));

    let image = &commands[2];
    assert_eq!(image.shape, Shape::Image { aspect_ratio: 1.0 });
    assert_eq!(image.matrix, image.transform.matrix());
    assert_eq!(sketch.world.resource::<TransformStack>().depth(), 0);
}

#[test]
fn tiny_configured_cap_runs_uncapped() {
    let mut config = SketchConfig::new();
    config
        .load_from_str("[framerate]\nmode = capped\ncap = 1e-25\n")
        .unwrap();
    let (source, mut sketch) = manual_sketch(config);
    let steps = run_frames(&mut sketch, 4);
    assert!(steps[2..].iter().all(|s| *s == FrameStep::Advanced));
    source.advance_secs(0.5);
    assert_eq!(sketch.frame(), FrameStep::Advanced);
    assert!(approx_eq(sketch.time(), 0.5));
}

#[test]
fn invalid_fixedstep_request_keeps_the_clock() {
    let (_, mut sketch) = manual_sketch(fixed_config(30.0));
    run_frames(&mut sketch, 5);
    sketch.set_time_mode_fixedstep(0.0);
    sketch.set_time_mode_fixedstep(f64::NAN);
    assert_eq!(
        sketch.world.resource::<Clock>().mode(),
        TimeMode::FixedTimestep { framerate: 30.0 }
    );
    sketch.frame();
    assert!(approx_eq(sketch.time(), 4.0 / 30.0));
}

fn draw_styled_segment(mut list: ResMut<DrawList>, stack: Res<TransformStack>) {
    list.stroke(Color::rgb(0.0, 0.5, 1.0));
    list.stroke_weight(0.05);
    list.line(&stack, Vec2::new(-0.5, -0.5), Vec2::new(0.5, 0.5));
    list.no_fill();
    list.triangle(&stack, Vec2::ZERO, Vec2::X, Vec2::Y);
}

#[test]
fn line_and_triangle_record_their_style() {
    let (_, mut sketch) = manual_sketch(fixed_config(60.0));
    sketch.add_draw_systems(draw_styled_segment);
    run_frames(&mut sketch, 3);

    let commands = sketch.draw_list().commands();
    assert_eq!(commands.len(), 2);

    let line = &commands[0];
    assert_eq!(line.shape, Shape::Line);
    assert_eq!(line.style.stroke, Color::rgb(0.0, 0.5, 1.0));
    assert!(line.style.use_fill);
    let dir = Vec2::new(1.0, 1.0).normalize();
    let start_cap = line.matrix.transform_point2(Vec2::new(-1.0, 0.0));
    let end_cap = line.matrix.transform_point2(Vec2::new(1.0, 0.0));
    assert!((start_cap - (Vec2::new(-0.5, -0.5) - dir * 0.05)).length() < 1e-5);
    assert!((end_cap - (Vec2::new(0.5, 0.5) + dir * 0.05)).length() < 1e-5);

    let triangle = &commands[1];
    assert!(!triangle.style.use_fill);
    assert_eq!(
        triangle.shape,
        Shape::Triangle {
            points: [Vec2::ZERO, Vec2::X, Vec2::Y]
        }
    );

    // Style carries over to the next frame.
    assert!(!sketch.draw_list().style.use_fill);
}
