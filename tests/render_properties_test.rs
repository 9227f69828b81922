use std::collections::HashSet;

use ascii_torus::core::{
    Frame, PlotOutcome, Projected, Rasterizer, Renderer, Rotation, TorusConfig,
};
use ascii_torus::types::{RotationAngles, BLANK, GLYPH_RAMP};

fn renderer_80x24() -> Renderer {
    Renderer::new(TorusConfig::default().with_screen(80, 24)).unwrap()
}

/// Every projected sample in the renderer's native iteration order.
fn collect_samples(renderer: &Renderer, angles: RotationAngles) -> Vec<Projected> {
    let rot = Rotation::new(angles);
    let sampler = renderer.sampler();
    let mut out = Vec::with_capacity(sampler.sample_count());
    for section in sampler.cross_sections() {
        for &phi in sampler.revolutions() {
            out.push(renderer.projection().project(&rot, section, phi));
        }
    }
    out
}

fn rasterize(renderer: &Renderer, samples: impl IntoIterator<Item = Projected>) -> Frame {
    let mut raster = Rasterizer::new(renderer.ramp().clone());
    let mut frame = renderer.new_frame();
    raster.begin(&mut frame);
    for p in samples {
        raster.plot(&mut frame, p);
    }
    frame
}

fn angle_grid() -> Vec<RotationAngles> {
    let mut out = Vec::new();
    for i in 0..12 {
        for j in 0..6 {
            out.push(RotationAngles::new(i as f32 * 0.55, j as f32 * 1.07 - 2.0));
        }
    }
    // Large unwrapped angles, as a driver that never wraps would pass.
    out.push(RotationAngles::new(1000.0, -733.5));
    out.push(RotationAngles::new(-12.25, 4096.0));
    out
}

#[test]
fn only_ramp_glyphs_or_blank_are_written() {
    let mut renderer = renderer_80x24();
    let mut frame = renderer.new_frame();
    for angles in angle_grid() {
        renderer.render_into(angles, &mut frame);
        for &ch in frame.cells() {
            assert!(
                ch == BLANK || GLYPH_RAMP.contains(ch),
                "unexpected glyph {ch:?} at {angles:?}"
            );
        }
    }
}

#[test]
fn frame_dimensions_hold_for_all_angles() {
    let mut renderer = renderer_80x24();
    let mut frame = renderer.new_frame();
    for angles in angle_grid() {
        renderer.render_into(angles, &mut frame);
        assert_eq!(frame.cells().len(), 80 * 24);
        // Row 0 and column 0 are never drawn.
        for x in 0..80 {
            assert!(frame.is_blank(x, 0));
        }
        for y in 0..24 {
            assert!(frame.is_blank(0, y));
        }
    }
}

/// Exact depth ties go to the brighter sample, so the per-cell winner is the
/// maximum of `(depth, luminance)` and no cell may differ between orders.
#[test]
fn depth_resolution_is_order_independent() {
    let renderer = renderer_80x24();
    let mut checked = 0;
    for i in 0..40 {
        for j in 0..15 {
            let angles = RotationAngles::new(i as f32 * 0.157, j as f32 * 0.419 - 3.0);
            let samples = collect_samples(&renderer, angles);
            let forward = rasterize(&renderer, samples.iter().copied());
            let backward = rasterize(&renderer, samples.iter().rev().copied());
            assert_eq!(forward, backward, "order changed the frame at {angles:?}");
            checked += 1;
        }
    }
    assert_eq!(checked, 600);
}

#[test]
fn native_order_matches_renderer_output() {
    let mut renderer = renderer_80x24();
    let angles = RotationAngles::new(2.0, 1.0);
    let samples = collect_samples(&renderer, angles);
    assert_eq!(rasterize(&renderer, samples), renderer.render(angles));
}

#[test]
fn back_facing_samples_never_influence_output() {
    let mut renderer = renderer_80x24();
    for angles in [RotationAngles::new(0.0, 0.0), RotationAngles::new(2.5, 0.9)] {
        let lit: Vec<Projected> = collect_samples(&renderer, angles)
            .into_iter()
            .filter(|p| p.luminance > 0.0)
            .collect();
        assert_eq!(rasterize(&renderer, lit), renderer.render(angles));
    }
}

#[test]
fn closer_of_two_samples_owns_the_cell() {
    let renderer = renderer_80x24();
    let near = Projected {
        x: 10,
        y: 5,
        ooz: 0.4,
        luminance: 0.05,
    };
    let far = Projected {
        x: 10,
        y: 5,
        ooz: 0.2,
        luminance: 1.4,
    };

    for order in [[near, far], [far, near]] {
        let mut raster = Rasterizer::new(renderer.ramp().clone());
        let mut frame = renderer.new_frame();
        raster.begin(&mut frame);
        let outcomes: Vec<PlotOutcome> = order.iter().map(|&p| raster.plot(&mut frame, p)).collect();
        assert!(outcomes.contains(&PlotOutcome::Plotted));
        assert_eq!(frame.get(10, 5), Some('.'));
        assert_eq!(raster.depth().get(10, 5), Some(0.4));
    }
}

#[test]
fn rendering_is_deterministic() {
    let mut a = renderer_80x24();
    let mut b = renderer_80x24();
    for angles in [RotationAngles::new(0.9, 0.4), RotationAngles::new(5.1, 3.3)] {
        let first = a.render(angles);
        assert_eq!(first, a.render(angles));
        assert_eq!(first.to_string(), b.render(angles).to_string());
    }
}

#[test]
fn unrotated_torus_is_left_right_symmetric() {
    let mut renderer = renderer_80x24();
    let frame = renderer.render(RotationAngles::new(0.0, 0.0));
    let occupied: HashSet<(i32, i32)> = frame
        .occupied()
        .map(|(x, y)| (i32::from(x), i32::from(y)))
        .collect();
    assert!(!occupied.is_empty());

    // Column c mirrors to 80 - c around the center column 40, same row,
    // within one column either way.
    let unmatched = occupied
        .iter()
        .filter(|&&(x, y)| !(-1..=1).any(|dx| occupied.contains(&(80 - x + dx, y))))
        .count();
    // Sampling on the lit/unlit boundary can leave a stray cell or two.
    assert!(
        unmatched <= 3,
        "{unmatched} of {} cells have no mirror",
        occupied.len()
    );
}

#[test]
fn reference_scenario_80x24() {
    let mut renderer = renderer_80x24();
    let frame = renderer.render(RotationAngles::new(0.0, 0.0));

    for (x, y) in [(0, 0), (79, 0), (0, 23), (79, 23)] {
        assert!(frame.is_blank(x, y), "corner ({x},{y}) is drawn");
    }

    let near_center = frame
        .occupied()
        .any(|(x, y)| x.abs_diff(40) <= 4 && y.abs_diff(12) <= 2);
    assert!(near_center, "nothing drawn near the center:\n{frame}");
}

#[test]
fn hundred_frame_run_keeps_shape() {
    let mut renderer = renderer_80x24();
    let mut frame = renderer.new_frame();
    let mut angles = RotationAngles::default();

    for _ in 0..100 {
        renderer.render_into(angles, &mut frame);

        let text = frame.to_string();
        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|line| line.chars().count() == 80));

        angles.advance(0.04, 0.02);
    }
}
