use std::f64::consts::FRAC_PI_2;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::canvas::{Canvas, Line as Stroke};
use ratatui::widgets::{Block, Borders};

use crate::app::App;

// Logical canvas bounds; braille cells interpolate the rest
const STAGE_W: f64 = 200.0;
const STAGE_H: f64 = 100.0;

/// Fraction of a node's slot its strokes span
const SPAN_RATIO: f64 = 0.62;

/// Render the chain stage.
///
/// Each node owns `regions` sub-strokes pivoting on the baseline. At
/// progress 0 they stand upright as a picket of ticks; as the node
/// expands they swing down and join into one continuous run of the
/// baseline. The active node is painted in the accent color.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let node_count = app.chain.node_count();
    let regions = app.regions;
    let active = app.chain.active_index();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.style_border())
                .title(" chainline "),
        )
        .background_color(theme.bg)
        .x_bounds([0.0, STAGE_W])
        .y_bounds([0.0, STAGE_H])
        .paint(|ctx| {
            // Faint baseline the strokes settle onto
            ctx.draw(&Stroke {
                x1: 0.0,
                y1: STAGE_H / 2.0,
                x2: STAGE_W,
                y2: STAGE_H / 2.0,
                color: theme.fg_dim,
            });

            app.chain.render(|index, progress| {
                let color = if index == active {
                    theme.stroke_active
                } else {
                    theme.stroke
                };
                for (x1, y1, x2, y2) in node_strokes(index, progress, node_count, regions) {
                    ctx.draw(&Stroke {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    });
                }
            });
        });

    frame.render_widget(canvas, area);
}

/// Stroke endpoints for one node, in stage coordinates.
///
/// The core's progress can transiently overshoot [0, 1] on the final
/// step of a transition; it is clamped here for geometry only.
fn node_strokes(
    index: usize,
    progress: f32,
    node_count: usize,
    regions: u16,
) -> Vec<(f64, f64, f64, f64)> {
    let progress = f64::from(progress).clamp(0.0, 1.0);
    let slot = STAGE_W / node_count as f64;
    let span = slot * SPAN_RATIO;
    let left = slot * index as f64 + (slot - span) / 2.0;
    let base_y = STAGE_H / 2.0;

    let seg = span / f64::from(regions);
    let angle = (1.0 - progress) * FRAC_PI_2;
    (0..regions)
        .map(|j| {
            let pivot_x = left + seg * f64::from(j);
            (
                pivot_x,
                base_y,
                pivot_x + seg * angle.cos(),
                base_y + seg * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn one_stroke_per_region() {
        assert_eq!(node_strokes(0, 0.0, 5, 3).len(), 3);
        assert_eq!(node_strokes(4, 1.0, 5, 7).len(), 7);
    }

    #[test]
    fn collapsed_strokes_stand_upright() {
        for (x1, y1, x2, y2) in node_strokes(2, 0.0, 5, 3) {
            assert!((x2 - x1).abs() < EPS);
            assert!(y2 > y1);
        }
    }

    #[test]
    fn expanded_strokes_join_the_baseline() {
        let strokes = node_strokes(2, 1.0, 5, 3);
        for (x1, y1, x2, y2) in &strokes {
            assert!((y2 - y1).abs() < EPS);
            assert!(x2 > x1);
        }
        // Adjacent strokes meet end to start: one continuous run
        for pair in strokes.windows(2) {
            assert!((pair[0].2 - pair[1].0).abs() < EPS);
        }
    }

    #[test]
    fn overshoot_progress_is_clamped_for_geometry() {
        assert_eq!(node_strokes(0, 1.05, 5, 3), node_strokes(0, 1.0, 5, 3));
        assert_eq!(node_strokes(0, -0.02, 5, 3), node_strokes(0, 0.0, 5, 3));
    }

    #[test]
    fn nodes_occupy_disjoint_slots() {
        let a = node_strokes(0, 1.0, 5, 3);
        let b = node_strokes(1, 1.0, 5, 3);
        let a_right = a.last().unwrap().2;
        let b_left = b.first().unwrap().0;
        assert!(a_right < b_left);
    }
}
