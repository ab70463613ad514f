use nalgebra::Vector2;
use stepview_core::app::context::AppContext;
use stepview_core::app::info::AppInfo;
use stepview_core::app::update::Update;
use stepview_core::layout::{Dimension, LayoutNode, LayoutStyle, StyleNode};
use stepview_core::signal::{MaybeSignal, StateSignal};
use stepview_core::text_render::TextRenderContext;
use stepview_core::vg::kurbo::{Affine, Circle, Line, Stroke};
use stepview_core::vg::peniko::{Brush, Color, Fill};
use stepview_core::vg::Scene;
use stepview_core::widget::{Widget, WidgetLayoutExt};
use stepview_theme::id::WidgetId;
use stepview_theme::theme::Theme;

/// Steps are numbered from 1 externally.
const START_STEP: usize = 1;

/// Approximate gap added to the font size for the label line height.
const LABEL_LINE_GAP: f32 = 7.5;

/// A horizontal step indicator.
///
/// Renders one numbered circle per step, connected by lines. Steps up to the
/// current one are drawn completed (ring + colored fill), the rest pending
/// (flat disc). Each circle carries its 1-based number and its label below,
/// with the current step's label highlighted.
///
/// The step sequence and the current step live in a shared [StepViewState]
/// handle, so host code can drive the indicator from callbacks.
///
/// ### Theming
/// You can style the step indicator using following properties:
/// - `color_circle` - Base color of circles and pending connector lines.
/// - `color_text` - Label color of non-current steps.
/// - `color_selected` - Completed fill, completed line and current-label color.
/// - `fill_radius` - Radius of the inner circle fill.
/// - `stroke_width` - Width of the completed-circle ring.
/// - `line_width` - Width of the connector lines.
/// - `drawable_padding` - Vertical gap between circle and label.
/// - `text_size` - Font size of numbers and labels.
pub struct StepView {
    state: StepViewState,
    layout_style: MaybeSignal<LayoutStyle>,
    resolved: StepStyle,
    pending_relayout: bool,
    text_render: TextRenderContext,
}

impl StepView {
    /// Create a new step indicator rendering the given shared state.
    pub fn new(state: StepViewState) -> Self {
        Self {
            state,
            layout_style: LayoutStyle::default().into(),
            resolved: StepStyle::default(),
            pending_relayout: false,
            text_render: TextRenderContext::new(),
        }
    }

    /// Returns a clone of the shared state handle.
    pub fn state(&self) -> StepViewState {
        self.state.clone()
    }
}

impl WidgetLayoutExt for StepView {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

impl Widget for StepView {
    fn render(
        &mut self,
        scene: &mut Scene,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        _info: &mut AppInfo,
        context: AppContext,
    ) {
        let style = StepStyle::resolve(theme, self.widget_id());
        if style != self.resolved {
            // metrics feed the preferred height, so a theme override on the
            // first frame needs one relayout
            self.resolved = style.clone();
            self.pending_relayout = true;
            context.request(Update::LAYOUT);
        }

        let model = self.state.snapshot();
        if model.steps.is_empty() {
            return;
        }

        let x = layout_node.layout.location.x as f64;
        let y = layout_node.layout.location.y as f64;
        let width = layout_node.layout.size.width as f64;

        let big_radius = style.fill_radius + style.stroke_width;
        let center_y = y + big_radius;
        let geometry = compute_geometry(width, model.steps.len(), model.current, big_radius);

        for circle in &geometry.circles {
            let center_x = x + circle.center_x;

            if circle.completed {
                scene.stroke(
                    &Stroke::new(style.stroke_width),
                    Affine::IDENTITY,
                    &Brush::Solid(style.color_circle),
                    None,
                    &Circle::new(
                        (center_x, center_y),
                        style.fill_radius + style.stroke_width / 2.0,
                    ),
                );
                scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    style.color_selected,
                    None,
                    &Circle::new((center_x, center_y), style.fill_radius),
                );
            } else {
                scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    style.color_circle,
                    None,
                    &Circle::new((center_x, center_y), big_radius),
                );
            }

            let number = circle.number.to_string();
            let metrics = self.text_render.measure(&number, style.text_size, true);
            self.text_render.render_text(
                scene,
                &number,
                style.text_size,
                true,
                Brush::Solid(Color::WHITE),
                Affine::translate((
                    center_x - metrics.width as f64 / 2.0,
                    center_y - (metrics.ascent + metrics.descent) as f64 / 2.0,
                )),
                true,
                None,
            );

            let label = &model.steps[circle.number - 1];
            let label_color = if circle.selected {
                style.color_selected
            } else {
                style.color_text
            };
            let metrics = self.text_render.measure(label, style.text_size, false);
            self.text_render.render_text(
                scene,
                label,
                style.text_size,
                false,
                Brush::Solid(label_color),
                Affine::translate((
                    center_x - metrics.width as f64 / 2.0,
                    center_y
                        + big_radius
                        + style.drawable_padding
                        + (metrics.descent - metrics.ascent) as f64 / 2.0,
                )),
                true,
                None,
            );
        }

        for connector in &geometry.connectors {
            let color = if connector.completed {
                style.color_selected
            } else {
                style.color_circle
            };
            scene.stroke(
                &Stroke::new(style.line_width),
                Affine::IDENTITY,
                &Brush::Solid(color),
                None,
                &Line::new((x + connector.start_x, center_y), (x + connector.end_x, center_y)),
            );
        }
    }

    fn layout_style(&self) -> StyleNode {
        let style = self.layout_style.get();
        let big_radius = self.resolved.fill_radius + self.resolved.stroke_width;
        let label_height = (self.resolved.text_size + LABEL_LINE_GAP) as f64;
        let preferred_height = 2.0 * big_radius + self.resolved.drawable_padding + label_height;

        // fill the available width; only impose the preferred height when the
        // host did not constrain it
        let width = if style.size.x == Dimension::auto() {
            Dimension::percent(1.0)
        } else {
            style.size.x
        };
        let height = if style.size.y == Dimension::auto() {
            Dimension::length(preferred_height as f32)
        } else {
            style.size.y
        };

        StyleNode {
            style: LayoutStyle {
                size: Vector2::new(width, height),
                ..style
            },
            children: vec![],
        }
    }

    fn update(&mut self, _layout: &LayoutNode, _context: AppContext, _info: &mut AppInfo) -> Update {
        if self.pending_relayout {
            self.pending_relayout = false;
            return Update::DRAW;
        }

        Update::empty()
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("stepview-widgets", "StepView")
    }
}

/// The step sequence and current-step index of a [StepView].
#[derive(Clone, Debug, PartialEq, Eq)]
struct StepModel {
    steps: Vec<String>,
    current: usize,
}

impl Default for StepModel {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            current: START_STEP,
        }
    }
}

/// Shared handle to the state of a [StepView].
///
/// Clones observe the same underlying model; the handle the widget renders
/// from can be driven from button callbacks. All index inputs are clamped,
/// never rejected, and `1 <= current_step() <= max(1, step_count())` holds
/// at all times.
#[derive(Clone, Default)]
pub struct StepViewState {
    inner: StateSignal<StepModel>,
}

impl StepViewState {
    /// Create a new handle with no steps and the current step at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the step sequence and reset the current step to 1.
    pub fn set_steps(&self, steps: Vec<String>) {
        self.inner.with_mut(|model| {
            model.steps = steps;
            model.current = clamp_step(START_STEP, model.steps.len());
        });
    }

    /// Select the current step, clamping into `[1, step_count]`.
    pub fn selected_step(&self, step: usize) {
        self.inner.with_mut(|model| {
            model.current = clamp_step(step, model.steps.len());
        });
    }

    /// Returns the current step (1-based).
    pub fn current_step(&self) -> usize {
        let current = self.inner.with(|model| model.current);
        log::debug!("current step: {}", current);
        current
    }

    /// Returns the number of steps.
    pub fn step_count(&self) -> usize {
        let count = self.inner.with(|model| model.steps.len());
        log::debug!("step count: {}", count);
        count
    }

    fn snapshot(&self) -> StepModel {
        self.inner.get()
    }
}

fn clamp_step(step: usize, count: usize) -> usize {
    step.clamp(START_STEP, count.max(START_STEP))
}

/// Resolved style of a [StepView], with theme lookups already applied.
#[derive(Clone, Debug, PartialEq)]
struct StepStyle {
    color_circle: Color,
    color_text: Color,
    color_selected: Color,
    fill_radius: f64,
    stroke_width: f64,
    line_width: f64,
    drawable_padding: f64,
    text_size: f32,
}

impl Default for StepStyle {
    fn default() -> Self {
        Self {
            color_circle: Color::from_rgb8(176, 190, 197),
            color_text: Color::from_rgb8(97, 97, 97),
            color_selected: Color::from_rgb8(33, 150, 243),
            fill_radius: 18.0,
            stroke_width: 4.0,
            line_width: 3.0,
            drawable_padding: 10.0,
            text_size: 16.0,
        }
    }
}

impl StepStyle {
    fn resolve(theme: &mut dyn Theme, id: WidgetId) -> Self {
        let defaults = Self::default();
        let Some(style) = theme.of(id) else {
            return defaults;
        };

        Self {
            color_circle: style.get_color("color_circle").unwrap_or(defaults.color_circle),
            color_text: style.get_color("color_text").unwrap_or(defaults.color_text),
            color_selected: style
                .get_color("color_selected")
                .unwrap_or(defaults.color_selected),
            fill_radius: style
                .get_float("fill_radius")
                .map(f64::from)
                .unwrap_or(defaults.fill_radius),
            stroke_width: style
                .get_float("stroke_width")
                .map(f64::from)
                .unwrap_or(defaults.stroke_width),
            line_width: style
                .get_float("line_width")
                .map(f64::from)
                .unwrap_or(defaults.line_width),
            drawable_padding: style
                .get_float("drawable_padding")
                .map(f64::from)
                .unwrap_or(defaults.drawable_padding),
            text_size: style.get_float("text_size").unwrap_or(defaults.text_size),
        }
    }
}

/// One circle of the indicator.
#[derive(Clone, Debug, PartialEq)]
struct CircleSpec {
    /// 1-based step number.
    number: usize,
    /// Horizontal center, relative to the widget origin.
    center_x: f64,
    /// The step is at or before the current step.
    completed: bool,
    /// The step is exactly the current step.
    selected: bool,
}

/// One connector line between adjacent circles.
#[derive(Clone, Debug, PartialEq)]
struct ConnectorSpec {
    start_x: f64,
    end_x: f64,
    /// Both endpoints are at or before the current step.
    completed: bool,
}

#[derive(Clone, Debug, Default)]
struct StepGeometry {
    circles: Vec<CircleSpec>,
    connectors: Vec<ConnectorSpec>,
}

/// Partition the width into equal segments and place circles at the segment
/// midpoints, with connector lines leaving `big_radius` clearance around the
/// circles.
fn compute_geometry(width: f64, count: usize, current: usize, big_radius: f64) -> StepGeometry {
    if count == 0 {
        return StepGeometry::default();
    }

    let segment = width / count as f64;
    let half_line = (segment / 2.0 - big_radius).max(0.0);

    let circles = (1..=count)
        .map(|number| CircleSpec {
            number,
            center_x: segment * number as f64 - segment / 2.0,
            completed: number <= current,
            selected: number == current,
        })
        .collect();

    let connectors = (1..count)
        .map(|index| {
            let line_center = segment * index as f64;
            ConnectorSpec {
                start_x: line_center - half_line,
                end_x: line_center + half_line,
                completed: index < current,
            }
        })
        .collect();

    StepGeometry {
        circles,
        connectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn selected_step_clamps_low_and_high() {
        let state = StepViewState::new();
        state.set_steps(labels(&["a", "b", "c", "d"]));

        state.selected_step(0);
        assert_eq!(state.current_step(), 1);

        state.selected_step(10);
        assert_eq!(state.current_step(), 4);

        state.selected_step(3);
        assert_eq!(state.current_step(), 3);
    }

    #[test]
    fn set_steps_resets_current_step() {
        let state = StepViewState::new();
        state.set_steps(labels(&["a", "b", "c"]));
        state.selected_step(3);
        assert_eq!(state.current_step(), 3);

        state.set_steps(labels(&["x", "y"]));
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.step_count(), 2);
    }

    #[test]
    fn step_count_tracks_the_last_sequence() {
        let state = StepViewState::new();
        assert_eq!(state.step_count(), 0);

        state.set_steps(labels(&["a", "b", "c", "d"]));
        assert_eq!(state.step_count(), 4);

        state.set_steps(Vec::new());
        assert_eq!(state.step_count(), 0);
    }

    #[test]
    fn empty_sequence_keeps_the_invariant() {
        let state = StepViewState::new();
        assert_eq!(state.current_step(), 1);

        state.set_steps(Vec::new());
        state.selected_step(7);
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn circles_sit_at_segment_midpoints() {
        let geometry = compute_geometry(400.0, 4, 2, 22.0);

        let centers: Vec<f64> = geometry.circles.iter().map(|c| c.center_x).collect();
        assert_eq!(centers, vec![50.0, 150.0, 250.0, 350.0]);
    }

    #[test]
    fn completion_partition_follows_the_current_step() {
        let geometry = compute_geometry(400.0, 4, 2, 22.0);

        let completed: Vec<bool> = geometry.circles.iter().map(|c| c.completed).collect();
        assert_eq!(completed, vec![true, true, false, false]);

        let selected: Vec<bool> = geometry.circles.iter().map(|c| c.selected).collect();
        assert_eq!(selected, vec![false, true, false, false]);

        let lines: Vec<bool> = geometry.connectors.iter().map(|l| l.completed).collect();
        assert_eq!(lines, vec![true, false, false]);
    }

    #[test]
    fn connectors_leave_circle_clearance() {
        let geometry = compute_geometry(400.0, 4, 1, 22.0);

        assert_eq!(geometry.connectors.len(), 3);
        let first = &geometry.connectors[0];
        // line centered between circle 1 (x=50) and circle 2 (x=150)
        assert_eq!(first.start_x, 100.0 - (50.0 - 22.0));
        assert_eq!(first.end_x, 100.0 + (50.0 - 22.0));
    }

    #[test]
    fn degenerate_geometry_is_empty_or_lineless() {
        let empty = compute_geometry(400.0, 0, 1, 22.0);
        assert!(empty.circles.is_empty());
        assert!(empty.connectors.is_empty());

        let single = compute_geometry(400.0, 1, 1, 22.0);
        assert_eq!(single.circles.len(), 1);
        assert!(single.connectors.is_empty());

        // circles wider than their segment collapse the line instead of
        // inverting it
        let cramped = compute_geometry(40.0, 4, 1, 22.0);
        for connector in &cramped.connectors {
            assert!(connector.end_x >= connector.start_x);
        }
    }
}
