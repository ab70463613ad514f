use stepview_core::app::context::AppContext;
use stepview_core::app::info::AppInfo;
use stepview_core::app::update::Update;
use stepview_core::layout::{self, LayoutNode, LayoutStyle, LengthPercentage, StyleNode};
use stepview_core::signal::MaybeSignal;
use stepview_core::vg::kurbo::{Affine, RoundedRect, RoundedRectRadii};
use stepview_core::vg::peniko::{Color, Fill};
use stepview_core::vg::Scene;
use stepview_core::widget::{BoxedWidget, Widget, WidgetChildExt, WidgetLayoutExt};
use stepview_core::window::{ElementState, MouseButton};
use stepview_theme::id::WidgetId;
use stepview_theme::theme::Theme;

/// An interactive area with a child widget that runs a callback when pressed.
///
/// The callback fires when the left mouse button is released inside the
/// button's bounds; its returned [Update] is handed to the event loop.
///
/// ### Theming
/// Styling the button requires following properties:
/// - `color_idle` - The color of the button when not pressed and not hovered.
/// - `color_hovered` - The color of the button when hovered on.
/// - `color_pressed` - The color of the button when pressed.
pub struct Button {
    child: BoxedWidget,
    state: ButtonState,
    on_pressed: Option<Box<dyn FnMut() -> Update>>,
    layout_style: MaybeSignal<LayoutStyle>,
}

impl Button {
    /// Create a new button with the given child widget.
    pub fn new(child: impl Widget + 'static) -> Self {
        Self {
            child: Box::new(child),
            state: ButtonState::Idle,
            on_pressed: None,
            layout_style: LayoutStyle {
                padding: layout::Rect::<LengthPercentage> {
                    left: LengthPercentage::length(12.0),
                    right: LengthPercentage::length(12.0),
                    top: LengthPercentage::length(6.0),
                    bottom: LengthPercentage::length(6.0),
                },
                ..Default::default()
            }
            .into(),
        }
    }

    /// Sets the function to be called when the button is pressed.
    pub fn with_on_pressed(mut self, on_pressed: impl FnMut() -> Update + 'static) -> Self {
        self.on_pressed = Some(Box::new(on_pressed));
        self
    }
}

impl WidgetChildExt for Button {
    fn set_child(&mut self, child: impl Widget + 'static) {
        self.child = Box::new(child);
    }
}

impl WidgetLayoutExt for Button {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

impl Widget for Button {
    fn render(
        &mut self,
        scene: &mut Scene,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        info: &mut AppInfo,
        context: AppContext,
    ) {
        let (idle, hovered, pressed) = if let Some(style) = theme.of(self.widget_id()) {
            (
                style
                    .get_color("color_idle")
                    .unwrap_or_else(|| Color::from_rgb8(33, 150, 243)),
                style
                    .get_color("color_hovered")
                    .unwrap_or_else(|| Color::from_rgb8(66, 165, 245)),
                style
                    .get_color("color_pressed")
                    .unwrap_or_else(|| Color::from_rgb8(21, 101, 192)),
            )
        } else {
            (
                Color::from_rgb8(33, 150, 243),
                Color::from_rgb8(66, 165, 245),
                Color::from_rgb8(21, 101, 192),
            )
        };

        let color = match self.state {
            ButtonState::Idle => idle,
            ButtonState::Hovered | ButtonState::Released => hovered,
            ButtonState::Pressed => pressed,
        };

        let x = layout_node.layout.location.x as f64;
        let y = layout_node.layout.location.y as f64;
        let width = layout_node.layout.size.width as f64;
        let height = layout_node.layout.size.height as f64;

        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            color,
            None,
            &RoundedRect::new(
                x,
                y,
                x + width,
                y + height,
                RoundedRectRadii::from_single_radius(4.0),
            ),
        );

        if let Some(child_layout) = layout_node.children.first() {
            self.child.render(scene, theme, child_layout, info, context);
        }
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get(),
            children: vec![self.child.layout_style()],
        }
    }

    fn update(&mut self, layout: &LayoutNode, _context: AppContext, info: &mut AppInfo) -> Update {
        let mut update = Update::empty();
        let old_state = self.state;

        // check for hovering
        if let Some(cursor) = info.cursor_pos {
            if cursor.x as f32 >= layout.layout.location.x
                && cursor.x as f32 <= layout.layout.location.x + layout.layout.size.width
                && cursor.y as f32 >= layout.layout.location.y
                && cursor.y as f32 <= layout.layout.location.y + layout.layout.size.height
            {
                // keeps the pressed state while the button is held down
                if self.state != ButtonState::Pressed {
                    self.state = ButtonState::Hovered;
                }

                for (_, button, element_state) in &info.buttons {
                    if *button == MouseButton::Left {
                        match element_state {
                            ElementState::Pressed => {
                                self.state = ButtonState::Pressed;
                            },

                            // actually fire the event if the button is released
                            ElementState::Released => {
                                self.state = ButtonState::Released;
                                if let Some(on_pressed) = self.on_pressed.as_mut() {
                                    update |= on_pressed();
                                }
                            },
                        }
                    }
                }
            } else {
                // cursor not in area, so button is idle
                self.state = ButtonState::Idle;
            }
        } else {
            // cursor is not in window, so button is idle
            self.state = ButtonState::Idle;
        }

        // update on state change, due to re-coloring
        if old_state != self.state {
            update |= Update::DRAW;
        }

        update
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("stepview-widgets", "Button")
    }
}

/// The internal state of the button.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ButtonState {
    /// The button is idling (inactive).
    Idle,
    /// The cursor is hovering over the button.
    Hovered,
    /// The cursor is hovering over the button and the left click button is pressed.
    Pressed,
    /// The cursor is hovering over the button and the left click button is released.
    /// This is when the `on_pressed` function is called.
    Released,
}
