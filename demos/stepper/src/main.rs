use stepview::color::Color;
use stepview::prelude::*;

struct StepperApp;

impl Application for StepperApp {
    type Theme = StepTheme;
    type State = ();

    fn build(_context: AppContext, _state: Self::State) -> impl Widget {
        let steps = StepViewState::new();
        steps.set_steps(vec![
            "Enter phone".to_string(),
            "Verify phone".to_string(),
            "Set password".to_string(),
            "Registered".to_string(),
        ]);

        let next_button = {
            let steps = steps.clone();

            Button::new(Text::new("Next step").with_color(Color::WHITE))
                .with_layout_style(LayoutStyle {
                    size: Vector2::new(Dimension::length(140.0), Dimension::length(36.0)),
                    ..Default::default()
                })
                .with_on_pressed(move || {
                    let mut next = steps.current_step() + 1;
                    if next > steps.step_count() {
                        next = 1;
                    }
                    log::debug!("advancing to step {}", next);
                    steps.selected_step(next);

                    Update::DRAW
                })
        };

        Container::new(vec![Box::new(StepView::new(steps)), Box::new(next_button)])
            .with_layout_style(LayoutStyle {
                size: Vector2::new(Dimension::percent(1.0), Dimension::percent(1.0)),
                flex_direction: FlexDirection::Column,
                align_items: Some(AlignItems::Center),
                gap: Vector2::new(LengthPercentage::length(0.0), LengthPercentage::length(24.0)),
                padding: Rect::<LengthPercentage> {
                    left: LengthPercentage::length(20.0),
                    right: LengthPercentage::length(20.0),
                    top: LengthPercentage::length(32.0),
                    bottom: LengthPercentage::length(20.0),
                },
                ..Default::default()
            })
    }

    fn config(&self) -> AppConfig<Self::Theme> {
        AppConfig {
            window: WindowConfig {
                title: "Step indicator".to_string(),
                size: Vector2::new(640.0, 240.0),
                min_size: Some(Vector2::new(320.0, 160.0)),
                ..Default::default()
            },
            render: RenderConfig::default(),
            theme: theme_from_env(),
        }
    }
}

fn main() {
    env_logger::init();
    StepperApp.run(());
}
