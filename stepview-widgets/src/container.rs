use stepview_core::app::context::AppContext;
use stepview_core::app::info::AppInfo;
use stepview_core::app::update::Update;
use stepview_core::layout::{LayoutNode, LayoutStyle, StyleNode};
use stepview_core::signal::MaybeSignal;
use stepview_core::vg::Scene;
use stepview_core::widget::{BoxedWidget, Widget, WidgetChildrenExt, WidgetLayoutExt};
use stepview_theme::id::WidgetId;
use stepview_theme::theme::Theme;

/// A container widget that can display and layout multiple child widgets.
///
/// The layout of the children (row, column, etc.) depends on the
/// [LayoutStyle] of the container.
///
/// ### Theming
/// The container widget doesn't actually draw anything but the child widgets,
/// so theming is useless.
#[derive(Default)]
pub struct Container {
    style: MaybeSignal<LayoutStyle>,
    children: Vec<BoxedWidget>,
}

impl Container {
    /// Creates a new container with given children.
    pub fn new(children: Vec<BoxedWidget>) -> Self {
        Self {
            style: LayoutStyle::default().into(),
            children,
        }
    }
}

impl WidgetChildrenExt for Container {
    fn set_children(&mut self, children: Vec<BoxedWidget>) {
        self.children = children;
    }

    fn add_child(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }
}

impl WidgetLayoutExt for Container {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.style = layout_style.into();
    }
}

impl Widget for Container {
    fn render(
        &mut self,
        scene: &mut Scene,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        info: &mut AppInfo,
        context: AppContext,
    ) {
        for (child, child_layout) in self.children.iter_mut().zip(&layout_node.children) {
            child.render(scene, theme, child_layout, info, context.clone());
        }

        if self.children.len() != layout_node.children.len() {
            log::warn!(
                "Container render: layout has {} children but the container holds {}",
                layout_node.children.len(),
                self.children.len()
            );
        }
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.style.get(),
            children: self.children.iter().map(|child| child.layout_style()).collect(),
        }
    }

    fn update(&mut self, layout: &LayoutNode, context: AppContext, info: &mut AppInfo) -> Update {
        let mut update = Update::empty();

        for (child, child_layout) in self.children.iter_mut().zip(&layout.children) {
            update |= child.update(child_layout, context.clone(), info);
        }

        update
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("stepview-widgets", "Container")
    }
}
