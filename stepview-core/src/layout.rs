//! Layout style types and the flexbox computation bridge.
//!
//! Widgets describe themselves with a [StyleNode] tree; the bridge feeds it
//! through taffy and hands back a [LayoutNode] tree with absolute
//! coordinates, which is what `render` and `update` receive.

use nalgebra::Vector2;
use taffy::{AvailableSpace, NodeId, TaffyError, TaffyTree};

pub use taffy::{
    AlignItems, Dimension, Display, FlexDirection, JustifyContent, LengthPercentage,
    LengthPercentageAuto, Point, Rect, Size,
};

/// The layout style of a single widget.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutStyle {
    /// How the widget participates in layout.
    pub display: Display,
    /// The preferred size of the widget.
    pub size: Vector2<Dimension>,
    /// The minimum size of the widget.
    pub min_size: Vector2<Dimension>,
    /// The maximum size of the widget.
    pub max_size: Vector2<Dimension>,
    /// The outer spacing around the widget.
    pub margin: Rect<LengthPercentageAuto>,
    /// The inner spacing between the widget edge and its content.
    pub padding: Rect<LengthPercentage>,
    /// The spacing between child widgets (horizontal, vertical).
    pub gap: Vector2<LengthPercentage>,
    /// The main axis direction for child layout.
    pub flex_direction: FlexDirection,
    /// How much the widget grows relative to its siblings.
    pub flex_grow: f32,
    /// How much the widget shrinks relative to its siblings.
    pub flex_shrink: f32,
    /// The initial main-axis size of the widget.
    pub flex_basis: Dimension,
    /// Cross-axis alignment of children.
    pub align_items: Option<AlignItems>,
    /// Main-axis distribution of children.
    pub justify_content: Option<JustifyContent>,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            display: Display::Flex,
            size: Vector2::new(Dimension::auto(), Dimension::auto()),
            min_size: Vector2::new(Dimension::auto(), Dimension::auto()),
            max_size: Vector2::new(Dimension::auto(), Dimension::auto()),
            margin: Rect {
                left: LengthPercentageAuto::length(0.0),
                right: LengthPercentageAuto::length(0.0),
                top: LengthPercentageAuto::length(0.0),
                bottom: LengthPercentageAuto::length(0.0),
            },
            padding: Rect {
                left: LengthPercentage::length(0.0),
                right: LengthPercentage::length(0.0),
                top: LengthPercentage::length(0.0),
                bottom: LengthPercentage::length(0.0),
            },
            gap: Vector2::new(LengthPercentage::length(0.0), LengthPercentage::length(0.0)),
            flex_direction: FlexDirection::Row,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::auto(),
            align_items: None,
            justify_content: None,
        }
    }
}

impl LayoutStyle {
    fn to_taffy(&self) -> taffy::Style {
        taffy::Style {
            display: self.display,
            size: Size {
                width: self.size.x,
                height: self.size.y,
            },
            min_size: Size {
                width: self.min_size.x,
                height: self.min_size.y,
            },
            max_size: Size {
                width: self.max_size.x,
                height: self.max_size.y,
            },
            margin: self.margin,
            padding: self.padding,
            gap: Size {
                width: self.gap.x,
                height: self.gap.y,
            },
            flex_direction: self.flex_direction,
            flex_grow: self.flex_grow,
            flex_shrink: self.flex_shrink,
            flex_basis: self.flex_basis,
            align_items: self.align_items,
            justify_content: self.justify_content,
            ..Default::default()
        }
    }
}

/// A widget's layout style together with the styles of its children.
#[derive(Clone, Debug, Default)]
pub struct StyleNode {
    /// The layout style of the widget.
    pub style: LayoutStyle,
    /// The style nodes of the child widgets.
    pub children: Vec<StyleNode>,
}

/// The computed placement of a widget, in absolute window coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    /// The top-left corner of the widget.
    pub location: Point<f32>,
    /// The size of the widget.
    pub size: Size<f32>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            location: Point { x: 0.0, y: 0.0 },
            size: Size {
                width: 0.0,
                height: 0.0,
            },
        }
    }
}

/// The computed layout of a widget and its children.
#[derive(Clone, Debug, Default)]
pub struct LayoutNode {
    /// The computed placement of the widget.
    pub layout: Layout,
    /// The layout nodes of the child widgets.
    pub children: Vec<LayoutNode>,
}

/// Compute the layout of a style tree within the given available space.
pub fn compute_layout(root: &StyleNode, available: Vector2<f32>) -> Result<LayoutNode, TaffyError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let root_id = build_tree(&mut tree, root)?;

    tree.compute_layout(
        root_id,
        Size {
            width: AvailableSpace::Definite(available.x),
            height: AvailableSpace::Definite(available.y),
        },
    )?;

    collect_tree(&tree, root_id, 0.0, 0.0)
}

fn build_tree(tree: &mut TaffyTree<()>, node: &StyleNode) -> Result<NodeId, TaffyError> {
    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        children.push(build_tree(tree, child)?);
    }

    tree.new_with_children(node.style.to_taffy(), &children)
}

fn collect_tree(
    tree: &TaffyTree<()>,
    node: NodeId,
    parent_x: f32,
    parent_y: f32,
) -> Result<LayoutNode, TaffyError> {
    let layout = tree.layout(node)?;
    let x = parent_x + layout.location.x;
    let y = parent_y + layout.location.y;

    let mut children = Vec::new();
    for child in tree.children(node)? {
        children.push(collect_tree(tree, child, x, y)?);
    }

    Ok(LayoutNode {
        layout: Layout {
            location: Point { x, y },
            size: layout.size,
        },
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(width: f32, height: f32) -> LayoutStyle {
        LayoutStyle {
            size: Vector2::new(Dimension::length(width), Dimension::length(height)),
            ..Default::default()
        }
    }

    #[test]
    fn column_stacks_children_with_absolute_positions() {
        let root = StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::length(100.0), Dimension::length(100.0)),
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            children: vec![
                StyleNode {
                    style: fixed(100.0, 30.0),
                    children: vec![],
                },
                StyleNode {
                    style: fixed(100.0, 30.0),
                    children: vec![],
                },
            ],
        };

        let layout = compute_layout(&root, Vector2::new(100.0, 100.0)).unwrap();
        assert_eq!(layout.children.len(), 2);
        assert_eq!(layout.children[0].layout.location.y, 0.0);
        assert_eq!(layout.children[1].layout.location.y, 30.0);
    }

    #[test]
    fn percent_width_fills_the_parent() {
        let root = StyleNode {
            style: LayoutStyle {
                size: Vector2::new(Dimension::length(200.0), Dimension::length(50.0)),
                ..Default::default()
            },
            children: vec![StyleNode {
                style: LayoutStyle {
                    size: Vector2::new(Dimension::percent(1.0), Dimension::length(20.0)),
                    ..Default::default()
                },
                children: vec![],
            }],
        };

        let layout = compute_layout(&root, Vector2::new(200.0, 50.0)).unwrap();
        assert_eq!(layout.children[0].layout.size.width, 200.0);
    }
}
