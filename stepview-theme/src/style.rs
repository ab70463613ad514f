use indexmap::IndexMap;
use vello::peniko::Color;

/// A style map with string-based property access.
///
/// Widgets read their properties with `get_*` accessors and fall back to
/// built-in defaults for anything the theme leaves unset.
#[derive(Clone, Debug, Default)]
pub struct Style {
    map: IndexMap<String, StyleVal>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self {
            map: IndexMap::with_capacity(16),
        }
    }

    /// Create a style from an array of names and style values.
    pub fn from_values(values: impl IntoIterator<Item = (String, StyleVal)>) -> Self {
        Self {
            map: IndexMap::from_iter(values),
        }
    }

    /// Insert a style value with the given name and return the style.
    pub fn with_value(mut self, name: impl ToString, value: StyleVal) -> Self {
        self.map.insert(name.to_string(), value);
        self
    }

    /// Set a style value by name.
    pub fn set(&mut self, name: impl ToString, value: StyleVal) {
        self.map.insert(name.to_string(), value);
    }

    /// Set a color style value by name.
    pub fn set_color(&mut self, name: impl ToString, color: Color) {
        self.map.insert(name.to_string(), StyleVal::Color(color));
    }

    /// Set a float style value by name.
    pub fn set_float(&mut self, name: impl ToString, value: f32) {
        self.map.insert(name.to_string(), StyleVal::Float(value));
    }

    /// Get a style value by name. Returns [None] if the value name does not exist.
    pub fn get(&self, name: impl ToString) -> Option<StyleVal> {
        self.map.get(&name.to_string()).cloned()
    }

    /// Get a color style value by name. Returns [None] if the value name does
    /// not exist or holds a different value type.
    pub fn get_color(&self, name: impl ToString) -> Option<Color> {
        match self.map.get(&name.to_string()) {
            Some(StyleVal::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Get a float style value by name. Returns [None] if the value name does
    /// not exist or holds a different value type.
    pub fn get_float(&self, name: impl ToString) -> Option<f32> {
        match self.map.get(&name.to_string()) {
            Some(StyleVal::Float(float)) => Some(*float),
            _ => None,
        }
    }

    /// Get a bool style value by name. Returns [None] if the value name does
    /// not exist or holds a different value type.
    pub fn get_bool(&self, name: impl ToString) -> Option<bool> {
        match self.map.get(&name.to_string()) {
            Some(StyleVal::Bool(value)) => Some(*value),
            _ => None,
        }
    }
}

/// A style value.
#[derive(Clone, Debug)]
pub enum StyleVal {
    /// A color style value.
    Color(Color),
    /// A float style value.
    Float(f32),
    /// A bool style value.
    Bool(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_reject_mismatched_values() {
        let style = Style::from_values([
            ("color".to_string(), StyleVal::Color(Color::from_rgb8(1, 2, 3))),
            ("fill_radius".to_string(), StyleVal::Float(24.0)),
        ]);

        assert_eq!(style.get_float("fill_radius"), Some(24.0));
        assert_eq!(style.get_float("color"), None);
        assert_eq!(style.get_color("fill_radius"), None);
        assert!(style.get_color("color").is_some());
        assert_eq!(style.get_color("missing"), None);
    }
}
