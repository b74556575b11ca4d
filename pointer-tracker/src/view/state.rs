use std::fmt::Display;

/// Client coordinates of the pointer, relative to the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl Display for PointerPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Everything the view renders.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Most recently reported pointer position. Starts at the origin.
    pub pointer: PointerPosition,

    /// Tag name of the last monitored element to be clicked.
    pub last_clicked: Option<String>,
}

impl ViewState {
    pub fn coordinates_text(&self) -> String {
        format!("The mouse coordinates {}", self.pointer)
    }

    pub fn last_clicked_text(&self) -> String {
        format!(
            "You clicked the {}",
            self.last_clicked.as_deref().unwrap_or_default()
        )
    }
}
