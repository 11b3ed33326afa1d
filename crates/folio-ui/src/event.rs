use crate::page::ElementId;

/// Events delivered by the hosting environment
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The page scrolled to a new vertical offset
    Scroll { y: f64 },
    /// An element was clicked
    Click { target: ElementId },
    /// A key was pressed
    KeyDown { key: Key },
    /// The pointer moved within the document
    PointerMove { x: f64, y: f64 },
    /// The pointer entered an element
    PointerEnter { target: ElementId },
    /// The pointer left an element
    PointerLeave { target: ElementId },
    /// The pointer left the document entirely
    PointerGone,
    /// The page finished loading
    Loaded,
}

/// Key identity, collapsed to what the behavior layer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Char(char),
    Other,
}
