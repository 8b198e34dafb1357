/// Host keys a frontend can report. Anything else maps to `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Escape,
    Up,
    Down,
    Left,
    Right,
    Z,
    X,
    A,
    S,
    None,
}
