/// Frontend-independent key identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Key {
    Left,
    Right,
    Space,
    Escape,
    #[default]
    None,
}
