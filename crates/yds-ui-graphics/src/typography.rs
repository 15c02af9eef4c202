/// Named type styles used by the widgets. Actual font resolution belongs to
/// the host renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Button1,
    Button2,
    Button4,
    Body1,
    Body2,
    Caption0,
    Caption1,
}
