use crate::foundation::core::{FracPoint, Rgba8};

/// Fill used by every field printed on the light parts of the frame.
pub const INK_DARK: Rgba8 = Rgba8::opaque(0, 0, 0);
/// Fill used by the artist credit, which sits on the frame's dark bottom bar.
pub const INK_LIGHT: Rgba8 = Rgba8::opaque(255, 255, 255);

/// How a field's resolved point relates to its rendered text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// The point is the top-left corner of the text.
    Start,
    /// The point is the top-right corner of the text.
    End,
    /// The point is the center of the text, on both axes.
    Center,
}

/// The semantic text fields printed on a framed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Title,
    ManaCost,
    TypeLine,
    /// Position is that of the first wrapped line.
    OracleText,
    PowerToughness,
    ArtistCredit,
}

/// Fixed placement and styling of one field kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub position: FracPoint,
    pub anchor: Anchor,
    pub fill: Rgba8,
    pub size_px: f32,
}

impl FieldKind {
    /// Every field kind, in drawing order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Title,
        FieldKind::ManaCost,
        FieldKind::TypeLine,
        FieldKind::OracleText,
        FieldKind::PowerToughness,
        FieldKind::ArtistCredit,
    ];

    pub fn spec(self) -> FieldSpec {
        let (x, y, anchor, fill) = match self {
            FieldKind::Title => (0.09, 0.06, Anchor::Start, INK_DARK),
            FieldKind::ManaCost => (0.91, 0.06, Anchor::End, INK_DARK),
            FieldKind::TypeLine => (0.09, 0.575, Anchor::Start, INK_DARK),
            FieldKind::OracleText => (0.09, 0.65, Anchor::Start, INK_DARK),
            FieldKind::PowerToughness => (0.86, 0.92, Anchor::Center, INK_DARK),
            FieldKind::ArtistCredit => (0.195, 0.955, Anchor::Start, INK_LIGHT),
        };
        FieldSpec {
            kind: self,
            position: FracPoint::new(x, y),
            anchor,
            fill,
            size_px: self.size_px(),
        }
    }

    /// Design size of the font bound to this field.
    pub fn size_px(self) -> f32 {
        match self {
            FieldKind::Title | FieldKind::ManaCost | FieldKind::PowerToughness => 100.0,
            FieldKind::TypeLine | FieldKind::OracleText => 80.0,
            FieldKind::ArtistCredit => 50.0,
        }
    }
}
