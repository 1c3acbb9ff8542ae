//! Declarative layout of the "no document loaded" placeholder.
//!
//! The placeholder is a single vertical stack, horizontally centered, with
//! glue before the first and after the last child so the block sits in the
//! middle of whatever container hosts it.

pub const ICON_GLYPH: &str = "📄";
pub const TITLE_TEXT: &str = "No PDF Loaded";
pub const SUBTITLE_TEXT: &str = "Drag and drop a PDF here or click below to open a file";
pub const HIGHLIGHT_TEXT: &str = "💡 Enjoy a secure, reliable, and completely free experience.";
pub const OPEN_PDF_CAPTION: &str = "Open PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_css(&self) -> String {
        let alpha = self.a as f32 / 255.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    pub fn css_value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelRole {
    Icon,
    Title,
    Subtitle,
    Highlight,
}

/// Static text or glyph shown in the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub role: LabelRole,
    pub text: &'static str,
    pub style: TextStyle,
}

/// The clickable control that asks the host to open a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionControl {
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem {
    /// Expands to take the remaining vertical space.
    Glue,
    /// Fixed vertical gap, in layout units.
    Gap(u16),
    Label(Label),
    Action(ActionControl),
}

impl LayoutItem {
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            LayoutItem::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_action(&self) -> Option<&ActionControl> {
        match self {
            LayoutItem::Action(action) => Some(action),
            _ => None,
        }
    }
}

fn label(role: LabelRole, text: &'static str, size: f32, weight: FontWeight, color: Rgba) -> LayoutItem {
    LayoutItem::Label(Label {
        role,
        text,
        style: TextStyle { size, weight, color },
    })
}

/// Builds the placeholder's children, top to bottom.
pub fn placeholder_layout() -> Vec<LayoutItem> {
    vec![
        LayoutItem::Glue,
        label(LabelRole::Icon, ICON_GLYPH, 72.0, FontWeight::Regular, Rgba::rgb(180, 180, 180)),
        LayoutItem::Gap(20),
        label(LabelRole::Title, TITLE_TEXT, 24.0, FontWeight::Bold, Rgba::rgb(78, 78, 78)),
        LayoutItem::Gap(10),
        label(LabelRole::Subtitle, SUBTITLE_TEXT, 14.0, FontWeight::Regular, Rgba::rgb(120, 120, 120)),
        LayoutItem::Gap(30),
        label(LabelRole::Highlight, HIGHLIGHT_TEXT, 16.0, FontWeight::Bold, Rgba::rgb(255, 237, 107)),
        LayoutItem::Gap(40),
        LayoutItem::Action(ActionControl {
            caption: OPEN_PDF_CAPTION,
        }),
        LayoutItem::Glue,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glue_wraps_the_content_block() {
        let layout = placeholder_layout();
        assert_eq!(layout.first(), Some(&LayoutItem::Glue));
        assert_eq!(layout.last(), Some(&LayoutItem::Glue));
        let glue_count = layout.iter().filter(|item| **item == LayoutItem::Glue).count();
        assert_eq!(glue_count, 2);
    }

    #[test]
    fn gaps_sit_between_children_in_order() {
        let gaps: Vec<u16> = placeholder_layout()
            .iter()
            .filter_map(|item| match item {
                LayoutItem::Gap(height) => Some(*height),
                _ => None,
            })
            .collect();
        assert_eq!(gaps, vec![20, 10, 30, 40]);
    }

    #[test]
    fn labels_follow_fixed_order() {
        let roles: Vec<LabelRole> = placeholder_layout()
            .iter()
            .filter_map(LayoutItem::as_label)
            .map(|label| label.role)
            .collect();
        assert_eq!(
            roles,
            vec![LabelRole::Icon, LabelRole::Title, LabelRole::Subtitle, LabelRole::Highlight]
        );
    }

    #[test]
    fn action_control_comes_after_the_last_gap() {
        let layout = placeholder_layout();
        assert_eq!(layout[8], LayoutItem::Gap(40));
        assert_eq!(layout[9].as_action().map(|a| a.caption), Some("Open PDF"));
    }

    #[test]
    fn title_and_highlight_are_bold() {
        for label in placeholder_layout().iter().filter_map(LayoutItem::as_label) {
            let expect_bold = matches!(label.role, LabelRole::Title | LabelRole::Highlight);
            assert_eq!(label.style.weight == FontWeight::Bold, expect_bold, "{:?}", label.role);
        }
    }

    #[test]
    fn css_color_uses_unit_alpha() {
        assert_eq!(Rgba::rgb(255, 237, 107).to_css(), "rgba(255, 237, 107, 1)");
        let transparent = Rgba { r: 0, g: 0, b: 0, a: 0 };
        assert_eq!(transparent.to_css(), "rgba(0, 0, 0, 0)");
    }
}
