//! Component qualifier icons.

use ratatui::{style::Style, text::Span};

use crate::theme::Theme;

/// Kind of component an icon stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    /// A project.
    Project,
    /// A directory.
    Directory,
    /// A source file.
    File,
    /// A unit test file.
    UnitTestFile,
}

impl Qualifier {
    /// Single-cell glyph drawn before a component name.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Project => "◆",
            Self::Directory => "▸",
            Self::File => "▤",
            Self::UnitTestFile => "▥",
        }
    }

    /// Styled icon span, followed by one space.
    #[must_use]
    pub fn span(self, th: &Theme) -> Span<'static> {
        let color = match self {
            Self::Project => th.mauve,
            Self::Directory => th.sapphire,
            Self::File | Self::UnitTestFile => th.yellow,
        };
        Span::styled(format!("{} ", self.glyph()), Style::default().fg(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Icons are one glyph plus a space, colored per kind
    fn qualifier_spans() {
        let th = Theme::default();
        let file = Qualifier::File.span(&th);
        assert_eq!(file.content, "▤ ");
        assert_eq!(file.style.fg, Some(th.yellow));
        assert_eq!(Qualifier::Directory.span(&th).style.fg, Some(th.sapphire));
        assert_eq!(Qualifier::Project.glyph(), "◆");
    }
}
