//! Terminal emulators and how each is told its working directory.

/// Terminal emulators with a known working-directory flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    GnomeTerminal,
    Konsole,
    Xfce4,
    Tilix,
    Alacritty,
    Kitty,
    /// Anything else: run through the shell from inside the directory.
    Other,
}

impl TerminalKind {
    /// Known kinds in detection order.
    pub const KNOWN: [TerminalKind; 6] = [
        TerminalKind::GnomeTerminal,
        TerminalKind::Konsole,
        TerminalKind::Xfce4,
        TerminalKind::Tilix,
        TerminalKind::Alacritty,
        TerminalKind::Kitty,
    ];

    /// Substring of the program name that identifies this kind.
    fn marker(&self) -> Option<&'static str> {
        match self {
            TerminalKind::GnomeTerminal => Some("gnome-terminal"),
            TerminalKind::Konsole => Some("konsole"),
            TerminalKind::Xfce4 => Some("xfce4-terminal"),
            TerminalKind::Tilix => Some("tilix"),
            TerminalKind::Alacritty => Some("alacritty"),
            TerminalKind::Kitty => Some("kitty"),
            TerminalKind::Other => None,
        }
    }

    /// Flag that sets the starting directory; the path follows as its own argument.
    pub fn working_dir_flag(&self) -> Option<&'static str> {
        match self {
            TerminalKind::GnomeTerminal | TerminalKind::Xfce4 | TerminalKind::Alacritty => {
                Some("--working-directory")
            }
            TerminalKind::Konsole => Some("--workdir"),
            TerminalKind::Tilix | TerminalKind::Kitty => Some("--directory"),
            TerminalKind::Other => None,
        }
    }

    /// Classify a program name such as `konsole` or `/usr/bin/kitty`.
    pub fn detect(program: &str) -> Self {
        TerminalKind::KNOWN
            .into_iter()
            .find(|kind| kind.marker().is_some_and(|m| program.contains(m)))
            .unwrap_or(TerminalKind::Other)
    }
}
