use ratatui::style::Color;

/// Presentation attributes of one color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Identifier typed after `theme set`
    pub id: &'static str,
    pub display_name: &'static str,

    pub background: Color,
    /// `user@portfolio:~/desktop$`
    pub prompt: Color,
    /// Command text after the prompt, and the input line
    pub command: Color,
    pub output: Color,
    /// Title, output border and caret
    pub accent: Color,
    /// Panel chrome, lanyard and hints
    pub muted: Color,
}

impl Theme {
    /// Classic green-on-zinc terminal
    pub const fn default_green() -> Self {
        Self {
            id: "default",
            display_name: "Classic Green",
            background: Color::Rgb(24, 24, 27),
            prompt: Color::Rgb(74, 222, 128),
            command: Color::Rgb(187, 247, 208),
            output: Color::Rgb(134, 239, 172),
            accent: Color::Rgb(74, 222, 128),
            muted: Color::Rgb(63, 63, 70),
        }
    }
}

static BUILTIN_THEMES: [Theme; 10] = [
    Theme::default_green(),
    Theme {
        id: "hacker",
        display_name: "Hacker Terminal",
        background: Color::Rgb(0, 0, 0),
        prompt: Color::Rgb(0, 255, 65),
        command: Color::Rgb(200, 255, 200),
        output: Color::Rgb(0, 200, 50),
        accent: Color::Rgb(0, 255, 65),
        muted: Color::Rgb(0, 80, 20),
    },
    Theme {
        id: "matrix",
        display_name: "Digital Rain",
        background: Color::Rgb(0, 10, 0),
        prompt: Color::Rgb(0, 255, 0),
        command: Color::Rgb(180, 255, 180),
        output: Color::Rgb(0, 190, 0),
        accent: Color::Rgb(0, 255, 120),
        muted: Color::Rgb(0, 60, 0),
    },
    Theme {
        id: "dracula",
        display_name: "Dracula",
        background: Color::Rgb(40, 42, 54),
        prompt: Color::Rgb(80, 250, 123),
        command: Color::Rgb(248, 248, 242),
        output: Color::Rgb(189, 147, 249),
        accent: Color::Rgb(255, 121, 198),
        muted: Color::Rgb(68, 71, 90),
    },
    Theme {
        id: "solarized",
        display_name: "Solarized Dark",
        background: Color::Rgb(0, 43, 54),
        prompt: Color::Rgb(133, 153, 0),
        command: Color::Rgb(238, 232, 213),
        output: Color::Rgb(147, 161, 161),
        accent: Color::Rgb(38, 139, 210),
        muted: Color::Rgb(7, 54, 66),
    },
    Theme {
        id: "nord",
        display_name: "Nord",
        background: Color::Rgb(46, 52, 64),
        prompt: Color::Rgb(136, 192, 208),
        command: Color::Rgb(236, 239, 244),
        output: Color::Rgb(216, 222, 233),
        accent: Color::Rgb(129, 161, 193),
        muted: Color::Rgb(59, 66, 82),
    },
    Theme {
        id: "monokai",
        display_name: "Monokai",
        background: Color::Rgb(39, 40, 34),
        prompt: Color::Rgb(166, 226, 46),
        command: Color::Rgb(248, 248, 242),
        output: Color::Rgb(230, 219, 116),
        accent: Color::Rgb(249, 38, 114),
        muted: Color::Rgb(73, 72, 62),
    },
    Theme {
        id: "gruvbox",
        display_name: "Gruvbox",
        background: Color::Rgb(40, 40, 40),
        prompt: Color::Rgb(184, 187, 38),
        command: Color::Rgb(235, 219, 178),
        output: Color::Rgb(250, 189, 47),
        accent: Color::Rgb(254, 128, 25),
        muted: Color::Rgb(80, 73, 69),
    },
    Theme {
        id: "synthwave",
        display_name: "Synthwave '84",
        background: Color::Rgb(38, 35, 53),
        prompt: Color::Rgb(255, 126, 219),
        command: Color::Rgb(255, 255, 255),
        output: Color::Rgb(114, 241, 184),
        accent: Color::Rgb(54, 249, 246),
        muted: Color::Rgb(73, 84, 149),
    },
    Theme {
        id: "ocean",
        display_name: "Deep Ocean",
        background: Color::Rgb(15, 17, 26),
        prompt: Color::Rgb(130, 170, 255),
        command: Color::Rgb(238, 255, 255),
        output: Color::Rgb(137, 221, 255),
        accent: Color::Rgb(199, 146, 234),
        muted: Color::Rgb(41, 46, 66),
    },
];

/// The built-in themes and which one is active.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: &'static [Theme],
    active: usize,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// All built-in themes, with `default` active.
    pub fn builtin() -> Self {
        Self {
            themes: &BUILTIN_THEMES,
            active: 0,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    pub fn active(&self) -> &Theme {
        &self.themes[self.active]
    }

    /// Make `id` the active theme. Unknown ids leave the active theme alone.
    pub fn activate(&mut self, id: &str) -> Option<&Theme> {
        let index = self.themes.iter().position(|theme| theme.id == id)?;
        self.active = index;
        tracing::debug!(theme = id, "activated theme");
        Some(&self.themes[index])
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.iter().map(|theme| theme.id)
    }

    /// Text shown by `theme` / `themes`.
    pub fn listing(&self) -> String {
        let mut out = String::from("🎨 Available Themes:\n\n");
        for theme in self.themes {
            let marker = if theme.id == self.active().id {
                "  (active)"
            } else {
                ""
            };
            out.push_str(&format!(
                "• {:<10} → {}{}\n",
                theme.id, theme.display_name, marker
            ));
        }
        out.push_str("\nUse \"theme set <name>\" to switch.");
        out
    }
}
