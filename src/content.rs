//! Static portfolio content shown by the terminal commands.

use crate::config::Profile;

pub const HELP: &str = "📖 Available Commands:

• about            → Know more about me
• skills           → See my tech stack
• projects         → Explore my featured projects
• contact          → How to get in touch
• clear            → Clear the terminal
• echo [text]      → Repeat your text
• date             → Show current date & time
• themes           → List available color themes
• theme set [name] → Switch the color theme
• ascii            → Print the banner";

pub const ABOUT: &str = "👋 Hey, I'm Yash Gandhi.

I'm a passionate Full Stack Developer who enjoys building meaningful digital experiences.

With a strong web foundation, I create apps that are scalable, responsive, and accessible — from frontend interfaces to backend APIs. I love solving real-world problems through code!";

pub const SKILLS: &str = "💻 Tech Stack I Use:

Frontend:
• React.js
• HTML5, CSS3, JavaScript (ES6+)
• Tailwind CSS
• Responsive UI & Accessibility

Backend:
• Node.js, Express.js
• MongoDB (via Mongoose)
• REST APIs, Auth (JWT/OAuth)

Tools:
• Git & GitHub
• Figma (UI/UX)
• Firebase, Netlify, Vercel
• Postman, Vite, ESLint, Prettier";

pub const PROJECTS: &str = "🚀 Featured Projects:

📱 PostX
• MERN social app for sharing posts
• Real-time like/edit, profile feed, uploads

📖 Shikshapatri Tracker
• MERN-based app to track daily spiritual reading
• Includes Gujarati TTS & PDF sync

📊 Mutual Fund Dashboard
• React + Recharts-based fund tracker
• Live NAVs, charts, holdings — made for clients/distributors

🧾 Resume Builder
• Resume builder with live preview templates
• Export clean styled PDFs

💻 Portfolio Terminal
• This very terminal-based portfolio, now running in your terminal!";

pub const CONTACT: &str = "📬 Get In Touch:

• Email: yashgandhi.dev@gmail.com
• GitHub: github.com/yashgandhi
• LinkedIn: linkedin.com/in/yashgandhi

💡 Open to collaboration, freelance, internships, or a tech conversation. Reach out!";

pub const ASCII: &str = r"__   __          _        ____                 _ _     _
\ \ / /_ _  ___| |__    / ___| __ _ _ __   __| | |__ (_)
 \ V / _` |/ __| '_ \  | |  _ / _` | '_ \ / _` | '_ \| |
  | | (_| |\__ \ | | | | |_| | (_| | | | | (_| | | | | |
  |_|\__,_||___/_| |_|  \____|\__,_|_| |_|\__,_|_| |_|_|";

/// Format used by the `date` command, e.g. `Sat Oct 17 2026 14:03:09 GMT+0530`.
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// The record the history starts with and returns to on `clear`.
pub fn welcome_message(profile: &Profile) -> String {
    format!(
        "Welcome to {}'s Portfolio Terminal.\nType \"help\" to see available commands.\n",
        profile.name
    )
}

/// Hint appended to every "not found" message.
pub const HELP_HINT: &str = "Type \"help\" to see available commands.";
