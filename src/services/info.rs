// Static pages. None of these look at the filesystem.

use super::Context;
use crate::fs::RESUME_HREF;
use crate::output::{Block, Output};
use crate::shell::ShellError;

const EMAIL: &str = "kuanyi.wang0906@gmail.com";
const LINKEDIN: &str = "https://www.linkedin.com/in/kuan-yi-wang-443871319/";
const GITHUB: &str = "https://github.com/AcastaPaloma";
const INSTAGRAM: &str = "https://www.instagram.com/kuanus_/";
const PINATA_PITCH: &str = "https://www.pinatapitch.tech";

type Page = Result<Output, ShellError>;

fn s(text: &str) -> String {
    String::from(text)
}

fn link(label: &str, href: &str) -> Block {
    Block::Link { label: s(label), href: s(href) }
}

pub fn whoami(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::text("guest@kuan-portfolio"))
}

/// The caller resets its display on this.
pub fn clear(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Clear)
}

pub fn about(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![
        Block::Heading(s("👋 About Kuan Yi Wang")),
        Block::Text(s("Currently hosting Piñata Pitch, Montreal's largest student tech pitch competition.")),
        Block::Text(s("I'm a versatile team player, a polyglot, fluent in French, Mandarin, even Python.")),
        Block::Text(s("Currently Intern @Neuropoly, Polytechnique Montréal.")),
        Block::Blank,
        link(&format!("Contact me @{EMAIL}"), &format!("mailto:{EMAIL}")),
        Block::Blank,
        Block::Hint(s("💡 Try: cat /home/kuan/about.txt")),
    ]))
}

pub fn links(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![
        Block::Heading(s("🔗 My Links")),
        link("LinkedIn", LINKEDIN),
        link("GitHub", GITHUB),
        link("Instagram", INSTAGRAM),
        link("Piñata Pitch", PINATA_PITCH),
        link("Download Resume", RESUME_HREF),
    ]))
}

pub fn projects(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![
        Block::Heading(s("🚀 My Projects")),
        Block::Text(s("1. Piñata Pitch - Montreal's largest student tech pitch competition")),
        Block::Hint(format!("Website: {PINATA_PITCH}")),
        Block::Blank,
        Block::Text(s("2. Neuropoly Research - Current internship work")),
        Block::Hint(s("Focus: Neural networks and AI research")),
        Block::Blank,
        Block::Text(s("3. Portfolio Terminal - This website!")),
        Block::Hint(s("A terminal-based portfolio experience")),
        Block::Blank,
        Block::Hint(s("💡 Try: cat /portfolio/experience.txt")),
    ]))
}

pub fn skills(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![
        Block::Heading(s("💻 Technical Skills")),
        Block::Section {
            title: s("Stack"),
            items: vec![
                (s("Languages"), s("Python, JavaScript, TypeScript, C++, Java")),
                (s("Frameworks"), s("React, Next.js, Node.js, Express")),
                (s("Databases"), s("PostgreSQL, MongoDB, Supabase")),
                (s("Tools"), s("Git, Docker, VS Code, Terminal")),
                (s("AI/ML"), s("Neural Networks, Research at Neuropoly")),
            ],
        },
        Block::Blank,
        Block::Heading(s("🌐 Human Languages")),
        Block::Text(s("English (Native), French (Fluent), Mandarin (Fluent)")),
        Block::Blank,
        Block::Hint(s("💡 Try: cat /portfolio/skills.txt")),
    ]))
}

pub fn contact(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![
        Block::Heading(s("📫 Contact Information")),
        Block::Text(format!("Email: {EMAIL}")),
        link("LinkedIn", LINKEDIN),
        link("GitHub", GITHUB),
        link("Instagram", INSTAGRAM),
        Block::Blank,
        Block::Hint(s("💡 Try: cat /home/kuan/contact.txt")),
    ]))
}

pub fn welcome(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![Block::Heading(s(
        "✨ Seeking Summer 2026 tech internships. Dig into my portfolio!",
    ))]))
}

pub fn tutorial(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![
        Block::Heading(s("🎓 Interactive Tutorial")),
        Block::Text(s("Welcome to your terminal portfolio crash course! Let's learn the basics:")),
        Block::Section {
            title: s("Lesson 1: Navigation"),
            items: vec![
                (s("pwd"), s("shows where you are")),
                (s("ls"), s("lists files and folders")),
                (s("cd /home/kuan"), s("change directory")),
            ],
        },
        Block::Section {
            title: s("Lesson 2: Exploring Files"),
            items: vec![
                (s("cat about.txt"), s("read a file")),
                (s("cat fun_facts.txt"), s("more fun content!")),
            ],
        },
        Block::Section {
            title: s("Lesson 3: Leave a Message"),
            items: vec![
                (s("cd /notes_for_kuan"), s("go to the notes directory")),
                (s("touch hello.txt"), s("create a note")),
                (s("nano hello.txt"), s("write it, then Ctrl+X")),
            ],
        },
        Block::Hint(s("🚀 Ready to explore? Type 'examples' for more ideas!")),
    ]))
}

fn recipe(title: &str, lines: &[&str]) -> Block {
    Block::Section {
        title: s(title),
        items: lines.iter().map(|l| (s(l), String::new())).collect(),
    }
}

pub fn examples(_: &mut Context, _: &[&str]) -> Page {
    Ok(Output::Blocks(vec![
        Block::Heading(s("💡 Example Commands & Workflows")),
        recipe("🏠 Explore My Personal Space", &["cd /home/kuan", "ls", "cat quirks.txt", "cat goals.txt"]),
        Block::Blank,
        recipe("💼 Check Out My Work", &["cd /portfolio", "ls", "cat skills.txt", "cat inspirations.txt"]),
        Block::Blank,
        recipe(
            "✍️ Leave Me a Note",
            &["cd /notes_for_kuan", "touch my_message.txt", "nano my_message.txt", "# Write your message, then type \"Ctrl+X\""],
        ),
        Block::Blank,
        Block::Section {
            title: s("🎯 Quick Portfolio Commands"),
            items: vec![
                (s("about"), s("Quick bio")),
                (s("links"), s("My social media")),
                (s("projects"), s("What I've built")),
                (s("skills"), s("Technical abilities")),
                (s("contact"), s("Get in touch")),
            ],
        },
        Block::Blank,
        Block::Hint(s("💭 Pro tip: Use arrow keys to navigate command history!")),
    ]))
}
