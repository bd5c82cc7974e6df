// Fixed tree every session starts from.

use super::node::{Dir, File, Node};

/// Visitors leave notes here.
pub const NOTES_DIR: [&str; 1] = ["notes_for_kuan"];

/// Placeholder content of the resume; `cat` renders a download link instead.
pub const RESUME_HREF: &str = "/WANG_KUANYI.pdf";

const ABOUT: &str = "Hi! I'm Kuan Yi Wang 👋

I'm a versatile team player, a polyglot, fluent in French, Mandarin, and Python.
Currently hosting Piñata Pitch, Montreal's largest student tech pitch competition.
Currently Intern @Neuropoly, Polytechnique Montréal.

Contact: kuanyi.wang0906@gmail.com";

const PROJECTS: &str = "🚀 My Projects:

1. Piñata Pitch - Montreal's largest student tech pitch competition
   Website: https://www.pinatapitch.tech

2. Neuropoly Research - Current internship work
   Focus: Neural networks and AI research

3. Portfolio Terminal - This website!
   A terminal-based portfolio experience

Type 'cat projects.txt' to view this again.";

const CONTACT: &str = "📫 Get in touch:

LinkedIn: https://www.linkedin.com/in/kuan-yi-wang-443871319/
GitHub: https://github.com/AcastaPaloma
Instagram: https://www.instagram.com/kuanus_/
Email: kuanyi.wang0906@gmail.com
Resume: /home/kuan/resume.pdf";

const FUN_FACTS: &str = "🎯 Fun Facts About Kuan:

• I speak 3 languages fluently: English, French, and Mandarin
• I can code in Python, but I also speak \"Python\" to actual pythons (kidding! 🐍)
• Currently organizing Montreal's largest student tech pitch competition
• I love exploring new technologies and building cool stuff
• Montreal bagels > New York bagels (fight me!)
• I believe the best code is written with good coffee ☕
• Fun fact: This entire portfolio is a functional terminal!

Try exploring other directories to learn more about me!";

const GOALS: &str = "🎯 My Goals & Aspirations:

Short-term:
- Complete my internship at Neuropoly with impact
- Successfully host Piñata Pitch 2025
- Graduate with honors
- Build more awesome projects like this portfolio

Long-term:
- Contribute to meaningful AI/ML research
- Start or join an innovative tech company
- Bridge the gap between research and practical applications
- Help other students pursue tech careers

Personal:
- Travel to all 7 continents (3 down, 4 to go!)
- Learn a 4th language (thinking Japanese 🇯🇵)
- Master the art of making perfect Montreal bagels";

const QUIRKS: &str = "🤪 My Little Quirks:

• I organize my code files like Marie Kondo organizes closets
• I have strong opinions about terminal color schemes (dark mode forever!)
• I can't start coding without the perfect playlist
• I talk to my rubber duck more than I'd like to admit
• I collect vintage programming books (yes, physical books!)
• I have a weird fascination with terminal emulators
• I always use 'ls -la' instead of just 'ls' (old habits)
• I think Unix philosophy is life philosophy

P.S. This terminal portfolio is probably my biggest quirk yet!";

const RESUME: &str = "[Binary PDF file - Download from /WANG_KUANYI.pdf]";

const IMAGES_README: &str = "📸 Personal Images Collection

This directory contains some fun images and photos that represent me!

Available files:
- profile.jpg (coming soon!)
- montreal.jpg (my beautiful city)
- coding_setup.jpg (my workspace)
- piñata_pitch_event.jpg (our amazing event)

Note: In a real terminal, you'd use 'file' command to check image types,
but since this is a web terminal, we'll describe them instead! 😊";

const NOTES_README: &str = "📝 Welcome to notes_for_kuan!

This is where visitors can leave messages for Kuan.

To create a new note:
1. Use 'touch filename.txt' to create a new file
2. Use 'nano filename.txt' to edit the file
3. Write your message (max 100,000 characters)
4. Save and provide your name (email optional)

Your note will be stored and Kuan will see it!

Examples:
  touch hello.txt
  nano hello.txt";

const SKILLS: &str = "💻 Technical Skills:

Languages: Python, JavaScript, TypeScript, C++, Java
Frameworks: React, Next.js, Node.js, Express
Databases: PostgreSQL, MongoDB, Supabase
Tools: Git, Docker, VS Code, Terminal
AI/ML: Neural Networks, Research at Neuropoly

🌐 Languages:
- English (Native)
- French (Fluent)
- Mandarin (Fluent)";

const INSPIRATIONS: &str = "💡 What Inspires Me:

Technology & Innovation:
- The potential of AI to solve real-world problems
- Open source communities and collaborative development
- The intersection of research and practical applications

People & Experiences:
- Students who dare to pitch crazy ideas at Piñata Pitch
- Researchers at Neuropoly pushing boundaries
- Montreal's vibrant tech ecosystem
- The terminal hackers who inspired this portfolio!

Philosophy:
\"Code is poetry, debugging is detective work, and shipping is art.\"
- Someone wise (probably me after too much coffee)

Fun fact: This portfolio was inspired by old-school terminals and
my love for command-line interfaces. Who needs fancy UIs? 😎";

const RANDOM_THOUGHTS: &str = "🧠 Random Thoughts & Musings:

• Why do we call it \"debugging\" when bugs weren't even computer-related originally?
• The best debugging tool is still console.log() (fight me, debugger users!)
• Montreal winters make you appreciate indoor coding even more
• Terminal UIs are making a comeback and I'm here for it
• AI will change everything, but humans will still write the prompts
• The best code comments explain the \"why\", not the \"what\"
• Rubber duck debugging works even with imaginary ducks

Current mood: Building cool stuff and wondering why I chose to
make a portfolio in a terminal (but secretly loving every bit of it)";

const EXPERIENCE: &str = "🏢 Work Experience:

Current:
- Intern @Neuropoly, Polytechnique Montréal
  Working on neural network research and AI applications

Leadership:
- Host of Piñata Pitch
  Montreal's largest student tech pitch competition
  Organizing events, managing teams, connecting startups

Previous projects and internships available on LinkedIn!";

fn file(name: &str, content: &str) -> Node {
    Node::File(File::new(name, content))
}

/// Build the root directory of a fresh session.
pub fn root() -> Dir {
    let kuan = Dir::new("kuan")
        .with(file("about.txt", ABOUT))
        .with(file("projects.txt", PROJECTS))
        .with(file("contact.txt", CONTACT))
        .with(file("fun_facts.txt", FUN_FACTS))
        .with(file("goals.txt", GOALS))
        .with(file("quirks.txt", QUIRKS))
        .with(file("resume.pdf", RESUME))
        .with(Node::Dir(Dir::new("images").with(file("README.txt", IMAGES_README))));

    let notes = Dir::new(NOTES_DIR[0]).with(file("README.txt", NOTES_README));

    let portfolio = Dir::new("portfolio")
        .with(file("skills.txt", SKILLS))
        .with(file("inspirations.txt", INSPIRATIONS))
        .with(file("random_thoughts.txt", RANDOM_THOUGHTS))
        .with(file("experience.txt", EXPERIENCE));

    Dir::new("")
        .with(Node::Dir(Dir::new("home").with(Node::Dir(kuan))))
        .with(Node::Dir(notes))
        .with(Node::Dir(portfolio))
}
