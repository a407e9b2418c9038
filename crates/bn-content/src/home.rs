//! Landing page blocks.

use std::fmt::Write;

use bn_nav::html::escape_html;

/// Public source repository.
pub const REPOSITORY_URL: &str = "https://github.com/Moses-main/bootnode";

struct Card {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Card] = &[
    Card {
        title: "Database",
        description: "Fully managed PostgreSQL database with real-time subscriptions and automatic backups.",
    },
    Card {
        title: "Authentication",
        description: "Built-in user management with email/password, OAuth, and social logins.",
    },
    Card {
        title: "Edge Functions",
        description: "Run serverless functions at the edge for maximum performance and low latency.",
    },
    Card {
        title: "Global CDN",
        description: "Serve your assets from a global CDN with automatic invalidation.",
    },
    Card {
        title: "Git Integration",
        description: "Automatic deployments from your Git repository with preview environments.",
    },
    Card {
        title: "Real-time",
        description: "Subscribe to database changes in real-time with just a few lines of code.",
    },
];

const STEPS: &[Card] = &[
    Card {
        title: "Create a Project",
        description: "Start a new project with a single command or connect an existing one.",
    },
    Card {
        title: "Define Your Schema",
        description: "Use our intuitive dashboard or CLI to define your data model.",
    },
    Card {
        title: "Integrate with Your App",
        description: "Use our client libraries to connect your frontend and start building.",
    },
];

/// Terminal transcript shown next to the hero. `$` lines are commands.
const TERMINAL: &[&str] = &[
    "$ npx bootnode my-backend",
    "# Creating a new Bootnode project in ./my-backend...",
    "Project created successfully",
    "Dependencies installed",
    "Navigate to the project directory:",
    "$ cd my-backend",
    "Start the development server:",
    "$ npm run dev  # Starts the development server",
    "# The server will be available at http://localhost:5000",
];

/// Render hero, features grid, how-it-works steps and call to action.
pub(crate) fn render_home(first_learn_path: &str) -> String {
    let mut out = String::with_capacity(4096);
    let start = escape_html(first_learn_path);

    write!(
        out,
        r#"<section class="hero"><div class="hero-copy"><h1>The Complete Backend for <span class="accent">Modern Apps</span></h1><p class="lead">Bootnode provides everything you need to build scalable, secure, and performant applications with minimal setup and maximum developer experience.</p><div class="hero-actions"><a class="button button-primary" href="{start}">Get Started</a><a class="button button-secondary" href="{REPOSITORY_URL}">GitHub</a></div></div>"#
    )
    .unwrap();

    out.push_str(r#"<div class="terminal"><div class="terminal-bar">terminal: ~/projects/my-app</div><div class="terminal-body">"#);
    for line in TERMINAL {
        let class = if line.starts_with('$') {
            "terminal-command"
        } else if line.starts_with('#') {
            "terminal-comment"
        } else {
            "terminal-output"
        };
        write!(out, r#"<div class="{class}">{}</div>"#, escape_html(line)).unwrap();
    }
    out.push_str("</div></div></section>");

    out.push_str(r#"<section class="features"><h2>Everything You Need to Build Fast</h2><p class="lead">Bootnode comes with all the features you need to build production-ready applications.</p><div class="card-grid">"#);
    for card in FEATURES {
        write_card(&mut out, None, card);
    }
    out.push_str("</div></section>");

    out.push_str(r#"<section class="how-it-works"><h2>How It Works</h2><p class="lead">Get started with Bootnode in minutes, not days.</p><div class="card-grid steps">"#);
    for (index, card) in STEPS.iter().enumerate() {
        write_card(&mut out, Some(index + 1), card);
    }
    out.push_str("</div></section>");

    write!(
        out,
        r#"<section class="cta"><h2>Ready to get started?</h2><p>Join thousands of developers building with Bootnode today.</p><div class="hero-actions"><a class="button button-primary" href="{start}">Get Started for Free</a><a class="button button-secondary" href="/contact">Contact Sales</a></div></section>"#
    )
    .unwrap();

    out
}

fn write_card(out: &mut String, step: Option<usize>, card: &Card) {
    out.push_str(r#"<div class="card">"#);
    if let Some(step) = step {
        write!(out, r#"<div class="step-number">{step}</div>"#).unwrap();
    }
    write!(
        out,
        "<h3>{}</h3><p>{}</p></div>",
        escape_html(card.title),
        escape_html(card.description)
    )
    .unwrap();
}
