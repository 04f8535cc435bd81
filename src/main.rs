//! resumetex CLI
//!
//! Usage:
//!   resumetex [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --theme <FILE>   Theme file for the document preamble (TOML format)
//!   -o, --output <FILE>  Write the LaTeX document to a file instead of stdout
//!   --sample             Print a sample resume JSON document
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use resumetex::{render_with_config, RenderConfig, ResumeRecord, Theme};

#[derive(Parser)]
#[command(name = "resumetex")]
#[command(about = "Render JSON Resume data as an Awesome-CV LaTeX document")]
struct Cli {
    /// Input JSON resume file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Theme file for the document preamble (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Write the LaTeX document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a sample resume JSON document
    #[arg(long)]
    sample: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.sample {
        print_sample();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let record: ResumeRecord = match serde_json::from_str(&source) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error parsing resume JSON: {}", e);
            std::process::exit(1);
        }
    };

    let config = RenderConfig::new().with_theme(theme);
    let tex = render_with_config(&record, &config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, tex) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", tex),
    }
}

fn print_intro() {
    println!(
        r#"resumetex - Render JSON Resume data as an Awesome-CV LaTeX document

USAGE:
    resumetex [OPTIONS] [FILE]
    cat resume.json | resumetex

OPTIONS:
    -t, --theme <FILE>    Custom preamble theme (TOML file)
    -o, --output <FILE>   Write the document to a file instead of stdout
    --sample              Print a sample resume JSON document
    -h, --help            Print help

QUICK START:
    resumetex --sample > resume.json
    resumetex resume.json > resume.tex
    xelatex resume.tex

The output requires the Awesome-CV document class to compile:
https://github.com/posquit0/Awesome-CV"#
    );
}

fn print_sample() {
    println!(
        r#"{{
  "basics": {{
    "name": "Jane Doe",
    "email": "jane@example.com",
    "phone": "555-0100",
    "location": {{ "address": "Austin, TX" }},
    "website": "https://jane.dev"
  }},
  "education": [
    {{
      "institution": "Rutgers University",
      "location": "New Brunswick, NJ",
      "area": "Computer Science",
      "studyType": "BSc",
      "gpa": "3.9",
      "startDate": "2015",
      "endDate": "2019"
    }}
  ],
  "work": [
    {{
      "company": "Example Corp",
      "position": "Software Engineer",
      "location": "Austin, TX",
      "startDate": "2019",
      "highlights": [
        "Shipped the billing pipeline",
        "Cut page load time by 40%"
      ]
    }}
  ],
  "skills": [
    {{ "name": "Languages", "details": "Rust, Python, SQL" }},
    {{ "name": "Tools", "details": "Git, Docker" }}
  ],
  "projects": [
    {{
      "name": "resumetex",
      "description": "LaTeX resume renderer",
      "technologies": "Rust",
      "link": "https://example.com/resumetex"
    }}
  ],
  "awards": [
    {{
      "name": "Best Paper",
      "details": "SIGPLAN",
      "date": "2019",
      "location": "Phoenix, AZ"
    }}
  ]
}}"#
    );
}
