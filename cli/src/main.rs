mod highlighter;
mod lexer;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, Emacs, IdeMenu,
    KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu,
    Signal, default_emacs_keybindings,
};
use stackbot::links::{Blocklist, contains_rickroll, extract_urls, normalize_url};
use stackbot::text::{
    bruh, cheat_sheet, is_see_sharp_joke, quote_verbatim, raw_message, time_tag_today,
};
use stackbot::{Error, EvalOptions, Report, render_error, run_puzzle, stack};
use std::io::{BufRead, BufReader, Read};
use tracing::debug;

/// Stackbot - chat commands from the terminal
#[derive(Parser, Debug)]
#[command(name = "stackbot")]
#[command(about = "Run stackbot commands locally", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a stack program (reads programs from stdin when none is given)
    Stack {
        /// Print the execution trace before the final value
        #[arg(short, long)]
        verbose: bool,

        /// Print a JSON report instead of the chat reply
        #[arg(long)]
        json: bool,

        /// Whitespace-separated instructions
        instructions: Option<String>,
    },

    /// Run a puzzle command, e.g. `stackbot puzzle mini_peaks [1, 3, 2]`
    Puzzle {
        /// Puzzle name or alias
        name: String,

        /// Arguments, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the URLs in a message and check them offline
    Scan {
        /// Message text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Escape a message so it can be quoted verbatim
    Quote {
        /// Message text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Show the cheat sheet link for a language and topic
    Cheat {
        language: String,
        topic: Option<String>,
    },

    /// Print a message as a Python string literal
    Raw {
        /// Message text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Print "Bruh" with COUNT u's (random when omitted)
    Bruh {
        #[arg(allow_negative_numbers = true)]
        count: Option<i64>,
    },

    /// Make a chat timestamp tag from a New York time such as 9:30pm
    #[command(name = "make-time-tag")]
    MakeTimeTag { time: String },
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let commands: Vec<String> = vec!["DUP".to_string(), "POP".to_string()];

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['-', '_']);
        completions.insert(commands);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("stack".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn interpret_program(input: &str, options: &EvalOptions, json: bool) -> Result<()> {
    let result = stack::evaluate_with_options(input, options);

    if json {
        let report = Report::from(&result);
        println!("{}", serde_json::to_string(&report).into_diagnostic()?);
        return Ok(());
    }

    println!("{}", stack::message(&result));
    if let Err(err) = &result {
        render_error(&Error::evaluation(err, input));
    }

    Ok(())
}

fn run_stack(instructions: Option<String>, options: &EvalOptions, json: bool) -> Result<()> {
    // Check if we have a direct program argument
    if let Some(program) = instructions {
        return interpret_program(&program, options, json);
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);
    debug!(is_interactive, "Reading stack programs from stdin");

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("Stackbot REPL - Type stack programs to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_program(buffer.as_ref(), options, json)?;
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            interpret_program(&line, options, json)?;
        }
    }

    Ok(())
}

/// The given text, or everything on stdin.
fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .into_diagnostic()?;
            Ok(buffer)
        }
    }
}

fn scan(text: &str) {
    let urls = extract_urls(text);
    if urls.is_empty() {
        println!("No URLs found!");
    }

    let blocklist = Blocklist::default();
    for url in urls {
        let verdict = if blocklist.contains(url) {
            "known rickroll"
        } else {
            "not checked"
        };
        println!("{} ({})", normalize_url(url), verdict);
    }

    if contains_rickroll(text) {
        println!("The message itself mentions a rickroll");
    }
    if is_see_sharp_joke(text) {
        println!("Please refrain from making C# jokes.");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match args.command {
        Command::Stack {
            verbose,
            json,
            instructions,
        } => run_stack(instructions, &EvalOptions { verbose }, json),
        Command::Puzzle { name, args } => {
            match run_puzzle(&name, &args.join(" ")) {
                Ok(reply) => println!("{reply}"),
                Err(e) => render_error(&e),
            }
            Ok(())
        }
        Command::Scan { text } => {
            scan(&text_or_stdin(text)?);
            Ok(())
        }
        Command::Quote { text } => {
            println!("{}", quote_verbatim(&text_or_stdin(text)?));
            Ok(())
        }
        Command::Cheat { language, topic } => {
            let sheet = cheat_sheet(&language, topic.as_deref());
            println!("{}\n{}", sheet.title, sheet.query_url());
            Ok(())
        }
        Command::Raw { text } => {
            println!("{}", raw_message(&text_or_stdin(text)?));
            Ok(())
        }
        Command::Bruh { count } => {
            println!("{}", bruh(count, &mut rand::thread_rng()));
            Ok(())
        }
        Command::MakeTimeTag { time } => {
            println!("{}", time_tag_today(&time).into_diagnostic()?);
            Ok(())
        }
    }
}
