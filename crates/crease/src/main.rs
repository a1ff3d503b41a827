//! Terminal front ends for the chat presets.

#[macro_use]
extern crate tracing;

mod cli;

use std::io::Write as _;
use std::time::Duration;

use clap::Parser;
use crease::presets::{self, SITUATIONS};
use crease::{ChatSession, ChatSessionBuilder};
use crease_core::Conversation;
use crease_model::Role;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

use cli::{BackendArgs, Cli, Command};

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Cli { backend, command } = Cli::parse();
    let mut input = Input::new();

    match command {
        Command::Chat { model, temperature } => {
            let session = presets::general_chat(
                session_builder(&backend, &model),
                temperature,
            );
            println!(
                "🧠 Local AI Chatbot ({model}, temperature {temperature:.1})"
            );
            println!("Commands: /clear, /history, /quit\n");
            run_chat(session, &mut input).await;
        }
        Command::Tactics { model } => {
            let session =
                presets::tactical_assistant(session_builder(&backend, &model));
            println!("🏏 Tactical Strategy Assistant");
            if !session.is_online() {
                println!("(no model backend, canned replies only)");
            }
            print_situations();
            run_tactics(session, &mut input).await;
        }
    }
}

#[cfg(feature = "ollama")]
fn session_builder(backend: &BackendArgs, model: &str) -> ChatSessionBuilder {
    use crease_ollama_model::{OllamaConfigBuilder, OllamaProvider};

    if backend.offline {
        info!("running offline as requested");
        return ChatSessionBuilder::offline();
    }
    let config = OllamaConfigBuilder::with_model(model)
        .with_base_url(backend.ollama_host.as_str())
        .build();
    ChatSessionBuilder::with_model_provider(OllamaProvider::new(config))
}

#[cfg(not(feature = "ollama"))]
fn session_builder(_backend: &BackendArgs, model: &str) -> ChatSessionBuilder {
    warn!("built without a model backend, `{model}` is not used");
    ChatSessionBuilder::offline()
}

/// A line typed into the general chat.
#[derive(Debug, PartialEq, Eq)]
enum ChatInput<'a> {
    Blank,
    Quit,
    Clear,
    History,
    /// Sent to the model exactly as typed.
    Message(&'a str),
}

impl<'a> ChatInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => ChatInput::Blank,
            "/quit" => ChatInput::Quit,
            "/clear" => ChatInput::Clear,
            "/history" => ChatInput::History,
            _ => ChatInput::Message(line),
        }
    }
}

async fn run_chat(mut session: ChatSession, input: &mut Input) {
    loop {
        let Some(line) = input.prompt("> ").await else {
            break;
        };
        match ChatInput::parse(&line) {
            ChatInput::Blank => continue,
            ChatInput::Quit => break,
            ChatInput::Clear => {
                session.clear();
                println!("🧹 Chat cleared.\n");
            }
            ChatInput::History => print_history(session.conversation()),
            ChatInput::Message(text) => {
                ask(&mut session, text, "🤔 Thinking...").await;
            }
        }
    }
}

async fn run_tactics(mut session: ChatSession, input: &mut Input) {
    loop {
        let Some(line) = input.prompt("Select match situation > ").await
        else {
            break;
        };
        match line.trim() {
            "" => continue,
            "/quit" => break,
            "/list" => print_situations(),
            "/history" => print_history(session.conversation()),
            choice => {
                let situation = choice
                    .parse()
                    .ok()
                    .and_then(presets::situation);
                let Some(situation) = situation else {
                    println!(
                        "Pick a situation between 1 and {}.\n",
                        SITUATIONS.len()
                    );
                    continue;
                };
                print_message(Role::User, situation);
                ask(&mut session, situation, "Analyzing...").await;
            }
        }
    }
}

async fn ask(session: &mut ChatSession, text: &str, waiting: &'static str) {
    let style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(style);
    progress_bar.set_message(waiting);
    progress_bar.enable_steady_tick(Duration::from_millis(100));

    let result = session.send_message(text).await;
    progress_bar.finish_and_clear();

    match result {
        Ok(reply) => print_message(Role::Assistant, &reply),
        Err(err) => {
            error!("chat request failed: {err}");
            println!("{}⚠️  {}\n", BAR_CHAR.bright_red(), err.bright_red());
        }
    }
}

fn print_situations() {
    println!("Match situations:");
    for (idx, situation) in SITUATIONS.iter().enumerate() {
        println!("  {}. {situation}", idx + 1);
    }
    println!();
}

fn print_history(conversation: &Conversation) {
    if conversation.visible_messages().next().is_none() {
        println!("(no messages yet)\n");
        return;
    }
    for msg in conversation.visible_messages() {
        print_message(msg.role(), msg.content());
    }
}

fn print_message(role: Role, content: &str) {
    match role {
        Role::User => {
            println!("{}🧑 {}", BAR_CHAR.bright_green(), content.bold());
        }
        Role::Assistant => {
            println!(
                "{}🤖 {}\n",
                BAR_CHAR.bright_cyan(),
                content.bright_white()
            );
        }
        Role::System => {}
    }
}

struct Input {
    lines: Lines<BufReader<Stdin>>,
}

impl Input {
    fn new() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
        }
    }

    async fn prompt(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        std::io::stdout().flush().ok();

        match self.lines.next_line().await {
            Ok(line) => line,
            Err(err) => {
                error!("error reading input: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_commands() {
        assert_eq!(ChatInput::parse(""), ChatInput::Blank);
        assert_eq!(ChatInput::parse("   \t"), ChatInput::Blank);
        assert_eq!(ChatInput::parse("/quit"), ChatInput::Quit);
        assert_eq!(ChatInput::parse(" /clear "), ChatInput::Clear);
        assert_eq!(ChatInput::parse("/history"), ChatInput::History);
    }

    #[test]
    fn test_chat_message_is_raw() {
        assert_eq!(
            ChatInput::parse("  keep   my spacing "),
            ChatInput::Message("  keep   my spacing ")
        );
        assert_eq!(
            ChatInput::parse("/clear the field"),
            ChatInput::Message("/clear the field")
        );
    }
}
