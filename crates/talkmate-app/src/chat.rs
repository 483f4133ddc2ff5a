//! Terminal chat loop: reads prompts and commands from stdin and prints the
//! transcript as the session changes.

use std::io::Write;
use std::path::Path;

use talkmate_ai::{ChatState, ChatUiEvent, ImageRef, SessionStore};
use talkmate_common::TalkmateError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::picker;
use crate::render::{format_message, new_messages, render_transcript};

const HELP: &str = "\
Type a prompt and press Enter to send it.
  /image <path>   attach an image to the next prompt
  /clear-image    remove the attached image
  /history        show the whole conversation, newest first
  /help           show this help
  /quit           exit";

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Prompt(&'a str),
    Image(&'a str),
    ClearImage,
    History,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some(("/image", path)) => Command::Image(path.trim()),
        _ => match trimmed {
            "/clear-image" => Command::ClearImage,
            "/history" => Command::History,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Prompt(trimmed),
        },
    }
}

/// Send one prompt and return the reply text.
pub async fn run_once(
    store: &SessionStore,
    prompt: String,
    image: Option<ImageRef>,
) -> Result<String, TalkmateError> {
    let task = store
        .on_event(ChatUiEvent::SendPrompt { prompt, image })
        .ok_or_else(|| TalkmateError::Other("prompt is empty".into()))?;
    task.await
        .map_err(|e| TalkmateError::Other(format!("reply task failed: {e}")))?;

    Ok(store
        .snapshot()
        .messages
        .front()
        .map(|m| m.text().to_string())
        .unwrap_or_default())
}

/// Interactive session on stdin/stdout.
pub async fn run_interactive(
    store: SessionStore,
    image: Option<ImageRef>,
) -> Result<(), TalkmateError> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_chat(store, image, stdin, &mut stdout).await
}

/// Chat loop over any line source. Replies still in flight at end of input
/// are awaited; `/quit` abandons them.
async fn run_chat<R, W>(
    store: SessionStore,
    image: Option<ImageRef>,
    input: R,
    out: &mut W,
) -> Result<(), TalkmateError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if image.is_some() {
        store.on_event(ChatUiEvent::UpdateImage(image));
    }

    let mut updates = store.subscribe();
    let mut seen = updates.borrow_and_update().messages.len();
    let mut pending: Vec<JoinHandle<()>> = Vec::new();
    let mut lines = input.lines();

    writeln!(out, "{HELP}")?;
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    if !handle_line(&store, &line, &mut pending, out)? {
                        return Ok(());
                    }
                }
                None => break,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                seen = print_new(out, &state, seen)?;
            }
        }
        pending.retain(|task| !task.is_finished());
    }

    if !pending.is_empty() {
        info!(count = pending.len(), "waiting for replies in flight");
        for task in pending.drain(..) {
            if let Err(e) = task.await {
                warn!("reply task failed: {e}");
            }
        }
    }

    print_new(out, &store.snapshot(), seen)?;
    Ok(())
}

/// Apply one line of input. Returns `false` when the user asked to quit.
fn handle_line<W: Write>(
    store: &SessionStore,
    line: &str,
    pending: &mut Vec<JoinHandle<()>>,
    out: &mut W,
) -> std::io::Result<bool> {
    match parse_command(line) {
        Command::Quit => return Ok(false),
        Command::Help => writeln!(out, "{HELP}")?,
        Command::History => writeln!(out, "{}", render_transcript(&store.snapshot()))?,
        Command::ClearImage => {
            store.on_event(ChatUiEvent::UpdateImage(None));
            writeln!(out, "image removed")?;
        }
        Command::Image(path) => match picker::load_image(Path::new(path)) {
            Ok(image) => {
                writeln!(out, "attached {} ({} bytes)", image.mime_type(), image.len())?;
                store.on_event(ChatUiEvent::UpdateImage(Some(image)));
            }
            Err(e) => {
                warn!("failed to attach image: {e}");
                writeln!(out, "could not attach image: {e}")?;
            }
        },
        Command::Prompt(text) => {
            store.on_event(ChatUiEvent::UpdatePrompt(text.to_string()));
            let image = store.snapshot().draft_image;
            if let Some(task) = store.on_event(ChatUiEvent::SendPrompt {
                prompt: text.to_string(),
                image,
            }) {
                pending.push(task);
            }
        }
    }
    Ok(true)
}

/// Print messages added since `seen` and return the new count.
fn print_new<W: Write>(out: &mut W, state: &ChatState, seen: usize) -> std::io::Result<usize> {
    for message in new_messages(state, seen) {
        writeln!(out, "{}", format_message(message))?;
    }
    Ok(state.messages.len().max(seen))
}
