use std::path::PathBuf;

use clap::Parser;

/// TalkMate: chat with a Gemini model from the terminal.
#[derive(Parser, Debug)]
#[command(name = "talkmate", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, talkmate_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model to use for both text and image prompts.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Send a single prompt, print the reply, and exit.
    #[arg(long, value_name = "PROMPT")]
    pub once: Option<String>,

    /// Image to attach to the first prompt.
    #[arg(short = 'i', long)]
    pub image: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_once_with_image() {
        let args = Args::try_parse_from([
            "talkmate",
            "--once",
            "Describe",
            "--image",
            "cat.png",
            "-m",
            "gemini-1.5-pro",
        ])
        .unwrap();
        assert_eq!(args.once.as_deref(), Some("Describe"));
        assert_eq!(args.image, Some(PathBuf::from("cat.png")));
        assert_eq!(args.model.as_deref(), Some("gemini-1.5-pro"));
        assert!(args.config.is_none());
    }

    #[test]
    fn no_args_is_interactive() {
        let args = Args::try_parse_from(["talkmate"]).unwrap();
        assert!(args.once.is_none());
        assert!(args.log_level.is_none());
    }
}
