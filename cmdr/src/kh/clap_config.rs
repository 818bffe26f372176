// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand};

use crate::kh::DEFAULT_PROMPT;

#[derive(Debug, Parser)]
#[command(bin_name = "keyhelp")]
#[command(about = "⌨️ Capture key presses and show keyboard help")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  keyhelp [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `keyhelp_log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🔑 Wait for one key press and print it\n💡 Eg: `keyhelp read --json`")]
    Read {
        #[arg(long, short = 'p', default_value = DEFAULT_PROMPT, help = "Text to show before waiting")]
        prompt: String,

        #[arg(long, short = 'j', help = "Print the reading as JSON")]
        json: bool,
    },

    #[clap(about = "📖 Print the keyboard help banner")]
    Banner,

    #[clap(about = "⏭️ Print the character that follows the given one\n💡 Eg: `keyhelp next a`")]
    Next {
        #[arg(value_name = "CHAR", help = "A single character")]
        character: char,
    },

    #[clap(about = "🔁 Read keys in a loop: [H] shows help, [Escape] or Ctrl+C quits")]
    Repl,
}
