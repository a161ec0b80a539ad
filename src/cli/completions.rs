use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    supported-browsers completions bash > ~/.bash_completion.d/supported-browsers\n\n\
                  Generate zsh completions:\n    supported-browsers completions zsh > ~/.zfunc/_supported-browsers\n\n\
                  Generate fish completions:\n    supported-browsers completions fish > ~/.config/fish/completions/supported-browsers.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
