use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    artmap completions bash > ~/.bash_completion.d/artmap\n\n\
                  Generate zsh completions:\n    artmap completions zsh > ~/.zfunc/_artmap\n\n\
                  Generate fish completions:\n    artmap completions fish > ~/.config/fish/completions/artmap.fish\n\n\
                  Generate PowerShell completions:\n    artmap completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
