use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    news-fusion completions bash > ~/.bash_completion.d/news-fusion\n\n\
                  Generate zsh completions:\n    news-fusion completions zsh > ~/.zfunc/_news-fusion\n\n\
                  Generate fish completions:\n    news-fusion completions fish > ~/.config/fish/completions/news-fusion.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
