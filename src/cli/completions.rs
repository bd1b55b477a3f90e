use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skills-cli completions bash > ~/.bash_completion.d/skills-cli\n\n\
                  Generate zsh completions:\n    skills-cli completions zsh > ~/.zfunc/_skills-cli\n\n\
                  Generate fish completions:\n    skills-cli completions fish > ~/.config/fish/completions/skills-cli.fish\n\n\
                  Generate PowerShell completions:\n    skills-cli completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
