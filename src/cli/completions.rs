//! Shell completion generation

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write completions for `shell` to stdout
pub fn run(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_commands() {
        let mut command = Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut command, "cloudstash", &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("cloudstash"));
        assert!(script.contains("upload"));
        assert!(script.contains("login"));
    }
}
