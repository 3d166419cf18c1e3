//! Shell registration scripts
//!
//! Bash gets a hook that asks the dispatcher for candidates on every tab
//! press. Other shells get a static script generated from the grammar.

use crate::complete::grammar::grammar_command;
use clap_complete::Shell;
use std::io::{self, Write};

/// Hidden subcommand the bash hook calls
pub const COMPLETE_COMMAND: &str = "__complete";

/// Hidden subcommand printing a registration script
pub const SCRIPT_COMMAND: &str = "__completion-script";

/// Write the registration script for `shell`
pub fn write_script<W: Write>(shell: Shell, bin_name: &str, out: &mut W) -> io::Result<()> {
    match shell {
        Shell::Bash => out.write_all(bash_script(bin_name).as_bytes()),
        _ => {
            let mut cmd = grammar_command(bin_name);
            clap_complete::generate(shell, &mut cmd, bin_name, out);
            Ok(())
        }
    }
}

/// Bash hook function for `bin_name`
///
/// The dispatcher prints a directive line followed by one candidate per
/// line. Registration only happens when `bin_name` resolves on `PATH`.
pub fn bash_script(bin_name: &str) -> String {
    let func = format!("_{}", bin_name.replace(|c: char| !c.is_ascii_alphanumeric(), "_"));

    format!(
        r#"{func}() {{
    local -a reply
    mapfile -t reply < <("{bin}" {complete} --cword "$COMP_CWORD" -- "${{COMP_WORDS[@]}}" 2>/dev/null)
    local directives="${{reply[0]}}"
    COMPREPLY=("${{reply[@]:1}}")

    if type compopt &>/dev/null; then
        if [[ " $directives " == *" filenames "* ]]; then
            compopt -o filenames -o noquote
        fi
        if [[ " $directives " == *" nospace "* ]]; then
            compopt -o nospace
        fi
    fi
}}

type -P "{bin}" &>/dev/null && complete -F {func} "{bin}"
"#,
        func = func,
        bin = bin_name,
        complete = COMPLETE_COMMAND,
    )
}
