//! AWS CLI command execution.
//!
//! Provides utilities for running AWS CLI commands and capturing their output.

use super::AwsError;
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;
use tokio::process::Command;

/// One whitespace separated word, quoted runs may contain spaces.
static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

/// Pieces of a word: single quoted, double quoted or bare.
static PART_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| {
        Regex::new(r#"(?:'[^']*'|"[^"]*"|[^'"\s]+|['"])+"#).expect("Invalid Regex")
    })
}

fn get_part_regex() -> &'static Regex {
    PART_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'|"([^"]*)"|([^'"\s]+|['"])"#).expect("Invalid Regex")
    })
}

/// Run a program with arguments and return its stdout.
///
/// Environment overrides in `envs` apply to the child process only.
///
/// # Arguments
/// * `program` - The executable to run, usually `aws`
/// * `args` - Arguments passed verbatim, no shell involved
/// * `envs` - Extra environment variables for the child
/// * `max_output` - Upper bound for captured stdout in bytes
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err(AwsError)` - If the command can't start, exits non-zero or produces too much output
pub async fn run(
    program: &str,
    args: &[String],
    envs: &[(&str, &str)],
    max_output: usize,
) -> Result<String, AwsError> {
    let cmd_line = format!("{program} {}", args.join(" "));
    log::debug!("run({cmd})", cmd = cmd_line.on_blue());

    let mut command = Command::new(program);
    command.args(args);
    for (key, value) in envs {
        command.env(key, value);
    }

    let output = command.output().await.map_err(|e| {
        log::error!("Command execution failed: {}", e);
        AwsError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        }
    })?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd_line}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > max_output {
            return Err(AwsError::OutputTooLarge {
                len: output.stdout.len(),
                limit: max_output,
            });
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd_line.on_blue()
        );
        return Err(AwsError::CommandFailed {
            program: program.to_string(),
            status: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8(output.stdout)?)
}

/// Split an argument string into words the way a POSIX shell does for quotes.
///
/// Quotes may appear anywhere inside a word and are removed; `''` yields an
/// empty argument. An unmatched quote is kept literally.
pub fn split_args(input: &str) -> Vec<String> {
    get_word_regex()
        .find_iter(input)
        .map(|word| {
            get_part_regex()
                .captures_iter(word.as_str())
                .filter_map(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
                .map(|m| m.as_str())
                .collect::<String>()
        })
        .collect()
}
