//! # httplat
//!
//! A CLI tool for summarizing HTTP latency measurement logs.
//!
//! ## Overview
//!
//! httplat is built on top of httplatlib. It reads the logs written by a
//! `measure_http_time` run and prints descriptive statistics for them:
//!
//! - **cnet**: regroup the proxy log per request burst, then summarize the
//!   first (uncached) request separately from the rest
//! - **regroup**: only write the regrouped CSV
//! - **curl**: summarize the `curl -w` timing columns
//!
//! ## Usage
//!
//! ```bash
//! # Summarize cnet.log for the default target
//! httplat cnet
//!
//! # Another log and target, as LaTeX for the report
//! httplat cnet --src run2/cnet.log --target-ip 10.1.6.30 --output latex
//!
//! # Just write the regrouped CSV
//! httplat regroup --src cnet.log --out formatted.csv
//!
//! # Summarize the curl timings as JSON
//! httplat curl --src with_cnet.tsv --output json
//! ```

mod logging;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use httplatlib::{cnet_summary, curl_summary, load_curl_log, load_latency_table, reformat};

use render::{render_summary, OutputFormat};

const DEFAULT_CNET_LOG: &str = "cnet.log";
const DEFAULT_FORMATTED: &str = "formatted.csv";
const DEFAULT_TARGET_IP: &str = "10.1.6.25";
const DEFAULT_CURL_LOG: &str = "with_cnet.tsv";

fn src_arg(default: &'static str, help: &'static str) -> Arg {
    Arg::new("src")
        .short('s')
        .long("src")
        .default_value(default)
        .help(help)
}

fn out_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("out")
        .default_value(DEFAULT_FORMATTED)
        .help("Specify the output file path for the regrouped CSV")
}

fn target_ip_arg() -> Arg {
    Arg::new("target-ip")
        .short('t')
        .long("target-ip")
        .default_value(DEFAULT_TARGET_IP)
        .help("Specify the IP address of the target to be formatted")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .value_parser(OutputFormat::NAMES)
        .default_value("text")
        .help("Output format")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("httplat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Summarize HTTP latency logs from measure_http_time runs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("cnet")
                .about("Regroup the cnet log and summarize processing times")
                .arg(src_arg(
                    DEFAULT_CNET_LOG,
                    "Specify the log file path for cnet",
                ))
                .arg(out_arg())
                .arg(target_ip_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("regroup")
                .about("Only write the regrouped cnet CSV")
                .arg(src_arg(
                    DEFAULT_CNET_LOG,
                    "Specify the log file path for cnet",
                ))
                .arg(out_arg())
                .arg(target_ip_arg()),
        )
        .subcommand(
            Command::new("curl")
                .about("Summarize the curl timing log")
                .arg(src_arg(
                    DEFAULT_CURL_LOG,
                    "Specify the log file path for curl log",
                ))
                .arg(output_arg()),
        )
}

/// Fetch an argument that always has a default value
fn arg_value<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_default()
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    OutputFormat::from_name(arg_value(matches, "output"))
}

/// Handler for regroup command
fn regroup_handler(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let src = arg_value(matches, "src");
    let out = arg_value(matches, "out");
    let target = arg_value(matches, "target-ip");

    let report = reformat(src, out, target)
        .with_context(|| format!("could not regroup '{src}' for target {target}"))?;

    Ok(format!(
        "Wrote {} rows ({} values, padded to {} columns) to {}\n",
        report.rows, report.fields, report.max_width, out
    ))
}

/// Handler for cnet command
fn cnet_handler(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let src = arg_value(matches, "src");
    let out = arg_value(matches, "out");
    let target = arg_value(matches, "target-ip");

    reformat(src, out, target)
        .with_context(|| format!("could not regroup '{src}' for target {target}"))?;
    let table = load_latency_table(out)?;
    let summary = cnet_summary(&table);

    render_summary(
        &summary,
        &format!("cnet processing time (ms), target {target}"),
        output_format(matches),
    )
}

/// Handler for curl command
fn curl_handler(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let src = arg_value(matches, "src");

    let log = load_curl_log(src)?;
    let summary = curl_summary(&log);

    render_summary(
        &summary,
        &format!("curl timings (ms), {src}"),
        output_format(matches),
    )
}

/// `-v` count, wherever on the command line it was given
fn verbosity(matches: &ArgMatches) -> u8 {
    matches
        .subcommand()
        .map(|(_, sub)| sub.get_count("verbose"))
        .unwrap_or_else(|| matches.get_count("verbose"))
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    match matches.subcommand() {
        Some(("cnet", sub)) => cnet_handler(sub),
        Some(("regroup", sub)) => regroup_handler(sub),
        Some(("curl", sub)) => curl_handler(sub),
        Some((name, _)) => Err(anyhow::anyhow!("unknown command '{name}'")),
        None => Err(anyhow::anyhow!("no command given")),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    logging::init_logging(verbosity(&matches));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_cnet_defaults() {
        let matches = build_command().get_matches_from(["httplat", "cnet"]);
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "cnet");
        assert_eq!(arg_value(sub, "src"), DEFAULT_CNET_LOG);
        assert_eq!(arg_value(sub, "out"), DEFAULT_FORMATTED);
        assert_eq!(arg_value(sub, "target-ip"), DEFAULT_TARGET_IP);
        assert_eq!(output_format(sub), OutputFormat::Text);
    }

    #[test]
    fn test_verbose_is_global() {
        let matches = build_command().get_matches_from(["httplat", "curl", "-vv"]);
        assert_eq!(verbosity(&matches), 2);

        let matches = build_command().get_matches_from(["httplat", "-v", "regroup"]);
        assert_eq!(verbosity(&matches), 1);
    }

    #[test]
    fn test_rejects_unknown_output() {
        let result = build_command().try_get_matches_from(["httplat", "curl", "--output", "xml"]);
        assert!(result.is_err());
    }
}
