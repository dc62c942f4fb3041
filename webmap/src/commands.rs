use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("webmap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("webmap")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Enable debug logging of the traversal").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Crawl one or more link graph files and classify every page as \
                crawled, skipped or erroneous.",
                )
                .arg(
                    arg!(<FILES> ... "JSON graph files describing the pages to crawl")
                        .required(true),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .default_value("text")
                        .help("Report output format: text or json"),
                ),
        )
}
