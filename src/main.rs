use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use folio::cli::{CliArgs, Command};
use folio::config::FolioConfig;
use folio::editor::Session;
use folio::traversal::traverse;

fn main() -> Result<ExitCode> {
    folio::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => FolioConfig::load_from(path),
        None => FolioConfig::load(),
    };

    let mut session = Session::open_observed(&args.file, config, folio::tracing::event_logger())?;

    run(&mut session, args.command)
}

fn run(session: &mut Session, command: Command) -> Result<ExitCode> {
    match command {
        Command::Show => println!("{}", session.text()),
        Command::Tree => {
            let doc = &session.document;
            for unit in traverse(doc) {
                let parent = doc.parent(unit.id());
                let ancestors = std::iter::successors(parent, |p| doc.parent(p.id()));
                let indent = "  ".repeat(ancestors.count());
                println!("{}{}", indent, folio::tracing::describe(doc, unit));
            }
        }
        Command::Scan => {
            let report = session.scan();
            for token in &report.tokens {
                println!(
                    "{:<10} {:>6} +{:<4} {}",
                    token.kind.label(),
                    token.start,
                    token.length,
                    token.element_id
                );
            }
            for error in &report.errors {
                println!("error: {}", error);
            }
        }
        Command::Validate => {
            let errors = session.scan().errors;
            if errors.is_empty() {
                println!("No errors");
            } else {
                for error in &errors {
                    println!("error: {}", error);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Find { pattern } => {
            let matches = session.find(&pattern);
            for token in &matches {
                println!("{} at {} ({})", pattern, token.start, token.element_id);
            }
            println!("{} match(es)", matches.len());
        }
        Command::Replace {
            pattern,
            replacement,
            partial,
            output,
        } => {
            let count = session.replace(&pattern, &replacement, !partial);
            let path = session.save(output.as_deref())?;
            println!("Replaced {} word(s), wrote {}", count, path.display());
        }
        Command::Export { format, output } => match output {
            Some(path) => {
                let path = session.export_to(&format, Some(&path))?;
                println!("Exported to {}", path.display());
            }
            None => print!("{}", session.export(&format)?),
        },
        Command::Print(print_args) => {
            let settings = print_args.settings(&session.config.print);
            if print_args.preview {
                print!("{}", session.preview(&settings, print_args.page_size)?);
            } else {
                for event in session.print(&settings, print_args.page_size)? {
                    println!("{}", event);
                }
            }
        }
        Command::Stats => {
            let stats = session.stats();
            println!("Paragraphs: {}", stats.paragraphs);
            println!("Sentences:  {}", stats.sentences);
            println!("Words:      {}", stats.words);
            println!("Letters:    {}", stats.letters);
        }
    }

    Ok(ExitCode::SUCCESS)
}
