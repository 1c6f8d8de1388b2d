mod cli;
mod labels;
mod render;

use clap::Parser;
use eyre::WrapErr;

use enquire_core::{LabelCollection, LabelList, LabelSet, QueryableView};

use cli::{Command, Kind};
use render::Rendered;

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let labels = labels::collect_labels(args.labels_file.as_deref(), &args.labels)?;
    tracing::info!(count = labels.len(), kind = ?args.kind, "building view");

    match args.kind {
        Kind::List => {
            let mut list = LabelList::new();
            for label in labels {
                list.push(label);
            }
            run(list, args.command)
        }
        Kind::Set => {
            let mut set = LabelSet::new();
            for label in labels {
                if !set.insert(label.as_str()) {
                    tracing::warn!(%label, "duplicate label collapsed in set");
                }
            }
            run(set, args.command)
        }
    }
}

fn run<C: LabelCollection>(collection: C, command: Command) -> eyre::Result<()> {
    let mut view = QueryableView::new(collection).context("build queryable view")?;

    match command {
        Command::Query { names } => {
            for name in names {
                let answer = view
                    .query(&name)
                    .with_context(|| format!("query `{name}`"))?;
                match view.mapping().label_for(&name) {
                    Some(label) if answer => println!("{name}: {answer} ({label})"),
                    _ => println!("{name}: {answer}"),
                }
            }
        }
        Command::Call {
            operation,
            args,
            keywords,
        } => {
            let call_args = cli::call_args(&args, &keywords);
            let dispatched = view
                .call(&operation, &call_args)
                .with_context(|| format!("call `{operation}`"))?;
            println!("{}", Rendered::from_dispatched(&dispatched).to_json()?);
        }
        Command::Identifiers => {
            for (identifier, label) in view.mapping().iter() {
                println!("{identifier} -> {label}");
            }
        }
    }

    Ok(())
}
