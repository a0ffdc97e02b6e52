use anyhow::{Context, Result};
use clap::Parser as _;
use console::style;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use twig::logging::init_tracing;
use twig::Walker;
use twig_parser::ast::Node;

/// Tree-walking evaluator for a tiny JavaScript-like language.
///
/// Runs FILE, or starts an interactive session when no FILE is given.
/// Bindings made in the interactive session live until it ends.
#[derive(clap::Parser)]
#[command(name = "twig")]
#[command(version)]
struct Cli {
    /// Script to run
    file: Option<PathBuf>,
    /// Read FILE as an ESTree JSON document instead of source code
    #[arg(long, requires = "file")]
    estree: bool,
    /// Print the syntax tree instead of running it
    #[arg(long)]
    dump_ast: bool,
    /// Log filter directives (e.g. `debug` or `twig_walker=trace`)
    #[arg(long, env = "TWIG_LOG")]
    log: Option<String>,
    /// Log at debug level
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref(), cli.verbose);

    if let Err(err) = run(&cli) {
        report(&err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = match &cli.file {
        Some(path) => path,
        None => return repl(cli),
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ast = if cli.estree {
        twig::parse_estree(&content)?
    } else {
        twig::parse(&content)?
    };

    if cli.dump_ast {
        println!("{:#?}", ast);
    } else {
        Walker::stdout().run(&ast)?;
    }
    Ok(())
}

fn repl(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    let mut walker = Walker::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            return Ok(()); // EOF
        }

        let ast = match twig::parse(&input) {
            Ok(ast) => ast,
            Err(err) => {
                report(&anyhow::Error::from(err));
                continue;
            }
        };
        if cli.dump_ast {
            eprintln!("{:#?}", ast);
        }
        if let Err(err) = walker.run(&ast) {
            report(&anyhow::Error::from(err));
        } else if let Node::Program { body } = &ast {
            tracing::debug!(statements = body.len(), bindings = walker.variables().len(), "evaluated");
        }
    }
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("error:").red().bold(), err);
}
