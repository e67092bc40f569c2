use bindery::prelude::*;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

/// Inspect, fetch and preview screen-builder projects
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Run an interactive preview session on stdin
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Project file for interactive mode (defaults to the starter template)
    #[arg(long)]
    project: Option<String>,

    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every component of a project and explain each value
    Inspect {
        /// Path to the project JSON file
        project: String,
        /// Only inspect this screen
        #[arg(long)]
        screen: Option<String>,
    },
    /// Run the data pipeline and print the resulting dataset
    Fetch,
    /// Write a bundled template to a project file
    Template {
        /// Template name (starter | ecommerce)
        name: String,
        #[arg(short, long, default_value = "project.json")]
        output: String,
    },
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Local dataset JSON file, bypassing the sheet
    #[arg(long, global = true)]
    data: Option<String>,

    /// Sheet id, spreadsheet URL or DEMO
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Source configuration JSON file
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Log level for bindery (error|warn|info|debug|trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Explicit tracing filter directive, overrides --log-level and RUST_LOG
    #[arg(long, global = true)]
    log_filter: Option<String>,
}

impl LogArgs {
    /// `--log-filter`, then `--log-level`, then `RUST_LOG`, then `info`.
    fn filter(&self) -> EnvFilter {
        if let Some(directive) = &self.log_filter {
            return EnvFilter::new(directive);
        }
        if let Some(level) = &self.log_level {
            return EnvFilter::new(format!("bindery={}", level.to_ascii_lowercase()));
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bindery=info"))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log.filter())
        .with_writer(io::stderr)
        .init();

    let (notifier, mut notices) = Notifier::channel();

    if cli.interactive {
        run_interactive(cli.project, &cli.data, notifier, &mut notices).await;
        return;
    }

    match cli.command {
        Some(Command::Inspect { project, screen }) => {
            run_inspect(&project, screen.as_deref(), &cli.data, notifier).await
        }
        Some(Command::Fetch) => run_fetch(&cli.data, notifier).await,
        Some(Command::Template { name, output }) => run_template(&name, &output),
        None => exit_with_error("No command given. Use --help for usage."),
    }
    print_notices(&mut notices);
}

/// Loads the dataset from a local file or by running the sheet pipeline.
async fn load_dataset(args: &DataArgs, notifier: Notifier) -> Dataset {
    if let Some(path) = &args.data {
        let table = Table::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
        return Dataset::from_table(path.clone(), table);
    }

    let mut config = match &args.config {
        Some(path) => {
            SourceConfig::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
        None => SourceConfig::for_sheet("DEMO"),
    };
    if let Some(sheet) = &args.sheet {
        config.sheet_id = sheet.clone();
    }

    let mut source = DataSource::builder()
        .config(config)
        .notifier(notifier)
        .build()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let start = Instant::now();
    match source.fetch_data().await {
        Ok(Some(origin)) => println!(
            "Fetched '{}' ({:?}) in {:?}",
            source.sheet_id(),
            origin,
            start.elapsed()
        ),
        Ok(None) => println!("No sheet configured."),
        Err(e) => exit_with_error(&e.to_string()),
    }
    source.dataset().clone()
}

async fn run_inspect(path: &str, screen: Option<&str>, args: &DataArgs, notifier: Notifier) {
    let project = ProjectFile::load(path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let dataset = load_dataset(args, notifier).await;
    let resolver = BindingResolver::new(&dataset);

    for s in project.screens.iter().filter(|s| screen.is_none_or(|id| s.id == id)) {
        println!("\n=== {} ({}) ===", s.name, s.id);
        for component in &s.components {
            println!("{}", ProvenanceFormatter::format_component(&resolver.resolve(component)));
        }
    }
}

async fn run_fetch(args: &DataArgs, notifier: Notifier) {
    let dataset = load_dataset(args, notifier).await;
    println!("\n--- Dataset '{}' ---", dataset.source_id);
    println!("Columns: {}", dataset.columns.join(" | "));
    for (i, row) in dataset.rows.iter().enumerate() {
        let cells: Vec<String> = dataset
            .ordered_cells(row)
            .into_iter()
            .map(|(_, cell)| cell.map(|c| c.to_string()).unwrap_or_default())
            .collect();
        println!("{:>3}: {}", i, cells.join(" | "));
    }
}

fn run_template(name: &str, output: &str) {
    let template = BuiltinTemplate::from_name(name).unwrap_or_else(|| {
        let names: Vec<&str> = BuiltinTemplate::ALL.iter().map(|t| t.name()).collect();
        exit_with_error(&format!("Unknown template '{}'. Available: {}", name, names.join(", ")))
    });
    ProjectFile::new(template.screens())
        .save(output)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!("Wrote template '{}' to '{}'", name, output);
}

async fn run_interactive(
    project: Option<String>,
    args: &DataArgs,
    notifier: Notifier,
    notices: &mut UnboundedReceiver<Notice>,
) {
    println!("--- Bindery Interactive Preview ---");
    let screens = match project {
        Some(path) => ProjectFile::load(&path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()))
            .screens,
        None => BuiltinTemplate::Starter.screens(),
    };
    let mut store = DocumentStore::new(screens);
    let mut dataset = load_dataset(args, notifier.clone()).await;
    print_notices(notices);
    store.set_preview_mode(true);
    print_help();

    loop {
        print_screen(&store, &dataset);
        let line = prompt_for_input("command");
        let parts: Vec<&str> = line.split_whitespace().collect();
        let index = |i: usize| parts.get(i).and_then(|s| s.parse::<usize>().ok()).unwrap_or(0);

        match parts.as_slice() {
            ["quit"] | ["exit"] => break,
            ["help"] => {
                print_help();
                continue;
            }
            ["edit"] => {
                store.set_preview_mode(false);
                continue;
            }
            ["preview"] => {
                store.set_preview_mode(true);
                continue;
            }
            _ => {}
        }

        let mut preview = Preview::new(&mut store, &mut dataset).with_notifier(notifier.clone());
        let outcome = match parts.as_slice() {
            ["click", id] => preview.click(id),
            ["item", id, ..] => preview.activate_item(id, index(2)),
            ["slide", id, ..] => preview.activate_slide(id, index(2)),
            ["back", id] => preview.back(id),
            ["buy", id] => preview.buy(id),
            ["screen", id] => preview.navigate(id),
            _ => {
                println!("Unknown command. Type 'help'.");
                continue;
            }
        };
        println!("-> {:?}", outcome);
        print_notices(notices);
    }
}

fn print_screen(store: &DocumentStore, dataset: &Dataset) {
    let mode = if store.is_preview_mode() { "preview" } else { "edit" };
    let Some(screen) = store.active_screen() else {
        println!("\n(no screens)");
        return;
    };
    println!("\n=== {} ({}) [{}] ===", screen.name, screen.id, mode);
    let resolver = BindingResolver::new(dataset);
    for component in &screen.components {
        println!("{}", ProvenanceFormatter::format_component(&resolver.resolve(component)));
    }
}

fn print_help() {
    println!("Commands:");
    println!("  click <id>         click a component");
    println!("  item <id> <n>      activate the n-th item of a grid");
    println!("  slide <id> <n>     click the n-th slide of a carousel");
    println!("  back <id>          press a toolbar back button");
    println!("  buy <id>           press a product detail buy button");
    println!("  screen <id>        jump to a screen");
    println!("  edit | preview     switch mode");
    println!("  quit");
}

fn print_notices(notices: &mut UnboundedReceiver<Notice>) {
    while let Ok(notice) = notices.try_recv() {
        println!("[{:?}] {}: {}", notice.kind, notice.title, notice.text);
    }
}

/// Prompts the user and reads a line of input. End of input reads as `quit`.
fn prompt_for_input(prompt_text: &str) -> String {
    print!("> {}: ", prompt_text);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => "quit".to_string(),
        Ok(_) => line.trim().to_string(),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
