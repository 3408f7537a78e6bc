use billpress::compose::DEFAULT_CURRENCY;
use billpress::paginate::DEFAULT_PAGE_CAPACITY;
use billpress::{
    Ident, PageSetup, PipelineBuilder, PipelineError, QuantityPolicy, RunConfig, SystemViewer,
    Viewer, discover,
};
use clap::Parser;
use log::warn;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Generate print-ready invoices from CSV/JSON data and an HTML template.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Invoice data source (.csv or .json); selected interactively when omitted
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Markup template (.html); selected interactively when omitted
    #[arg(long)]
    template_file: Option<PathBuf>,

    /// Directory scanned for data files when --data-file is omitted
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory scanned for templates when --template-file is omitted
    #[arg(long, default_value = "templates")]
    template_dir: PathBuf,

    /// Invoice identifier to generate; selected interactively when omitted
    #[arg(long)]
    invoice: Option<String>,

    /// Generate every invoice found in the data source
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Directory generated documents are written into
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Line items per page
    #[arg(long, default_value_t = DEFAULT_PAGE_CAPACITY)]
    page_capacity: usize,

    /// Currency marker appended to amount cells
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Fail on malformed quantities instead of defaulting them to 1
    #[arg(long, default_value_t = false)]
    strict_quantities: bool,

    /// Open each generated document in the system viewer
    #[arg(long, default_value_t = false)]
    open: bool,
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "billpress=info");
        }
    }
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), PipelineError> {
    let data_file = match args.data_file {
        Some(path) => path,
        None => select_data_file(&args.data_dir)?,
    };
    let template_file = match args.template_file {
        Some(path) => path,
        None => select_template_file(&args.template_dir)?,
    };

    let config = RunConfig {
        data_file,
        template_file,
        output_dir: args.output_dir,
        page_capacity: args.page_capacity,
        currency: args.currency,
        quantity_policy: if args.strict_quantities {
            QuantityPolicy::Strict
        } else {
            QuantityPolicy::Lenient
        },
        page_setup: PageSetup::default(),
        open_after_render: args.open,
    };

    let pipeline = PipelineBuilder::new().with_config(config).build()?;

    let ids = pipeline.invoice_ids();
    if ids.is_empty() {
        return Err(PipelineError::Config(format!(
            "no invoices found in '{}'",
            pipeline.config().data_file.display()
        )));
    }

    let selected: Vec<Ident> = if args.all {
        ids
    } else if let Some(raw) = args.invoice {
        vec![Ident::new(raw)]
    } else {
        vec![select_invoice(&ids)?]
    };

    let viewer = SystemViewer::new();
    for id in &selected {
        let path = pipeline.generate_to_dir(id)?;
        println!("Generated {}", path.display());
        if pipeline.config().open_after_render {
            if let Err(e) = viewer.open(&path) {
                warn!("Could not open '{}': {}", path.display(), e);
            }
        }
    }
    Ok(())
}

fn select_data_file(dir: &Path) -> Result<PathBuf, PipelineError> {
    let files = discover::list_data_files(dir)?;
    if files.is_empty() {
        return Err(PipelineError::Config(format!(
            "no data files (.csv or .json) found in '{}'",
            dir.display()
        )));
    }
    println!("\nAvailable data files:");
    for (index, file) in files.iter().enumerate() {
        println!("  {}. {}", index + 1, file_label(file));
    }
    let choice = prompt_index("Select a data file", files.len())?;
    Ok(files[choice].clone())
}

fn select_template_file(dir: &Path) -> Result<PathBuf, PipelineError> {
    let files = discover::list_template_files(dir)?;
    if files.is_empty() {
        return Err(PipelineError::Config(format!(
            "no templates (.html) found in '{}'",
            dir.display()
        )));
    }
    println!("\nAvailable templates:");
    for (index, file) in files.iter().enumerate() {
        println!("  {}. {}", index + 1, file_label(file));
    }
    let choice = prompt_index("Select a template", files.len())?;
    Ok(files[choice].clone())
}

fn select_invoice(ids: &[Ident]) -> Result<Ident, PipelineError> {
    println!("\nAvailable invoices:");
    for (index, id) in ids.iter().enumerate() {
        println!("  {}. Invoice #{}", index + 1, id);
    }
    let choice = prompt_index("Select an invoice", ids.len())?;
    Ok(ids[choice].clone())
}

fn file_label(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("(unnamed)")
}

/// Re-prompts until a number in `1..=len` is entered. Callers bail out on
/// empty menus, so `len` is always at least 1 here.
fn prompt_index(prompt: &str, len: usize) -> Result<usize, PipelineError> {
    let stdin = io::stdin();
    loop {
        print!("{} (1-{}): ", prompt, len);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(PipelineError::Config(
                "input closed before a selection was made".into(),
            ));
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(n - 1),
            _ => println!("Please enter a number between 1 and {}.", len),
        }
    }
}
