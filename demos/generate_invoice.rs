use billpress::{PipelineBuilder, PipelineError};
use std::env;

/// Generates every invoice in the bundled sample data set.
fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "billpress=info");
        }
    }
    env_logger::init();

    println!("Running invoice generation demo...");

    let pipeline = PipelineBuilder::new()
        .with_data_file("demos/data/invoices.csv")
        .with_template_file("demos/templates/invoice.html")
        .with_output_dir("demos/output")
        .build()?;
    println!("✓ Pipeline built from demos/data/invoices.csv");

    let ids = pipeline.invoice_ids();
    println!("✓ Found {} invoices", ids.len());

    for id in &ids {
        let path = pipeline.generate_to_dir(id)?;
        println!("✓ Invoice #{} -> {}", id, path.display());
    }

    println!("\nSuccess! Open the files under demos/output in a browser and print.");
    Ok(())
}
