//! Notebook Assembly Example
//!
//! Demonstrates the write-once lifecycle of a notebook document:
//! 1. Consume a producer's plan/code pairs in order
//! 2. Assemble them into alternating markdown/code cells
//! 3. Write the .ipynb artifact
//! 4. Parse it back and verify integrity

use anyhow::Result;
use nbdoc_core::{parse_notebook, write_notebook, NotebookBuilder};

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Notebook Assembly Example ===\n");

    // Step 1: the plan/code pairs as the upstream pipeline would emit them
    let steps: &[(&str, Option<&str>)] = &[
        (
            "## Step 1: Load the dataset\nRead the raw CSV and inspect its shape.\n",
            Some("import pandas as pd\ndf = pd.read_csv('vestiaire.csv')\ndf.shape\n"),
        ),
        (
            "## Step 2: Clean the data\nDrop incomplete rows and persist the cleaned frame.\n",
            Some("df = df.dropna()\ndf.to_csv('cleaned_data.csv', index=False)\n"),
        ),
        (
            "## Step 3: Findings\nSummarize what the cleaned data supports.\n",
            None,
        ),
    ];

    // Step 2: assemble in emission order
    println!("Step 1: Assembling {} plan steps...", steps.len());
    let mut builder = NotebookBuilder::new().language("python");
    for (plan, code) in steps {
        builder.push_markdown(plan);
        if let Some(code) = code {
            builder.push_code(code);
        }
    }
    let notebook = builder.finish();
    println!("  Assembled {} cells", notebook.cell_count());

    // Step 3: write the artifact
    let path = std::env::temp_dir().join("analysis_report.ipynb");
    write_notebook(&path, &notebook)?;
    println!("Step 2: Wrote {}", path.display());

    // Step 4: read it back and verify
    let loaded = parse_notebook(&path)?;
    println!("Step 3: Parsed back {} cells", loaded.cell_count());
    assert_eq!(loaded, notebook);
    println!("\nRound-trip verified: documents are equal");

    Ok(())
}
