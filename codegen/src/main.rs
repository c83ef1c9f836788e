use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use contentful_codegen_lib::{Codegen, FieldsOnlyGenerator, OverrideMap, TypesGenerator};
use contentful_ir::ContentModel;

#[derive(Parser)]
#[command(name = "contentful-typegen")]
#[command(about = "Generate TypeScript declarations from a content model export")]
struct Args {
    /// Content model JSON (space export or content_types API response)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Emit resolved fields-only interfaces instead of full entry shapes
    #[arg(long)]
    fields_only: bool,

    /// Overrides JSON: content type id -> field id -> replacement type text
    #[arg(long)]
    overrides: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.overrides.is_some() && !args.fields_only {
        anyhow::bail!("--overrides requires --fields-only");
    }

    println!("📖 Reading content model: {}", args.input.display());
    let input = std::fs::read_to_string(&args.input)?;
    let model: ContentModel =
        serde_json::from_str(&input).context("failed to parse content model")?;

    let overrides: Option<OverrideMap> = match &args.overrides {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Some(serde_json::from_str(&raw).context("failed to parse overrides")?)
        }
        None => None,
    };

    println!(
        "🎨 Generating declarations for {} content type(s)...",
        model.content_types.len()
    );
    let generator: Box<dyn Codegen> = if args.fields_only {
        Box::new(FieldsOnlyGenerator::new(overrides))
    } else {
        Box::new(TypesGenerator)
    };
    let code = generator.generate(&model)?;

    println!("💾 Writing to: {}", args.output.display());
    for file in &code.files {
        let path = args.output.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.content)?;
        println!("  - {}", file.path);
    }

    println!("✅ Done!");
    Ok(())
}
