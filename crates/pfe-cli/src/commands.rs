use anyhow::Result;
use comfy_table::Table;

use pfe_cli::layout::{DataLayout, Split};
use pfe_cli::pipeline::{BuildOptions, resolve_taxonomy, run_build as run_pipeline};
use pfe_cli::types::BuildResult;
use pfe_core::MissingDiagnosisPolicy;

use crate::cli::{BuildArgs, CategoriesArgs, SplitArg};
use crate::summary::apply_table_style;

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let taxonomy = resolve_taxonomy(args.taxonomy.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Category", "Output key", "Range"]);
    apply_table_style(&mut table);
    for (_, category) in taxonomy.iter() {
        table.add_row(vec![
            category.name.clone(),
            category.column_name(),
            format!("{}-{}", category.start, category.end),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let layout = DataLayout::from_root(&args.data_root)
        .with_input_dir(args.input_dir.clone())
        .with_output_dir(args.output_dir.clone());
    let options = BuildOptions {
        taxonomy: args.taxonomy.clone(),
        splits: selected_splits(args.split),
        policy: if args.allow_missing_diagnoses {
            MissingDiagnosisPolicy::Empty
        } else {
            MissingDiagnosisPolicy::Fail
        },
        dry_run: args.dry_run,
        ..BuildOptions::new(layout)
    };
    run_pipeline(&options)
}

fn selected_splits(arg: SplitArg) -> Vec<Split> {
    match arg {
        SplitArg::Train => vec![Split::Train],
        SplitArg::Test => vec![Split::Test],
        SplitArg::Both => Split::ALL.to_vec(),
    }
}
