use std::path::Path;

use langdoc::{flatten, keys::JsonMap, nest, traits::Parser};

use crate::{
    prompt::confirm,
    validation::{validate_file_path, validate_output_conflict},
};

#[derive(Debug, Clone)]
pub struct KeysOptions {
    pub input: String,
    pub output: Option<String>,
    pub flatten: bool,
    pub nest: bool,
    pub dry_run: bool,
    pub force: bool,
}

pub fn run_keys_command(opts: KeysOptions) -> Result<(), String> {
    validate_file_path(&opts.input)?;

    if opts.flatten == opts.nest {
        return Err(
            "no action specified, please specify exactly one of --flatten or --nest".to_string(),
        );
    }

    let output = opts.output.clone().unwrap_or_else(|| opts.input.clone());
    if output == opts.input {
        println!("no output file specified, this will overwrite the input file...");
    } else {
        validate_output_conflict(Path::new(&output), opts.force)?;
    }

    let apply_changes = opts.force
        || confirm("would you like to apply these changes?").map_err(|e| e.to_string())?;
    if !apply_changes {
        println!("process aborted, nothing more to do here...");
        return Ok(());
    }

    let input_map = JsonMap::read_from(&opts.input)
        .map_err(|e| format!("failed to read {}: {}", opts.input, e))?;

    let output_map = if opts.flatten {
        println!("flattening JSON keys...");
        flatten(&input_map)
    } else {
        println!("nesting JSON keys...");
        nest(&input_map).map_err(|e| e.to_string())?
    };

    let before = serde_json::to_string_pretty(&input_map).map_err(|e| e.to_string())?;
    let after = serde_json::to_string_pretty(&output_map).map_err(|e| e.to_string())?;
    println!("{}", after);

    if before == after {
        println!("process resulted in no structural changes, nothing more to do here...");
        return Ok(());
    }

    if opts.dry_run {
        println!("performed a dry run, skipping file write...");
        return Ok(());
    }

    println!("file structure updated, writing to output file...");
    output_map
        .write_to(&output)
        .map_err(|e| format!("failed to write {}: {}", output, e))
}
