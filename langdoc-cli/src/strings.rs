use langdoc::{keys::JsonMap, stats, traits::Parser};

use crate::validation::validate_file_path;

#[derive(Debug, Clone)]
pub struct StringsOptions {
    pub input: String,
    pub duplicates: bool,
    pub words: bool,
    pub chars: bool,
    pub include_spaces: bool,
}

pub fn run_strings_command(opts: StringsOptions) -> Result<(), String> {
    validate_file_path(&opts.input)?;

    if !opts.duplicates && !opts.words && !opts.chars {
        return Err(
            "no action specified, please specify at least one of --duplicates, --words, or --chars"
                .to_string(),
        );
    }

    // The scanner expects a flattened, all-string map and aborts otherwise.
    let flat = JsonMap::read_from(&opts.input)
        .map_err(|e| format!("failed to read {}: {}", opts.input, e))?;

    if opts.duplicates {
        let groups = stats::find_duplicates(&flat).map_err(|e| e.to_string())?;
        println!("strings found with multiple keys: {}", groups.len());
        for (value, keys) in &groups {
            println!("---------------------------------");
            println!(" string: \"{}\":", value);
            for key in keys {
                println!("  key: \"{}\"", key);
            }
        }
    }

    if opts.words {
        let total = stats::count_words(&flat).map_err(|e| e.to_string())?;
        println!("total words: {}", total);
    }

    if opts.chars {
        let total = stats::count_chars(&flat, opts.include_spaces).map_err(|e| e.to_string())?;
        if opts.include_spaces {
            println!("total characters (including spaces): {}", total);
        } else {
            println!("total characters: {}", total);
        }
    }

    Ok(())
}
