use clap::{Parser, Subcommand};

use langdoc_cli::{
    doc::{DocOptions, run_doc_command},
    keys::{KeysOptions, run_keys_command},
    strings::{StringsOptions, run_strings_command},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Flatten or nest the keys of a translation JSON file.
    Keys {
        /// The input file to process
        input: String,

        /// The output file; defaults to rewriting the input in place
        output: Option<String>,

        /// Convert nested objects into dot-flattened keys
        #[arg(short, long)]
        flatten: bool,

        /// Expand dot-flattened keys into nested objects
        #[arg(short, long)]
        nest: bool,

        /// Print the result without writing the output file
        #[arg(short = 'N', long)]
        dry_run: bool,

        /// Skip the confirmation prompt and overwrite existing output
        #[arg(short = 'F', long)]
        force: bool,
    },

    /// Export translations to a Word document for translators, or import a
    /// translated document back into JSON.
    Doc {
        /// Directory holding the `<lang>.json` translation files
        dir: String,

        /// Output directory; defaults to DIR
        out_dir: Option<String>,

        /// Export translations from JSON to a document
        #[arg(short, long)]
        export: bool,

        /// Import translations from a document back to JSON
        #[arg(short, long)]
        import: bool,

        /// Base language id, the source of truth for the key set
        #[arg(short, long, default_value = "en")]
        base_lang: String,

        /// Target language id being translated into
        #[arg(short, long)]
        target_lang: Option<String>,

        /// Project name used in the document file name
        #[arg(short, long)]
        project: Option<String>,

        /// Export only entries missing a target translation
        #[arg(short, long)]
        missing: bool,

        /// Overwrite an existing output file
        #[arg(short = 'F', long)]
        force: bool,
    },

    /// Scan the string values of a flattened translation file.
    Strings {
        /// The input file to scan
        input: String,

        /// Report values shared by more than one key
        #[arg(short, long)]
        duplicates: bool,

        /// Report the total word count
        #[arg(short, long)]
        words: bool,

        /// Report the total character count
        #[arg(short, long)]
        chars: bool,

        /// Count whitespace characters as well (with --chars)
        #[arg(long)]
        include_spaces: bool,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Keys {
            input,
            output,
            flatten,
            nest,
            dry_run,
            force,
        } => run_keys_command(KeysOptions {
            input,
            output,
            flatten,
            nest,
            dry_run,
            force,
        }),
        Commands::Doc {
            dir,
            out_dir,
            export,
            import,
            base_lang,
            target_lang,
            project,
            missing,
            force,
        } => run_doc_command(DocOptions {
            dir,
            out_dir,
            export,
            import,
            base_lang,
            target_lang,
            project,
            missing,
            force,
        }),
        Commands::Strings {
            input,
            duplicates,
            words,
            chars,
            include_spaces,
        } => run_strings_command(StringsOptions {
            input,
            duplicates,
            words,
            chars,
            include_spaces,
        }),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
