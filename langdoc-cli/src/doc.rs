use std::path::Path;

use langdoc::{
    doc::{decode, extract_text, write_document},
    flatten,
    keys::JsonMap,
    table::{JoinFilter, TranslationTable},
    traits::Parser,
};

use crate::validation::{validate_dir_path, validate_language_code, validate_output_conflict};

#[derive(Debug, Clone)]
pub struct DocOptions {
    pub dir: String,
    pub out_dir: Option<String>,
    pub export: bool,
    pub import: bool,
    pub base_lang: String,
    pub target_lang: Option<String>,
    pub project: Option<String>,
    pub missing: bool,
    pub force: bool,
}

pub fn run_doc_command(opts: DocOptions) -> Result<(), String> {
    if opts.export == opts.import {
        return Err(
            "unable to determine target action, please specify exactly one of --import or --export"
                .to_string(),
        );
    }

    validate_dir_path(&opts.dir)?;

    let target_lang = opts
        .target_lang
        .clone()
        .ok_or_else(|| "no target language selected, please specify this with --target-lang".to_string())?;
    validate_language_code(&opts.base_lang)?;
    validate_language_code(&target_lang)?;

    let project = opts.project.as_deref().unwrap_or("project");
    let document_name = format!("{}-{}-{}.docx", project, opts.base_lang, target_lang);

    let src_dir = Path::new(&opts.dir);
    let dest_dir = opts
        .out_dir
        .as_deref()
        .map(Path::new)
        .unwrap_or(src_dir)
        .to_path_buf();

    if opts.export {
        run_export(&opts, src_dir, &dest_dir, &target_lang, &document_name)
    } else {
        run_import(&opts, src_dir, &dest_dir, &target_lang, &document_name)
    }
}

fn run_export(
    opts: &DocOptions,
    src_dir: &Path,
    dest_dir: &Path,
    target_lang: &str,
    document_name: &str,
) -> Result<(), String> {
    println!("exporting translations from JSON to DOCX...");

    let base_path = src_dir.join(format!("{}.json", opts.base_lang));
    let target_path = src_dir.join(format!("{}.json", target_lang));
    let document_path = dest_dir.join(document_name);
    validate_output_conflict(&document_path, opts.force)?;

    // Accept nested or flattened input; flattening is idempotent on flat maps.
    let base = flatten(
        &JsonMap::read_from(&base_path)
            .map_err(|e| format!("failed to read {}: {}", base_path.display(), e))?,
    );
    let target = flatten(
        &JsonMap::read_from(&target_path)
            .map_err(|e| format!("failed to read {}: {}", target_path.display(), e))?,
    );
    println!("found {} base language entries", base.len());
    println!("found {} target language entries", target.len());

    let filter = if opts.missing {
        JoinFilter::MissingOnly
    } else {
        JoinFilter::All
    };
    let table = TranslationTable::join(&base, &target, &opts.base_lang, target_lang, filter)
        .map_err(|e| e.to_string())?;

    if opts.missing {
        println!("output will include {} missing entries.", table.entries.len());
    } else {
        println!("output will include all {} entries.", table.entries.len());
    }

    write_document(&table, &document_path).map_err(|e| e.to_string())?;
    println!("wrote document: {}", document_path.display());
    Ok(())
}

fn run_import(
    opts: &DocOptions,
    src_dir: &Path,
    dest_dir: &Path,
    target_lang: &str,
    document_name: &str,
) -> Result<(), String> {
    println!("importing translations from DOCX to JSON...");

    let document_path = src_dir.join(document_name);
    if !document_path.is_file() {
        return Err(format!(
            "cannot access document \"{}\", unable to continue",
            document_path.display()
        ));
    }

    // The output goes to a separate file so it can be merged into the
    // canonical target-language file by an external tool.
    let output_path = dest_dir.join(format!("new-{}.json", target_lang));
    validate_output_conflict(&output_path, opts.force)?;

    let text = extract_text(&document_path).map_err(|e| e.to_string())?;
    let report = decode(&text, &opts.base_lang, target_lang);

    for key in report.translations.keys() {
        println!("found translation for \"{}\"", key);
    }
    for key in &report.missing {
        eprintln!("missing translation for \"{}\"", key);
    }
    if report.skipped > 0 {
        eprintln!(
            "{} entries did not match the expected row pattern and were skipped",
            report.skipped
        );
    }

    println!(
        "writing new translations to output file: {}",
        output_path.display()
    );
    report
        .translations
        .write_to(&output_path)
        .map_err(|e| format!("failed to write {}: {}", output_path.display(), e))
}
