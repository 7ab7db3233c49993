use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("cannot access input file \"{}\", unable to continue", path));
    }

    if !path_obj.is_file() {
        return Err(format!("path is not a file: {}", path));
    }

    Ok(())
}

/// Validate directory path exists and is a directory
pub fn validate_dir_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() || !path_obj.is_dir() {
        return Err(format!(
            "\"{}\" does not seem to be a valid directory, unable to continue",
            path
        ));
    }

    Ok(())
}

/// Validate language code format using unic-langid (same as lib crate users expect)
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("language code cannot be empty".to_string());
    }

    match lang.parse::<LanguageIdentifier>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )),
    }
}

/// Reject an existing output path unless overwriting was requested
pub fn validate_output_conflict(path: &Path, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "output file \"{}\" already exists, specify --force to overwrite",
            path.display()
        ));
    }
    Ok(())
}
