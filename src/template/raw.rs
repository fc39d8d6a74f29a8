use std::{fs, io, path::Path};

use log::debug;

/// Читает "сырой" текст шаблона из файла.
/// Шаблон может содержать плейсхолдеры вида `{{name}}`.
pub fn load(path: &Path) -> LoadResult {
    debug!("Читаем шаблон из {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content)
}

pub type LoadResult = std::result::Result<String, LoadError>;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("read template file {path}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
}
