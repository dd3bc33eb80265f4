//! Asset path conventions shared with the rendering layer.

const PHOTO_ROOT: &str = "photos";

pub fn photo_url(path: &str) -> String {
    format!("{PHOTO_ROOT}/{path}")
}

/// Thumbnails live under `photos/thumbs/<dir>/<stem>.jpg`, always re-encoded as JPEG.
pub fn thumbnail_path(path: &str) -> String {
    let (dir, file) = match path.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, path),
    };
    let stem = match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    };
    match dir {
        Some(dir) => format!("{PHOTO_ROOT}/thumbs/{dir}/{stem}.jpg"),
        None => format!("{PHOTO_ROOT}/thumbs/{stem}.jpg"),
    }
}

pub fn flag_url(country_code: &str) -> String {
    format!(
        "https://flagcdn.com/w40/{}.png",
        country_code.to_ascii_lowercase()
    )
}
