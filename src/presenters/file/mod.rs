pub mod pam;
pub mod ppm;

use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use pam::PamFilePresenter;
use ppm::PpmFilePresenter;

/// Picks the writer from the file extension: `.pam` keeps alpha, anything
/// else is written as PPM.
#[must_use]
pub fn presenter_for_path(filepath: &Path) -> Box<dyn FilePresenterPort> {
    let is_pam = filepath
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pam"));

    if is_pam {
        Box::new(PamFilePresenter::new())
    } else {
        Box::new(PpmFilePresenter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_selects_format() {
        assert_eq!(presenter_for_path(Path::new("a/b.pam")).format_name(), "PAM");
        assert_eq!(presenter_for_path(Path::new("a/b.PAM")).format_name(), "PAM");
        assert_eq!(presenter_for_path(Path::new("a/b.ppm")).format_name(), "PPM");
        assert_eq!(presenter_for_path(Path::new("no_extension")).format_name(), "PPM");
    }
}
