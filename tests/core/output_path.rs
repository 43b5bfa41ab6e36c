//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::path::{Path, PathBuf};

    use mhtpack::utils::{mht_output_path, resolve_output_path, temp_html_path};

    #[test]
    fn replaces_extension() {
        assert_eq!(
            mht_output_path(Path::new("/home/username/site/index.html")),
            PathBuf::from("/home/username/site/index.mht")
        );
    }

    #[test]
    fn replaces_only_last_extension() {
        assert_eq!(
            mht_output_path(Path::new("docs/report.v2.htm")),
            PathBuf::from("docs/report.v2.mht")
        );
    }

    #[test]
    fn adds_extension_when_missing() {
        assert_eq!(
            mht_output_path(Path::new("docs/README")),
            PathBuf::from("docs/README.mht")
        );
    }

    #[test]
    fn explicit_target_wins() {
        assert_eq!(
            resolve_output_path(
                Path::new("site/index.html"),
                Some(Path::new("out/archive.mht"))
            ),
            PathBuf::from("out/archive.mht")
        );
    }

    #[test]
    fn temp_path_next_to_source() {
        assert_eq!(
            temp_html_path(Path::new("site/index.html"), None),
            PathBuf::from("site/index_temp.html")
        );
    }

    #[test]
    fn temp_path_next_to_target() {
        assert_eq!(
            temp_html_path(
                Path::new("site/index.html"),
                Some(Path::new("out/archive.mht"))
            ),
            PathBuf::from("out/archive_temp.mht")
        );
    }

    #[test]
    fn temp_path_without_extension() {
        assert_eq!(
            temp_html_path(Path::new("site/index"), None),
            PathBuf::from("site/index_temp")
        );
    }
}
