//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::fs;
    use std::process::Command;

    use assert_cmd::prelude::*;

    use crate::common::{part_count, Site};

    #[test]
    fn print_version() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-V")
            .output()
            .unwrap();

        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            format!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        );
        assert!(out.status.success());
    }

    #[test]
    fn convert_and_print_output_path() {
        let site = Site::new(&[
            ("page.html", br#"<script src="a.js"></script>"#),
            ("a.js", b"var a;"),
        ]);

        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg(site.join("page.html"))
            .env_remove("MHTPACK_LOG_LEVEL")
            .output()
            .unwrap();

        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            format!("{}\n", site.join("page.mht").display())
        );
        let archive = fs::read_to_string(site.join("page.mht")).unwrap();
        assert_eq!(part_count(&archive), 2);
    }

    #[test]
    fn quiet_explicit_output() {
        let site = Site::new(&[("page.html", b"<p></p>")]);
        let target = site.join("bundle.mht");

        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-q")
            .arg("-o")
            .arg(&target)
            .arg(site.join("page.html"))
            .output()
            .unwrap();

        assert!(out.status.success());
        assert!(out.stdout.is_empty());
        assert!(target.exists());
    }

    #[test]
    fn list_does_not_write() {
        let site = Site::new(&[
            (
                "page.html",
                br#"<script src="a.js"></script><a href="gone.html">gone</a>"#,
            ),
            ("a.js", b""),
        ]);

        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("--list")
            .arg(site.join("page.html"))
            .output()
            .unwrap();

        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            format!(
                "scripts:\n  a.js -> {}\nlinks:\n  gone.html (not found)\n",
                site.join("a.js").display()
            )
        );
        assert!(!site.join("page.mht").exists());
    }

    #[test]
    fn env_help() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("--env-help")
            .output()
            .unwrap();

        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains("MHTPACK_CASE_INSENSITIVE"));
    }

    #[test]
    fn invalid_env_value_is_warned_about() {
        let site = Site::new(&[("page.html", b"<p></p>")]);

        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg(site.join("page.html"))
            .env("MHTPACK_CASE_INSENSITIVE", "maybe")
            .env("NO_COLOR", "1")
            .env_remove("MHTPACK_LOG_LEVEL")
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(out.status.success());
        assert!(stderr.contains("WARN"));
        assert!(stderr.contains("Invalid boolean value 'maybe'"));
        assert!(site.join("page.mht").exists());
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use std::process::Command;

    use assert_cmd::prelude::*;

    use crate::common::Site;

    #[test]
    fn missing_source() {
        let site = Site::new(&[]);

        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg(site.join("page.html"))
            .env("NO_COLOR", "1")
            .env_remove("MHTPACK_LOG_LEVEL")
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert!(out.stdout.is_empty());
        assert_eq!(
            String::from_utf8_lossy(&out.stderr),
            format!(
                "Error: File not found: {}\n",
                site.join("page.html").display()
            )
        );
    }

    #[test]
    fn no_source_given() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .output()
            .unwrap();

        assert!(!out.status.success());
    }
}
