use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("notesync")
        .version(env!("CARGO_PKG_VERSION"))
        .author("notesync contributors")
        .about("Convert plain-text notes into HTML pages")
        .arg(clap::arg!(<INPUT> "Notes, Markdown or HTML file, http(s) URL, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --from <FORMAT> "Source format (notes, markdown, html)")
                .value_name("FORMAT")
                .value_parser(["notes", "markdown", "html"]),
        )
        .arg(clap::arg!(--fragment "Emit notes without the XHTML envelope"))
        .arg(clap::arg!(--minutes "Stage the output as today's meeting-minutes page"))
        .arg(
            clap::arg!(--config <FILE> "Sync configuration file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--force "Overwrite existing output without asking"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "notesync", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "notesync", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "notesync", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "notesync", &completions_dir).unwrap();
}
