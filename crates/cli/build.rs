use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("precis")
        .version("1.0.0")
        .author("Precis Contributors")
        .about("Extractive summarization of text, files and web pages")
        .arg(clap::arg!(<INPUT> "URL to fetch, local text/HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--"max-sentences" <NUM> "Maximum number of summary sentences").default_value("5"))
        .arg(clap::arg!(--"min-sentences" <NUM> "Minimum number of summary sentences").default_value("3"))
        .arg(clap::arg!(--ratio <RATIO> "Share of the document's sentences to keep").default_value("0.3"))
        .arg(
            clap::arg!(--language <LANG> "Stop-word language")
                .default_value("english")
                .value_parser(["english", "en"]),
        )
        .arg(clap::arg!(--html "Treat input as HTML and extract its text first"))
        .arg(clap::arg!(--"max-chars" <NUM> "Truncate input to this many characters (0 = no limit)").default_value("0"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "precis", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "precis", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "precis", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "precis", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
