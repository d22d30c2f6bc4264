use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("seoscope")
        .version(env!("CARGO_PKG_VERSION"))
        .author("seoscope Contributors")
        .about("Analyze text content for readability, keywords and SEO suggestions")
        .arg(
            clap::arg!(-f --file <FILE> "Path to the text file to analyze, or '-' for stdin")
                .default_value("sample_content.txt"),
        )
        .arg(clap::arg!(--mock "Use mock suggestions (no API key needed)"))
        .arg(clap::arg!(-t --top <N> "Number of top keywords to show").default_value("8"))
        .arg(
            clap::arg!(--stopwords <FILE> "Stopword list replacing the built-in one (whitespace separated)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--model <NAME> "Chat model used for suggestions").default_value("gpt-3.5-turbo"))
        .arg(clap::arg!(--"api-key" <KEY> "API key for the completion endpoint (mock mode when absent)"))
        .arg(
            clap::arg!(--"api-base" <URL> "Base URL of the chat-completion API")
                .default_value("https://api.openai.com/v1"),
        )
        .arg(clap::arg!(--timeout <SECS> "Timeout for the suggestion request in seconds").default_value("30"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "seoscope", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "seoscope", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "seoscope", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "seoscope", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
