use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("sightline")
        .version("1.0.0")
        .author("Sightline Contributors")
        .about("Collect the visible text of numbered content folders into one file")
        .arg(
            clap::arg!(--root <DIR> "Root directory holding the numbered folders")
                .default_value(".")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-o --out <FILE> "Output file")
                .default_value("pleas_visible.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--words "Write words instead of text"))
        .arg(
            clap::Arg::new("one_per_line")
                .long("one-per-line")
                .help("With --words, write one word per line")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(clap::arg!(--headers "Prefix each section with a ----- NNN ----- marker"))
        .arg(clap::arg!(--log "Print a line naming the output file and section count"))
        .arg(clap::arg!(--json "Print the run summary as JSON on stdout"))
        .arg(clap::arg!(-q --quiet "Suppress warnings"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "sightline", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "sightline", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "sightline", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "sightline", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
