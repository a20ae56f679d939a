use std::fs;
use std::process::exit;
use std::time::Instant;

use structopt::StructOpt;

use spell_tools::dictionary::dictionary::{Dictionary, FileFormat};
use spell_tools::text::words;

/// Check a text against a dictionary and report the words it doesn't contain.
#[derive(StructOpt)]
struct Cli {
    /// The path to the dictionary file, one word per line
    #[structopt(parse(from_os_str))]
    dictionary: std::path::PathBuf,
    /// The path to the text to spell-check
    #[structopt(parse(from_os_str))]
    text: std::path::PathBuf,
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();

    let mut dictionary = Dictionary::new();

    let start = Instant::now();
    if let Err(e) = dictionary.load(&args.dictionary, FileFormat::builder().build()) {
        eprintln!("{}", e);
        exit(1);
    }
    let load_time = start.elapsed();

    let text = match fs::read_to_string(&args.text) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("could not read text {:?}: {}", args.text, e);
            exit(1);
        }
    };

    println!("MISSPELLED WORDS\n");

    let start = Instant::now();
    let mut in_text: usize = 0;
    let mut misspelled: usize = 0;
    for word in words(&text) {
        in_text += 1;
        if !dictionary.check(word) {
            misspelled += 1;
            println!("{}", word);
        }
    }
    let check_time = start.elapsed();

    println!();
    println!("WORDS MISSPELLED:    {}", misspelled);
    println!("WORDS IN DICTIONARY: {}", dictionary.size());
    println!("WORDS IN TEXT:       {}", in_text);
    println!("TIME IN load:        {:.3}s", load_time.as_millis() as f64 / 1000.0);
    println!("TIME IN check:       {:.3}s", check_time.as_millis() as f64 / 1000.0);
}
