use clap::Parser;
use rs_wordle_helper::*;
use std::fs::File;
use std::io;
use std::io::Write;

/// Interactive helper that narrows a word list down to the words consistent with your clues.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// The length of the word being guessed.
    #[clap(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let mut words_reader = io::BufReader::new(File::open(args.words_file)?);
    let word_bank = WordBank::from_reader(&mut words_reader, args.word_length)?;
    println!("There are {} possible words.", word_bank.len());
    print_usage(args.word_length);

    let mut constraints = Constraints::new(args.word_length);
    let mut buffer = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }
        let input = buffer.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "placed" => constraints.set_placed_pattern(rest),
            "misplaced" => constraints.set_misplaced_pattern(rest),
            "bad" => constraints.set_bad(rest),
            "clear" => constraints.clear(),
            "show" => {}
            "quit" | "exit" => break,
            "" => continue,
            _ => {
                eprintln!("Unknown command: {}", command);
                print_usage(args.word_length);
                continue;
            }
        }

        let candidates = get_candidate_words(&constraints, &word_bank);
        println!("{}", SolutionSummary::from_candidates(candidates));
    }

    Ok(())
}

fn print_usage(word_length: usize) {
    println!(
        "Enter your clues one line at a time. Use '.' or '_' for positions you don't know.\n\n\
         \tplaced <pattern>     letters known to be at these exact positions, e.g. \"{placed}\"\n\
         \tmisplaced <pattern>  letters in the word but not at these positions, e.g. \"{misplaced}\"\n\
         \tbad <letters>        letters known to be absent, e.g. \"qxz\"\n\
         \tclear                forget all clues\n\
         \tshow                 print the current candidates again\n\
         \tquit                 exit\n\n\
         Patterns are {word_length} characters long; shorter patterns leave the rest unknown.",
        placed = example_pattern(word_length, 'a'),
        misplaced = example_pattern(word_length, 'e'),
        word_length = word_length
    );
}

fn example_pattern(word_length: usize, letter: char) -> String {
    let mut pattern = String::new();
    pattern.push(letter);
    for _ in 1..word_length {
        pattern.push('.');
    }
    pattern
}
