use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead};
use std::time::Instant;
use wordle_elimination::*;

/// Plays a Wordle-style game in reverse, where the computer guesses the word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// The letters that words can use, in order.
    #[arg(short, long, default_value = "abcdefghijklmnopqrstuvwxyz")]
    alphabet: String,

    /// Seed for the guesser's random choices. Games are reproducible when this is set.
    #[arg(short, long)]
    seed: Option<u64>,

    /// The maximum number of guesses in a game.
    #[arg(short = 'n', long, default_value_t = 6)]
    max_guesses: u32,

    /// If every word is eliminated, start again from the words not yet guessed instead of giving
    /// up.
    #[arg(long)]
    reseed: bool,

    /// Log each round. Repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single game with the given word.
    Single { word: String },
    /// Run an interactive game against the solver.
    Interactive,
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logging(args.verbose);
    info!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    let alphabet = Alphabet::new(args.alphabet.chars())?;
    println!("There are {} possible words.", word_bank.len());

    let config = GuesserConfig {
        max_guesses: args.max_guesses,
        on_empty_pool: if args.reseed {
            EmptyPoolPolicy::Reseed
        } else {
            EmptyPoolPolicy::Report
        },
    };
    let guesser = create_guesser(&word_bank, &alphabet, config, args.seed)?;

    match args.command {
        Command::Single { word } => play_single_game(&word, &word_bank, &alphabet, guesser)?,
        Command::Interactive => {
            play_interactive_game(&alphabet, guesser, &mut io::stdin().lock())?
        }
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn create_guesser(
    word_bank: &WordBank,
    alphabet: &Alphabet,
    config: GuesserConfig,
    seed: Option<u64>,
) -> Result<FrequencyGuesser<StdRng>, WordleError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    FrequencyGuesser::with_rng(word_bank.clone(), alphabet.clone(), config, rng)
}

fn play_single_game(
    word: &str,
    word_bank: &WordBank,
    alphabet: &Alphabet,
    guesser: FrequencyGuesser<StdRng>,
) -> Result<(), WordleError> {
    let max_guesses = guesser.config().max_guesses;
    let result = play_game(&word.to_lowercase(), max_guesses, word_bank, alphabet, guesser);
    match result {
        Ok(GameResult::Success(guesses)) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        Ok(GameResult::Failure(guesses)) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        Ok(GameResult::UnknownWord) => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
        Err(WordleError::EmptyPool) => {
            println!("I ran out of words that match the feedback :(");
        }
        Err(error) => return Err(error),
    }
    Ok(())
}

fn play_interactive_game(
    alphabet: &Alphabet,
    mut guesser: FrequencyGuesser<StdRng>,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn Error>> {
    println!("Choose a word from the word-list. Press enter once you've chosen.");

    {
        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            println!("No input, so there's nothing to guess.");
            return Ok(());
        }
    }

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\"");

    let mut percept = Percept::initial();
    for round in 0..guesser.config().max_guesses as usize {
        let guess = match guesser.next_guess(&percept) {
            Ok(guess) => guess,
            Err(WordleError::EmptyPool) => {
                println!("No word in my list matches that feedback. Did you enter it correctly?");
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };
        println!("I'm guessing: {}. How did I do?", guess);

        let statuses = loop {
            match read_statuses(input, guess.chars().count()) {
                Ok(statuses) => break statuses,
                Err(error) if error.kind() == io::ErrorKind::InvalidInput => println!("{}", error),
                Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                    println!("No more feedback, so I'll stop here.");
                    return Ok(());
                }
                Err(error) => return Err(error.into()),
            }
        };

        if statuses.iter().all(|status| *status == 1) {
            println!("I did it! It took me {} guesses.", round + 1);
            return Ok(());
        }

        percept = Percept {
            round: round + 1,
            letter_indices: alphabet.word_to_indices(&guess)?,
            statuses,
        };
    }

    println!("I couldn't guess it :(");

    Ok(())
}

/// Reads one line of feedback. Fails with [`io::ErrorKind::UnexpectedEof`] once the input is
/// exhausted, and with [`io::ErrorKind::InvalidInput`] if the line can't be parsed.
fn read_statuses(input: &mut impl BufRead, guess_length: usize) -> io::Result<Vec<i8>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "No more input.",
        ));
    }
    parse_statuses(buffer.trim(), guess_length)
}

fn parse_statuses(input: &str, guess_length: usize) -> io::Result<Vec<i8>> {
    if input.chars().count() != guess_length {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            ),
        ));
    }

    input
        .chars()
        .map(|letter| match letter {
            '.' => Ok(0),
            'y' => Ok(-1),
            'g' => Ok(1),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Must enter only the letters '.', 'y', or 'g'. Try again.",
            )),
        })
        .collect()
}
